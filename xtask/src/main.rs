//! Development tasks for scriptbox.
//!
//! Run with `cargo run -p xtask -- <task>`.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for scriptbox")]
struct Args {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Render the scriptbox man pages
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Args::parse().task {
        Task::Man { out_dir } => generate_man(&out_dir),
    }
}

/// Write `scriptbox.1` plus one page per subcommand.
fn generate_man(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let command = scriptbox::cli::Cli::command();
    write_page(&command, "scriptbox", out_dir)?;

    for sub in command.get_subcommands() {
        let name = format!("scriptbox-{}", sub.get_name());
        write_page(sub, &name, out_dir)?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

fn write_page(command: &clap::Command, name: &str, out_dir: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(command.clone())
        .title(name.to_uppercase())
        .render(&mut buffer)?;

    let path = out_dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
