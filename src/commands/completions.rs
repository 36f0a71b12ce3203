//! Completions subcommand handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

use scriptbox::cli::Cli;

/// Write the completion script for `shell` to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "scriptbox", &mut io::stdout());
    Ok(())
}
