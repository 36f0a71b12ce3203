//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can render the man page from it.

use crate::config::ColorMode;
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Load a text file, echo it in color and show it in the console box
#[derive(Parser, Debug)]
#[command(name = "scriptbox")]
#[command(version, long_version = long_version())]
#[command(about = "Load a text file, echo it in color and show it in the console box")]
#[command(
    long_about = "Load a text file, echo it in color and show it in the console box.\n\n\
    Without a command, scriptbox prompts for a filename and loads it with echo enabled."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file [default: $SCRIPTBOX_CONFIG or <config dir>/scriptbox/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// When to style the echo (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a file into the console box
    #[command(long_about = "Load a file into the console box.\n\n\
    The file is read completely, echoed in color unless --no-echo is given, \
    then shown by the console box. Without FILE you are prompted for one.")]
    Load {
        /// File to load (prompted for when omitted)
        file: Option<PathBuf>,

        /// Skip the colored echo
        #[arg(long)]
        no_echo: bool,
    },

    /// Show the effective configuration as TOML
    Config,

    /// Print a shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Version string with build metadata.
fn long_version() -> &'static str {
    static LONG_VERSION: OnceLock<String> = OnceLock::new();
    LONG_VERSION.get_or_init(|| {
        let date = option_env!("SCRIPTBOX_BUILD_DATE").unwrap_or("unknown");
        match option_env!("VERGEN_GIT_SHA") {
            Some(sha) => format!("{} ({} {})", env!("CARGO_PKG_VERSION"), sha, date),
            None => format!("{} ({})", env!("CARGO_PKG_VERSION"), date),
        }
    })
}
