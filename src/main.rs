use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

mod commands;

use scriptbox::cli::{Cli, Commands};
use scriptbox::{Config, ConsoleBox};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Needs no configuration, so a broken config file cannot block it
    if let Some(Commands::Completions { shell }) = cli.command {
        return commands::completions::handle(shell);
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    if let Some(mode) = cli.color {
        config.display.color = mode;
    }

    // The one console box for this process
    let mut console = ConsoleBox::stdout();

    match cli.command {
        // The interactive prompt always echoes
        None => commands::load::handle(None, true, &config, &mut console),
        Some(Commands::Load { file, no_echo }) => {
            let show_echo = config.display.echo && !no_echo;
            commands::load::handle(file, show_echo, &config, &mut console)
        }
        Some(Commands::Config) => commands::config::handle_show(&config, &config_path),
        Some(Commands::Completions { .. }) => Ok(()),
    }
}

/// Log to stderr; warnings only unless -v is given.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}
