//! Load command handler

use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;

use scriptbox::config::PromptConfig;
use scriptbox::{ColorConsole, Config, FilenamePrompt, ScriptLoader, Sink};

/// Load `file`, or the file named at the prompt, into `console`.
///
/// A failed load has already been reported by the loader and is not an
/// error here; only prompt and configuration failures are.
pub fn handle(
    file: Option<PathBuf>,
    show_echo: bool,
    config: &Config,
    console: &mut dyn Sink,
) -> Result<()> {
    let colors = ColorConsole::from_config(&config.display, atty::is(atty::Stream::Stdout))?;

    let path = match file {
        Some(path) => path,
        None => match ask_filename(&config.prompt)? {
            Some(path) => path,
            None => {
                tracing::debug!("no filename given");
                return Ok(());
            }
        },
    };

    let mut loader = ScriptLoader::from_config(config, colors);
    let outcome = loader.load(&path, show_echo, console);
    tracing::debug!(?outcome, path = %path.display(), "load finished");

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn ask_filename(config: &PromptConfig) -> Result<Option<PathBuf>> {
    let prompt = FilenamePrompt::from_config(config);
    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    prompt
        .ask(&mut input, &mut output)
        .context("Failed to read filename")
}
