//! Config subcommand handler

use anyhow::Result;
use std::path::Path;

use scriptbox::Config;

/// Show the effective configuration as TOML.
///
/// The first line names the file it came from, as a TOML comment.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config, path: &Path) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, defaults)", path.display())
    };
    println!("# {}", source);
    print!("{}", toml_str);
    Ok(())
}
