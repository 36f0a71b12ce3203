//! Configuration file handling.
//!
//! The file is optional TOML; every section falls back to its defaults so a
//! partial file only overrides what it names.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "SCRIPTBOX_CONFIG";

/// Bytes read from the file per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 4000;

/// Longest filename the interactive prompt accepts.
pub const DEFAULT_MAX_FILENAME_LENGTH: usize = 499;

/// Errors while locating or parsing the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown color '{name}' (use a name like blue, gray or light-red)")]
    InvalidColor { name: String },

    #[error("Could not determine the config directory")]
    NoConfigDir,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub loader: LoaderConfig,
    pub display: DisplayConfig,
    pub prompt: PromptConfig,
}

/// `[loader]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Chunk size in bytes (minimum: 1).
    pub chunk_size: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Echo loaded text before handing it to the console box.
    pub echo: bool,
    pub color: ColorMode,
    pub foreground: String,
    pub background: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            echo: true,
            color: ColorMode::Always,
            foreground: "blue".to_string(),
            // ANSI index 7, what most terminals render as white
            background: "gray".to_string(),
        }
    }
}

/// When echoed text is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Always,
    Auto,
    Never,
}

/// `[prompt]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub label: String,
    /// Maximum filename length in characters (minimum: 1).
    pub max_filename_length: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            label: "File: ".to_string(),
            max_filename_length: DEFAULT_MAX_FILENAME_LENGTH,
        }
    }
}

impl Config {
    /// Default location: `<config dir>/scriptbox/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("scriptbox").join("config.toml"))
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse TOML content and clamp out-of-range values.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(content)?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        self.loader.chunk_size = self.loader.chunk_size.max(1);
        self.prompt.max_filename_length = self.prompt.max_filename_length.max(1);
        self
    }
}
