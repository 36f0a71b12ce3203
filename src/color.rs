//! Color escape sequences for the echo printout.
//!
//! Colors are named the way ratatui names them and translated to the
//! 16-color ANSI codes every terminal understands.

use crate::config::{ColorMode, ConfigError, DisplayConfig};
use ratatui::style::Color;
use std::ffi::OsStr;
use std::str::FromStr;

/// Blue foreground.
pub const FG_BLUE: &str = "\x1b[34m";

/// White (ANSI index 7) background.
pub const BG_WHITE: &str = "\x1b[47m";

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Foreground and background sequences written before echoed text.
///
/// Immutable once built; an inactive console yields empty sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorConsole {
    foreground: &'static str,
    background: &'static str,
}

impl Default for ColorConsole {
    fn default() -> Self {
        Self {
            foreground: FG_BLUE,
            background: BG_WHITE,
        }
    }
}

impl ColorConsole {
    /// Console that emits no escape sequences at all.
    pub fn plain() -> Self {
        Self {
            foreground: "",
            background: "",
        }
    }

    /// Build the console from the `[display]` section.
    ///
    /// Color names are validated even when the mode turns styling off, so a
    /// typo in the config file is reported regardless of the terminal.
    pub fn from_config(config: &DisplayConfig, stdout_is_tty: bool) -> Result<Self, ConfigError> {
        let foreground = fg_to_ansi(parse_color(&config.foreground)?);
        let background = bg_to_ansi(parse_color(&config.background)?);

        if !config.color.is_active(stdout_is_tty) {
            return Ok(Self::plain());
        }

        Ok(Self {
            foreground,
            background,
        })
    }

    /// Foreground escape sequence.
    pub fn foreground(&self) -> &'static str {
        self.foreground
    }

    /// Background escape sequence.
    pub fn background(&self) -> &'static str {
        self.background
    }

    /// Whether any styling is emitted.
    pub fn is_styled(&self) -> bool {
        !self.foreground.is_empty() || !self.background.is_empty()
    }

    /// Sequence that undoes the styling, empty for a plain console.
    pub fn reset(&self) -> &'static str {
        if self.is_styled() {
            ANSI_RESET
        } else {
            ""
        }
    }
}

impl ColorMode {
    /// Whether styling applies for the given stdout.
    ///
    /// `auto` also honors the `NO_COLOR` convention.
    pub fn is_active(self, stdout_is_tty: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                stdout_is_tty && !no_color_requested(std::env::var_os("NO_COLOR").as_deref())
            }
        }
    }
}

/// `NO_COLOR` only counts when set to a non-empty value.
fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

fn parse_color(name: &str) -> Result<Color, ConfigError> {
    let color = Color::from_str(name).map_err(|_| ConfigError::InvalidColor {
        name: name.to_string(),
    })?;

    match color {
        Color::Rgb(..) | Color::Indexed(_) => Err(ConfigError::InvalidColor {
            name: name.to_string(),
        }),
        color => Ok(color),
    }
}

/// Convert a ratatui Color to a foreground ANSI escape code.
fn fg_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[39m",
        // Rejected by parse_color
        _ => "",
    }
}

/// Convert a ratatui Color to a background ANSI escape code.
fn bg_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[40m",
        Color::Red => "\x1b[41m",
        Color::Green => "\x1b[42m",
        Color::Yellow => "\x1b[43m",
        Color::Blue => "\x1b[44m",
        Color::Magenta => "\x1b[45m",
        Color::Cyan => "\x1b[46m",
        Color::Gray => "\x1b[47m",
        Color::DarkGray => "\x1b[100m",
        Color::LightRed => "\x1b[101m",
        Color::LightGreen => "\x1b[102m",
        Color::LightYellow => "\x1b[103m",
        Color::LightBlue => "\x1b[104m",
        Color::LightMagenta => "\x1b[105m",
        Color::LightCyan => "\x1b[106m",
        Color::White => "\x1b[107m",
        Color::Reset => "\x1b[49m",
        _ => "",
    }
}
