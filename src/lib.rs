//! scriptbox - load a text file, echo it in color, show it in a console box.
//!
//! The pieces are deliberately small: [`ScriptLoader`] reads a file into a
//! [`Script`], optionally echoes it through a [`ColorConsole`], and hands it
//! to any [`Sink`], of which [`ConsoleBox`] is the standard one.

pub mod cli;
pub mod color;
pub mod config;
pub mod console;
pub mod loader;
pub mod prompt;
pub mod script;

pub use color::ColorConsole;
pub use config::Config;
pub use console::{ConsoleBox, Sink};
pub use loader::{LoadError, LoadErrorKind, LoadOutcome, ScriptLoader};
pub use prompt::FilenamePrompt;
pub use script::Script;
