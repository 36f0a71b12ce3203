//! Script loading: read a file, echo it, hand it to a sink.

mod error;
mod result;
mod script_loader;

pub use error::{LoadError, LoadErrorKind};
pub use result::LoadOutcome;
pub use script_loader::ScriptLoader;
