//! Sink trait.

use crate::script::Script;

/// Receives the text of a successfully loaded file.
///
/// The loader calls `reset` and then `display` exactly once per successful
/// load and never touches the sink on failure.
pub trait Sink {
    /// Clear any display state. Must be safe to call any number of times.
    fn reset(&mut self);

    /// Show a script. Never fails.
    fn display(&mut self, script: Script);
}
