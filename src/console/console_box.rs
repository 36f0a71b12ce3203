//! Console box writing scripts back to a stream.

use super::sink::Sink;
use crate::script::Script;
use std::io::{self, Stdout, Write};

/// Stand-in display that echoes each script followed by a newline.
///
/// Keeps no state between calls; `reset` has nothing to clear.
pub struct ConsoleBox<W: Write = Stdout> {
    out: W,
}

impl ConsoleBox<Stdout> {
    /// Console box on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleBox<W> {
    /// Console box on any writer (for testing).
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> Sink for ConsoleBox<W> {
    fn reset(&mut self) {}

    fn display(&mut self, script: Script) {
        if let Err(e) = self.write_line(script.as_str()) {
            tracing::warn!(error = %e, "console box could not write script");
        }
    }
}
