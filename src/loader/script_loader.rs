//! Script loader orchestrating read, echo and sink hand-off.

use super::error::LoadError;
use super::result::LoadOutcome;
use crate::color::ColorConsole;
use crate::config::Config;
use crate::console::Sink;
use crate::script::Script;
use humansize::{format_size, DECIMAL};
use std::fs::File;
use std::io::{self, Read, Stderr, Stdout, Write};
use std::path::Path;

/// Loads files as scripts and forwards them to a sink.
///
/// The echo goes to `out`, diagnostics go to `err`. Both default to the
/// process streams.
pub struct ScriptLoader<O: Write = Stdout, E: Write = Stderr> {
    chunk_size: usize,
    colors: ColorConsole,
    out: O,
    err: E,
}

impl ScriptLoader<Stdout, Stderr> {
    /// Create a loader on stdout/stderr.
    pub fn new(chunk_size: usize, colors: ColorConsole) -> Self {
        Self::with_streams(chunk_size, colors, io::stdout(), io::stderr())
    }

    /// Create a loader using the `[loader]` section of `config`.
    pub fn from_config(config: &Config, colors: ColorConsole) -> Self {
        Self::new(config.loader.chunk_size, colors)
    }
}

impl<O: Write, E: Write> ScriptLoader<O, E> {
    /// Create with specific streams (for testing).
    pub fn with_streams(chunk_size: usize, colors: ColorConsole, out: O, err: E) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            colors,
            out,
            err,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Get references to the echo and diagnostic streams.
    pub fn streams(&self) -> (&O, &E) {
        (&self.out, &self.err)
    }

    pub fn into_streams(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Read `path` completely.
    ///
    /// The file is closed before this returns, whatever the outcome.
    pub fn read_script(&self, path: &Path) -> Result<Script, LoadError> {
        let mut file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened script");

        let read = read_chunked(&mut file, self.chunk_size);
        drop(file);
        tracing::debug!(path = %path.display(), "closed script");

        let bytes = read.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            size = %format_size(bytes.len(), DECIMAL),
            "loaded script"
        );
        Ok(Script::from_bytes(bytes))
    }

    /// Load `path`, optionally echo it, and hand it to `sink`.
    ///
    /// Failures are reported on the diagnostic stream and leave the sink
    /// untouched; nothing propagates to the caller.
    pub fn load<S: Sink + ?Sized>(
        &mut self,
        path: &Path,
        show_echo: bool,
        sink: &mut S,
    ) -> LoadOutcome {
        let script = match self.read_script(path) {
            Ok(script) => script,
            Err(e) => {
                self.report(&e);
                return LoadOutcome::Failed(e.kind());
            }
        };

        if show_echo {
            if let Err(e) = self.echo(&script) {
                tracing::warn!(error = %e, "could not echo script");
            }
        }

        let bytes = script.bytes_read();
        sink.reset();
        sink.display(script);
        LoadOutcome::Loaded { bytes }
    }

    fn echo(&mut self, script: &Script) -> io::Result<()> {
        write!(
            self.out,
            "{}{}{}\n{}",
            self.colors.foreground(),
            self.colors.background(),
            script,
            self.colors.reset()
        )?;
        self.out.flush()
    }

    fn report(&mut self, error: &LoadError) {
        tracing::debug!(path = %error.path().display(), kind = ?error.kind(), "load failed");
        if let Err(e) = writeln!(self.err, "{}", error) {
            tracing::warn!(error = %e, "could not write diagnostic");
        }
    }
}

/// Read `reader` to the end, `chunk_size` bytes at a time.
fn read_chunked<R: Read>(reader: &mut R, chunk_size: usize) -> io::Result<Vec<u8>> {
    let mut content = Vec::new();
    let mut chunk = vec![0u8; chunk_size];

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                tracing::trace!(bytes = n, "read chunk");
                content.extend_from_slice(&chunk[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(content)
}
