//! Interactive filename prompt.

use crate::config::PromptConfig;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Errors while prompting for a filename.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Failed to read filename: {0}")]
    Io(#[from] io::Error),
}

/// Asks for a filename on `output` and reads the answer from `input`.
pub struct FilenamePrompt<'a> {
    label: &'a str,
    max_length: usize,
}

impl<'a> FilenamePrompt<'a> {
    pub fn new(label: &'a str, max_length: usize) -> Self {
        Self {
            label,
            max_length: max_length.max(1),
        }
    }

    pub fn from_config(config: &'a PromptConfig) -> Self {
        Self::new(&config.label, config.max_filename_length)
    }

    /// Show the label and read one filename.
    ///
    /// Returns `None` on end of input or a blank line. Only the first
    /// whitespace-separated word counts; anything past `max_length`
    /// characters is cut off. The name is taken as raw bytes, so a path the
    /// terminal sent in a non-UTF-8 encoding still reaches the loader.
    pub fn ask<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<PathBuf>, PromptError> {
        write!(output, "{}", self.label)?;
        output.flush()?;

        let mut line = Vec::new();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        Ok(line
            .split(|b| b.is_ascii_whitespace())
            .find(|word| !word.is_empty())
            .map(|word| bytes_to_path(self.truncate(word))))
    }

    /// Cut `word` to `max_length` characters, or bytes when it is not UTF-8.
    fn truncate<'w>(&self, word: &'w [u8]) -> &'w [u8] {
        let cut = match std::str::from_utf8(word) {
            Ok(text) => text.char_indices().nth(self.max_length).map(|(i, _)| i),
            Err(_) => (word.len() > self.max_length).then_some(self.max_length),
        };

        match cut {
            Some(cut) => {
                tracing::warn!(
                    max = self.max_length,
                    "filename longer than {} characters, truncating",
                    self.max_length
                );
                &word[..cut]
            }
            None => word,
        }
    }
}

#[cfg(unix)]
fn bytes_to_path(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}
