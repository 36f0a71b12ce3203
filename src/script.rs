//! Text loaded from a single file.

use std::fmt;

/// The content of one file, decoded as text.
///
/// Produced by one loader call and moved into the sink; it has no identity
/// beyond that call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    text: String,
    bytes_read: usize,
}

impl Script {
    /// Decode raw file bytes.
    ///
    /// Valid UTF-8 is kept exactly; invalid sequences become U+FFFD.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let bytes_read = bytes.len();
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        };
        Self { text, bytes_read }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of bytes read from disk (before decoding).
    pub fn bytes_read(&self) -> usize {
        self.bytes_read
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Script {
    fn from(text: &str) -> Self {
        Self::from_bytes(text.as_bytes().to_vec())
    }
}
