//! Line sequencing: raw text to numbered line records.
//!
//! Splitting happens on `'\n'` only. Carriage returns and other whitespace
//! stay part of the line text, so `"a\r\nb"` yields the lines `"a\r"` and `"b"`.

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// A single line of input with its 1-based position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRecord {
    /// Position in the split sequence, starting at 1.
    pub number: usize,
    /// The line text, without the separating newline.
    pub text: String,
}

impl LineRecord {
    /// Create a line record.
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Returns `true` if both records carry the same text.
    ///
    /// The line number is metadata and never takes part in matching.
    pub fn matches(&self, other: &LineRecord) -> bool {
        self.text == other.text
    }
}

/// Split text into numbered line records.
///
/// An empty string yields no lines. A trailing newline yields a trailing
/// empty line, since every `'\n'` separates two records.
pub fn split_lines(text: &str) -> Vec<LineRecord> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .enumerate()
        .map(|(i, line)| LineRecord::new(i + 1, line))
        .collect()
}

/// Split raw bytes into numbered line records.
///
/// Fails with [`DiffError::InvalidInput`] if the bytes are not UTF-8 text.
pub fn split_bytes(bytes: &[u8]) -> DiffResult<Vec<LineRecord>> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        DiffError::InvalidInput(format!("content is not UTF-8 text: {e}"))
    })?;
    Ok(split_lines(text))
}
