// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-gated input reading.
//!
//! The whole input stream is read into memory before matching; there is no
//! streaming. By default there is no size cap; when one is configured,
//! larger streams are rejected.

use std::borrow::Cow;
use std::io::Read;

use crate::error::{Error, Result};

/// Size at which to report large inputs (1MB).
pub const LARGE_INPUT_WARN: u64 = 1024 * 1024;

/// Default maximum input size (unbounded).
pub const MAX_INPUT_SIZE: u64 = u64::MAX;

/// Buffered input with metadata.
#[derive(Debug)]
pub struct Input {
    /// The raw input bytes.
    pub bytes: Vec<u8>,
}

impl Input {
    /// Input size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Decode the input as text.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Size-gated stream reader.
pub struct InputReader {
    /// Maximum input size to accept.
    max_size: u64,
}

impl Default for InputReader {
    fn default() -> Self {
        Self {
            max_size: MAX_INPUT_SIZE,
        }
    }
}

impl InputReader {
    /// Create a new reader with no size cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Read the complete stream.
    ///
    /// Returns `Err(InputTooLarge)` once more than `max_size` bytes arrive.
    pub fn read_all<R: Read>(&self, reader: R) -> Result<Input> {
        let mut bytes = Vec::new();
        reader
            .take(self.max_size.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(|source| Error::Io { source })?;

        let input = Input { bytes };
        if input.size() > self.max_size {
            return Err(Error::InputTooLarge {
                max_size: self.max_size,
            });
        }

        if input.size() > LARGE_INPUT_WARN {
            tracing::info!(
                size_mb = input.size() as f64 / 1_000_000.0,
                "Reading large input"
            );
        }

        Ok(input)
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
