// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and exit codes.

use crate::pattern::PatternError;

/// mygrep error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pattern failed to compile
    #[error("invalid pattern: {0}")]
    Pattern(#[from] PatternError),

    /// Reading the input stream failed
    #[error("read input: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Input exceeds the configured size limit.
    #[error("input too large (more than {max_size} bytes)")]
    InputTooLarge { max_size: u64 },
}

/// Result type using mygrep Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Pattern found in the input
    Match = 0,
    /// Pattern valid but absent from the input
    NoMatch = 1,
    /// Usage, pattern, or read error
    Error = 2,
}

impl ExitCode {
    /// Exit code for a completed search.
    pub fn from_match(found: bool) -> Self {
        if found {
            ExitCode::Match
        } else {
            ExitCode::NoMatch
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Pattern(_) | Error::Io { .. } | Error::InputTooLarge { .. } => ExitCode::Error,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
