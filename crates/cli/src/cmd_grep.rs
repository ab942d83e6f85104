// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The search command: compile, read, match.

use std::io::Read;

use crate::cli::Cli;
use crate::error::{ExitCode, Result};
use crate::pattern::CompiledPattern;
use crate::reader::InputReader;

/// Run one search over `input`.
///
/// The pattern is compiled before any input is read, so a malformed pattern
/// never triggers a search.
pub fn run<R: Read>(cli: &Cli, input: R) -> Result<ExitCode> {
    let pattern = CompiledPattern::compile(&cli.pattern)?;

    let input = InputReader::with_max_size(cli.max_input).read_all(input)?;
    tracing::debug!(bytes = input.size(), "read input");
    let text = input.text();

    match pattern.find_with_line(&text) {
        Some(m) => {
            tracing::debug!(line = m.line, offset = m.offset, text = %m.text, "match found");
            Ok(ExitCode::from_match(true))
        }
        None => {
            tracing::debug!("no match");
            Ok(ExitCode::from_match(false))
        }
    }
}

#[cfg(test)]
#[path = "cmd_grep_tests.rs"]
mod tests;
