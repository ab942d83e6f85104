// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::reader::MAX_INPUT_SIZE;

/// Search standard input for an extended regular expression
#[derive(Parser)]
#[command(name = "mygrep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Interpret PATTERN as an extended regular expression
    #[arg(short = 'E', long = "extended-regexp")]
    pub extended: bool,

    /// Pattern to search for
    #[arg(value_name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: String,

    /// Maximum number of input bytes to read (default: unbounded)
    #[arg(
        long,
        hide = true,
        env = "MYGREP_MAX_INPUT",
        default_value_t = MAX_INPUT_SIZE,
        value_name = "BYTES"
    )]
    pub max_input: u64,
}

impl Cli {
    /// Reject invocations that do not select extended syntax.
    ///
    /// `-E` is the only supported mode, and it must be given explicitly.
    pub fn validate(&self) -> Result<(), clap::Error> {
        if self.extended {
            Ok(())
        } else {
            Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "the mode flag '-E' is required",
            ))
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
