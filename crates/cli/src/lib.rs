// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A minimal extended-regex grep.
//!
//! The [`pattern`] module is the engine: [`compile`] turns a pattern into an
//! atom sequence and [`matches`] runs an unanchored backtracking search. The
//! remaining modules are the command-line tool built on top of it.

pub mod cli;
pub mod cmd_grep;
pub mod error;
pub mod pattern;
pub mod reader;

pub use cli::Cli;
pub use error::{Error, ExitCode, Result};
pub use pattern::{CompiledPattern, PatternError, PatternMatch, compile, matches};
pub use reader::{Input, InputReader};
