// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal extended-regex engine.
//!
//! A pattern is compiled once by the [`tokenizer`] into a flat sequence of
//! [`Atom`]s, then searched for by the backtracking [`matcher`].
//!
//! Supported syntax: literals, `.`, `\d`, `\w`, `[abc]`, `[^abc]`, `^`, `$`,
//! and the postfix quantifiers `+` and `?`.

pub mod atom;
pub mod matcher;
pub mod tokenizer;

pub use atom::{Atom, AtomKind, CharClass, Modifier};
pub use matcher::{LineMatch, PatternMatch, byte_offset_to_line};
pub use tokenizer::PatternError;

/// A compiled pattern, ready to be searched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    atoms: Vec<Atom>,
}

impl CompiledPattern {
    /// Compile a pattern string.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let atoms = tokenizer::tokenize(pattern)?;
        tracing::debug!(pattern, atoms = atoms.len(), "compiled pattern");
        tracing::trace!("atoms: {:?}", atoms);
        Ok(Self { atoms })
    }

    /// The compiled atom sequence.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// Find the leftmost match in `text`.
    pub fn find(&self, text: &str) -> Option<PatternMatch> {
        matcher::search(&self.atoms, text)
    }

    /// Find the leftmost match with its line number.
    pub fn find_with_line(&self, text: &str) -> Option<LineMatch> {
        self.find(text).map(|m| LineMatch {
            line: byte_offset_to_line(text, m.start),
            text: text[m.start..m.end].to_string(),
            offset: m.start,
        })
    }
}

/// Compile `pattern` into its atom sequence.
pub fn compile(pattern: &str) -> Result<CompiledPattern, PatternError> {
    CompiledPattern::compile(pattern)
}

/// Whether `pattern` matches anywhere in `text`.
pub fn matches(text: &str, pattern: &CompiledPattern) -> bool {
    pattern.is_match(text)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
