// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern tokenizer.
//!
//! Single left-to-right scan over the pattern's characters, producing one
//! [`Atom`] per construct. Quantifiers do not produce atoms; they attach a
//! [`Modifier`] to the atom emitted just before them.
//!
//! Offsets reported in [`PatternError`] are character offsets into the pattern.

use super::atom::{Atom, AtomKind, CharClass, Modifier};

/// Error during pattern compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// A `[` group never closes.
    #[error("unbalanced bracket: '[' at offset {offset} is never closed")]
    UnbalancedBracket { offset: usize },

    /// Escape names an unsupported class or is truncated.
    #[error("invalid escape '{escape}' at offset {offset} (supported: \\d, \\w)")]
    InvalidEscape { offset: usize, escape: String },

    /// `+` or `?` with no preceding atom that consumes input.
    #[error("dangling quantifier '{quantifier}' at offset {offset}")]
    DanglingQuantifier { offset: usize, quantifier: char },

    /// Construct outside the supported grammar.
    #[error("unsupported pattern construct '{found}' at offset {offset}")]
    UnsupportedPattern { offset: usize, found: char },
}

/// Convert a pattern into its atom sequence.
pub fn tokenize(pattern: &str) -> Result<Vec<Atom>, PatternError> {
    Tokenizer::new(pattern).run()
}

struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
    atoms: Vec<Atom>,
}

impl Tokenizer {
    fn new(pattern: &str) -> Self {
        Self {
            chars: pattern.chars().collect(),
            pos: 0,
            atoms: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Atom>, PatternError> {
        while let Some(&c) = self.chars.get(self.pos) {
            let start = self.pos;
            match c {
                '\\' => {
                    let class = self.escape_class(start)?;
                    self.emit(AtomKind::EscapeClass(class));
                    self.pos += 2;
                }
                '[' => {
                    let (group, end) = self.char_group(start)?;
                    self.emit(group);
                    self.pos = end;
                }
                '^' => {
                    self.emit(AtomKind::AnchorStart);
                    self.pos += 1;
                }
                '$' => {
                    self.emit(AtomKind::AnchorEnd);
                    self.pos += 1;
                }
                '.' => {
                    self.emit(AtomKind::AnyChar);
                    self.pos += 1;
                }
                '+' => {
                    self.quantify(Modifier::OneOrMore, c, start)?;
                    self.pos += 1;
                }
                '?' => {
                    self.quantify(Modifier::ZeroOrOne, c, start)?;
                    self.pos += 1;
                }
                '(' | ')' | '|' | '{' | '}' | '*' => {
                    return Err(PatternError::UnsupportedPattern {
                        offset: start,
                        found: c,
                    });
                }
                _ => {
                    self.emit(AtomKind::Literal(c));
                    self.pos += 1;
                }
            }
        }

        Ok(self.atoms)
    }

    fn emit(&mut self, kind: AtomKind) {
        self.atoms.push(Atom::new(kind));
    }

    /// Resolve the class named after a `\` at `start`.
    fn escape_class(&self, start: usize) -> Result<CharClass, PatternError> {
        match self.chars.get(start + 1) {
            Some('d') => Ok(CharClass::Digit),
            Some('w') => Ok(CharClass::Word),
            Some(&other) => Err(PatternError::InvalidEscape {
                offset: start,
                escape: format!("\\{}", other),
            }),
            None => Err(PatternError::InvalidEscape {
                offset: start,
                escape: "\\".to_string(),
            }),
        }
    }

    /// Scan a bracket group opening at `start`.
    ///
    /// Returns the group and the offset just past its closing `]`.
    /// Interior characters are taken literally.
    fn char_group(&self, start: usize) -> Result<(AtomKind, usize), PatternError> {
        let mut body = start + 1;
        let negated = self.chars.get(body) == Some(&'^');
        if negated {
            body += 1;
        }

        let close = self.chars[body..]
            .iter()
            .position(|&c| c == ']')
            .map(|i| body + i)
            .ok_or(PatternError::UnbalancedBracket { offset: start })?;

        let mut members = self.chars[body..close].to_vec();
        members.sort_unstable();
        members.dedup();

        Ok((AtomKind::CharGroup { members, negated }, close + 1))
    }

    /// Attach the quantifier `c` at `offset` to the last emitted atom.
    ///
    /// The atom must consume input and must not already be quantified.
    fn quantify(&mut self, modifier: Modifier, c: char, offset: usize) -> Result<(), PatternError> {
        match self.atoms.last_mut() {
            Some(atom) if atom.kind.consumes_input() && atom.modifier == Modifier::None => {
                atom.modifier = modifier;
                Ok(())
            }
            _ => Err(PatternError::DanglingQuantifier {
                offset,
                quantifier: c,
            }),
        }
    }
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
