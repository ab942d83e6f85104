// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Backtracking matcher over a compiled atom sequence.
//!
//! The search is unanchored: every candidate start offset in the text is tried
//! in order, and the first one where the whole atom sequence matches wins.
//! Cursors are byte offsets into the text and always sit on `char` boundaries.

use memchr::memmem::Finder;

use super::atom::{Atom, AtomKind, Modifier};

/// A match found in content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Byte offset where match starts.
    pub start: usize,
    /// Byte offset where match ends.
    pub end: usize,
}

/// A match with resolved line number.
#[derive(Debug, Clone)]
pub struct LineMatch {
    /// 1-based line number.
    pub line: u32,
    /// The matched text.
    pub text: String,
    /// Byte offset in content.
    pub offset: usize,
}

/// Find the leftmost match of `atoms` in `text`.
pub fn search(atoms: &[Atom], text: &str) -> Option<PatternMatch> {
    candidate_starts(atoms, text).find_map(|start| {
        match_from(atoms, text, start, 0).map(|end| PatternMatch { start, end })
    })
}

/// Offsets worth trying as match starts, in ascending order.
///
/// Skips offsets where the first atom cannot possibly match. Every offset
/// yielded is a `char` boundary, and the end of the text is included.
fn candidate_starts<'t>(atoms: &[Atom], text: &'t str) -> Box<dyn Iterator<Item = usize> + 't> {
    let bytes = text.as_bytes();
    match atoms.first() {
        Some(Atom {
            kind: AtomKind::AnchorStart,
            ..
        }) => Box::new(
            std::iter::once(0).chain(memchr::memchr_iter(b'\n', bytes).map(|i| i + 1)),
        ),
        Some(Atom {
            kind: AtomKind::Literal(c),
            modifier: Modifier::None,
        }) => Box::new(LiteralStarts::new(*c, bytes)),
        _ => Box::new(
            text.char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(text.len())),
        ),
    }
}

/// Occurrences of one literal character, located with `memmem`.
struct LiteralStarts<'h> {
    finder: Finder<'static>,
    haystack: &'h [u8],
    pos: usize,
}

impl<'h> LiteralStarts<'h> {
    fn new(c: char, haystack: &'h [u8]) -> Self {
        let mut buf = [0u8; 4];
        let needle = c.encode_utf8(&mut buf);
        Self {
            finder: Finder::new(needle.as_bytes()).into_owned(),
            haystack,
            pos: 0,
        }
    }
}

impl Iterator for LiteralStarts<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let found = self.finder.find(self.haystack.get(self.pos..)?)?;
        let start = self.pos + found;
        self.pos = start + 1;
        Some(start)
    }
}

/// Match `atoms[idx..]` against `text` starting at `pos`.
///
/// Returns the end offset of the match. Cursors are passed by value so each
/// backtracking branch sees its own state.
fn match_from(atoms: &[Atom], text: &str, pos: usize, idx: usize) -> Option<usize> {
    let Some(atom) = atoms.get(idx) else {
        return Some(pos);
    };

    match atom.kind {
        AtomKind::AnchorStart => {
            if at_line_start(text, pos) {
                match_from(atoms, text, pos, idx + 1)
            } else {
                None
            }
        }
        // `$` only means something as the final atom.
        AtomKind::AnchorEnd => (idx + 1 == atoms.len() && at_line_end(text, pos)).then_some(pos),
        _ => match atom.modifier {
            Modifier::None => {
                let next = step(&atom.kind, text, pos)?;
                match_from(atoms, text, next, idx + 1)
            }
            Modifier::ZeroOrOne => step(&atom.kind, text, pos)
                .and_then(|next| match_from(atoms, text, next, idx + 1))
                .or_else(|| match_from(atoms, text, pos, idx + 1)),
            Modifier::OneOrMore => {
                // After each repetition try the rest of the pattern; only
                // consume another repetition when that fails.
                let mut cur = step(&atom.kind, text, pos)?;
                loop {
                    if let Some(end) = match_from(atoms, text, cur, idx + 1) {
                        return Some(end);
                    }
                    cur = step(&atom.kind, text, cur)?;
                }
            }
        },
    }
}

/// Consume one character at `pos` if it satisfies `kind`.
///
/// Returns the offset after the character, or `None` at end of text or on
/// mismatch.
fn step(kind: &AtomKind, text: &str, pos: usize) -> Option<usize> {
    let c = text.get(pos..)?.chars().next()?;
    matches_char(kind, c).then(|| pos + c.len_utf8())
}

/// Per-atom character test.
fn matches_char(kind: &AtomKind, c: char) -> bool {
    match kind {
        AtomKind::Literal(expected) => c == *expected,
        AtomKind::AnyChar => c != '\n',
        AtomKind::EscapeClass(class) => class.contains(c),
        AtomKind::CharGroup { members, negated } => members.binary_search(&c).is_ok() != *negated,
        AtomKind::AnchorStart | AtomKind::AnchorEnd => false,
    }
}

/// Whether `pos` is at the start of the text or right after a newline.
fn at_line_start(text: &str, pos: usize) -> bool {
    pos == 0 || text.get(..pos).is_some_and(|before| before.ends_with('\n'))
}

/// Whether `pos` is at the end of the text or right before a newline.
fn at_line_end(text: &str, pos: usize) -> bool {
    text.get(pos..)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('\n'))
}

/// Convert byte offset to 1-based line number.
///
/// Saturates at `u32::MAX`.
pub fn byte_offset_to_line(content: &str, offset: usize) -> u32 {
    let newlines = memchr::memchr_iter(b'\n', &content.as_bytes()[..offset]).count();
    u32::try_from(newlines)
        .unwrap_or(u32::MAX)
        .saturating_add(1)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
