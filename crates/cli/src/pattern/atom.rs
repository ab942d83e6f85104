// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled pattern units.
//!
//! A pattern compiles into a flat sequence of [`Atom`]s. Each atom is one
//! character test (or a zero-width anchor) plus an optional repetition
//! modifier. The sequence is immutable once produced.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Predefined escape class (`\d`, `\w`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `\d`: decimal digits (category Nd).
    Digit,
    /// `\w`: letters (L*), decimal digits and `_`.
    Word,
}

impl CharClass {
    /// Test whether `c` belongs to this class.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Digit => is_decimal_digit(c),
            CharClass::Word => is_letter(c) || is_decimal_digit(c) || c == '_',
        }
    }
}

fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// What a single atom tests for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomKind {
    /// Exactly this character.
    Literal(char),
    /// A predefined class such as `\d`.
    EscapeClass(CharClass),
    /// A bracket group like `[abc]` or `[^abc]`.
    CharGroup { members: Vec<char>, negated: bool },
    /// `^`: start of the buffer or of a line.
    AnchorStart,
    /// `$`: end of the buffer or of a line.
    AnchorEnd,
    /// `.`: any character except newline.
    AnyChar,
}

impl AtomKind {
    /// Whether this atom consumes an input character when it matches.
    ///
    /// Anchors are zero-width and never consume input.
    pub fn consumes_input(&self) -> bool {
        !matches!(self, AtomKind::AnchorStart | AtomKind::AnchorEnd)
    }
}

/// Repetition modifier attached to an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    /// Match exactly once.
    #[default]
    None,
    /// `+`: match one or more times.
    OneOrMore,
    /// `?`: match zero or one time.
    ZeroOrOne,
}

/// One compiled unit of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub kind: AtomKind,
    pub modifier: Modifier,
}

impl Atom {
    pub fn new(kind: AtomKind) -> Self {
        Self {
            kind,
            modifier: Modifier::None,
        }
    }
}
