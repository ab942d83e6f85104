//! Pattern syntax specs, driven through the binary.

use crate::prelude::*;

// =============================================================================
// SINGLE ATOMS
// =============================================================================

#[test]
fn digit_class() {
    grep(r"\d").input("apple123").matches();
    grep(r"\d").input("apple").no_match();
}

#[test]
fn word_class() {
    grep(r"\w").input("%_%").matches();
    grep(r"\w").input("$!?").no_match();
}

#[test]
fn positive_group() {
    grep("[abc]").input("xxc").matches();
    grep("[abc]").input("xyz").no_match();
}

#[test]
fn negated_group() {
    grep("[^abc]").input("abcd").matches();
    grep("[^abc]").input("cab").no_match();
}

#[test]
fn wildcard() {
    grep("d.g").input("dog").matches();
    grep("d.g").input("d\ng").no_match();
}

// =============================================================================
// SEQUENCES AND ANCHORS
// =============================================================================

#[test]
fn class_sequence() {
    grep(r"\d \w\w\ws").input("4 cats").matches();
    grep(r"\d \w\w\ws").input("1 god").no_match();
}

#[test]
fn start_anchor() {
    grep("^log").input("log file").matches();
    grep("^log").input("slog").no_match();
    grep("^log").input("first\nlog second").matches();
}

#[test]
fn end_anchor() {
    grep("dog$").input("hotdog").matches();
    grep("dog$").input("dogs").no_match();
    grep("dog$").input("hotdog\n").matches();
}

// =============================================================================
// QUANTIFIERS
// =============================================================================

#[test]
fn one_or_more() {
    grep("ca+t").input("caaats").matches();
    grep("ca+t").input("ct").no_match();
}

#[test]
fn zero_or_one() {
    grep("dogs?").input("dog").matches();
    grep("ca?t").input("caat").no_match();
}

// =============================================================================
// COMPILE ERRORS
// =============================================================================

#[test]
fn dangling_quantifier() {
    grep("+").input("a+").fails_with("dangling quantifier");
}

#[test]
fn unbalanced_bracket() {
    grep("[abc").input("abc").fails_with("unbalanced bracket");
}

#[test]
fn invalid_escape() {
    grep(r"\s").input(" ").fails_with("invalid escape");
}

#[test]
fn unsupported_alternation() {
    grep("cat|dog")
        .input("cat")
        .fails_with("unsupported pattern construct '|'");
}
