// Character whitelist
//
// The only characters allowed through to the lexer once glyphs have been
// normalized. This is a character-class filter, not a grammar check.

use std::fmt;

/// A character outside the permitted set, with its char offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disallowed {
    pub ch: char,
    pub offset: usize,
}

impl fmt::Display for Disallowed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "character '{}' is not allowed (at {})", self.ch, self.offset)
    }
}

impl std::error::Error for Disallowed {}

pub fn is_permitted(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || ch.is_ascii_whitespace()
        || matches!(
            ch,
            '+' | '-' | '*' | '/' | '(' | ')' | '.' | ',' | '!' | '^' | '%'
        )
}

/// Reject the first character outside the whitelist.
pub fn check_whitelist(input: &str) -> Result<(), Disallowed> {
    match input.chars().enumerate().find(|(_, ch)| !is_permitted(*ch)) {
        Some((offset, ch)) => {
            log::debug!("whitelist rejected {:?} at {}", ch, offset);
            Err(Disallowed { ch, offset })
        }
        None => Ok(()),
    }
}
