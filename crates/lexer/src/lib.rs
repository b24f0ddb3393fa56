pub mod normalize;
pub mod sanitize;
pub mod token;

use logos::Logos;
use std::fmt;
use std::ops::Range;
use token::Token;

pub use normalize::{normalize, to_display};
pub use sanitize::{check_whitelist, Disallowed};

/// Source span of a token (byte offsets; the lexer only sees ASCII)
pub type Span = Range<usize>;

/// Text the lexer could not turn into a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub span: Span,
    pub text: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized input '{}' at {:?}", self.text, self.span)
    }
}

impl std::error::Error for LexError {}

/// Tokenize a source string and return a Vec of tokens
pub fn lex(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|t| t.ok())
        .collect()
}

/// Tokenize keeping spans, failing on the first unrecognized slice
pub fn lex_spanned(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
    let mut tokens = Vec::new();

    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(_) => {
                return Err(LexError {
                    text: source.get(span.clone()).unwrap_or_default().to_string(),
                    span,
                });
            }
        }
    }

    log::debug!("lexed {} tokens", tokens.len());
    Ok(tokens)
}

#[cfg(test)]
mod tests;
