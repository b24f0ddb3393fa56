pub mod ast;
pub mod error;
pub mod parser;

use ast::Expr;
use chumsky::error::Simple;
use chumsky::{Parser, Stream};
use error::ParseError;
use lexer::Span;
use lexer::token::Token;

/// Most tokens a single expression may contain
pub const MAX_TOKENS: usize = 1000;

/// Deepest run of open parentheses plus consecutive prefix signs
pub const MAX_NESTING: usize = 100;

/// Parse a spanned token stream. `source_len` places the end-of-input span.
pub fn parse(tokens: Vec<(Token, Span)>, source_len: usize) -> Result<Expr, Vec<ParseError>> {
    check_limits(&tokens).map_err(|e| vec![e])?;

    let eoi = source_len..source_len + 1;
    let result = parser::parser().parse(Stream::from_iter(eoi, tokens.into_iter()));

    match &result {
        Ok(expr) => log::debug!("parsed: {}", expr),
        Err(errors) => log::debug!("parse failed with {} error(s)", errors.len()),
    }

    result
}

/// Reject input whose tree would be too deep to walk.
///
/// Every AST consumer recurses once per level, and a tree is never deeper
/// than its token count, so both limits are checked before parsing.
pub fn check_limits(tokens: &[(Token, Span)]) -> Result<(), ParseError> {
    if let Some((_, span)) = tokens.get(MAX_TOKENS) {
        return Err(Simple::custom(
            span.clone(),
            format!("expression is too long (more than {} tokens)", MAX_TOKENS),
        ));
    }

    let mut depth = 0usize;
    let mut signs = 0usize;

    for (token, span) in tokens {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth = depth.saturating_sub(1),
            _ => {}
        }
        signs = match token {
            Token::Plus | Token::Minus => signs + 1,
            _ => 0,
        };

        if depth + signs > MAX_NESTING {
            return Err(Simple::custom(span.clone(), "expression nested too deeply"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
