// Test module for parser
//
// Unit tests for the calculator parser, organized by category.


use crate::ast::Expr;
use crate::error::ParseError;

/// Lex and parse a full expression
pub(crate) fn parse_expr(input: &str) -> Result<Expr, Vec<ParseError>> {
    let tokens = lexer::lex_spanned(input).expect("test input should lex");
    crate::parse(tokens, input.len())
}

pub(crate) fn num(n: f64) -> Expr {
    Expr::Number(n)
}
