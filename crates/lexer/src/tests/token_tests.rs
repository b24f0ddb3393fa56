// Token Recognition Tests
//
// Operators, delimiters and identifiers.

use crate::token::Token;
use logos::Logos;

// Helper function to tokenize input and return all tokens
fn tokenize(input: &str) -> Vec<Result<Token, ()>> {
    Token::lexer(input).collect()
}

// Helper function to tokenize and assert single token
fn assert_single_token(input: &str, expected: Token) {
    let mut lexer = Token::lexer(input);
    let token = lexer.next();
    assert_eq!(token, Some(Ok(expected)), "Failed to match token for input: {}", input);
    assert_eq!(lexer.next(), None, "Expected single token, found more");
}

// ==================== OPERATOR TESTS ====================

#[test]
fn test_operator_plus() {
    assert_single_token("+", Token::Plus);
}

#[test]
fn test_operator_minus() {
    assert_single_token("-", Token::Minus);
}

#[test]
fn test_operator_star() {
    assert_single_token("*", Token::Star);
}

#[test]
fn test_operator_slash() {
    assert_single_token("/", Token::Slash);
}

#[test]
fn test_operator_caret() {
    assert_single_token("^", Token::Caret);
}

#[test]
fn test_postfix_percent() {
    assert_single_token("%", Token::Percent);
}

#[test]
fn test_postfix_bang() {
    assert_single_token("!", Token::Bang);
}

#[test]
fn test_delimiters() {
    let tokens = tokenize("(,)");
    assert_eq!(
        tokens,
        vec![Ok(Token::LParen), Ok(Token::Comma), Ok(Token::RParen)]
    );
}

// ==================== IDENTIFIER TESTS ====================

#[test]
fn test_identifier_function_name() {
    assert_single_token("sqrt", Token::Identifier("sqrt".to_string()));
}

#[test]
fn test_identifier_with_digits() {
    assert_single_token("log10", Token::Identifier("log10".to_string()));
}

#[test]
fn test_identifier_case_preserved() {
    assert_single_token("PI", Token::Identifier("PI".to_string()));
}

// ==================== SEQUENCES ====================

#[test]
fn test_full_expression() {
    let tokens = crate::lex("sin(30)+5%*2!");
    assert_eq!(
        tokens,
        vec![
            Token::Identifier("sin".to_string()),
            Token::LParen,
            Token::Number("30".to_string()),
            Token::RParen,
            Token::Plus,
            Token::Number("5".to_string()),
            Token::Percent,
            Token::Star,
            Token::Number("2".to_string()),
            Token::Bang,
        ]
    );
}

#[test]
fn test_spans_are_byte_offsets() {
    let tokens = crate::lex_spanned("12 + pi").unwrap();
    let spans: Vec<_> = tokens.iter().map(|(_, s)| s.clone()).collect();
    assert_eq!(spans, vec![0..2, 3..4, 5..7]);
}

#[test]
fn test_display_roundtrips_source_text() {
    let rendered: Vec<String> = crate::lex("2.50*(x)")
        .iter()
        .map(|t| t.to_string())
        .collect();
    assert_eq!(rendered.concat(), "2.50*(x)");
}
