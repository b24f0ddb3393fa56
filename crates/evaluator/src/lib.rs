// Expression evaluation for the calculator
//
// Pipeline: normalize glyphs -> whitelist -> lex -> name check -> parse ->
// evaluate against the restricted context.

pub mod builtins;
pub mod context;
pub mod error;
pub mod error_report;
pub mod eval;
pub mod format;
pub mod session;

pub use context::{AngleMode, Context};
pub use error::{ErrorKind, EvalError, EvalResult, Span};
pub use error_report::report_eval_error;
pub use eval::Evaluator;
pub use format::format_result;
pub use session::{CalculatorSession, Digit, FunctionKey, HistoryEntry, Key, Operator, Status};

use lexer::token::Token;
use parser::ast::{is_known_name, Expr};

/// Normalize display glyphs and apply the character whitelist.
///
/// Spans in every later error refer to the returned text.
pub fn prepare(input: &str) -> EvalResult<String> {
    let normalized = lexer::normalize(input);
    lexer::check_whitelist(&normalized)?;
    Ok(normalized)
}

/// Lex prepared text and reject identifiers the context does not bind
pub fn tokenize(prepared: &str) -> EvalResult<Vec<(Token, Span)>> {
    let tokens = lexer::lex_spanned(prepared)?;

    for (token, span) in &tokens {
        if let Token::Identifier(name) = token {
            if !is_known_name(name) {
                log::debug!("rejected unknown name '{}'", name);
                return Err(EvalError::UnknownName {
                    name: name.clone(),
                    span: span.clone(),
                });
            }
        }
    }

    Ok(tokens)
}

/// Parse prepared text. Blank input has no expression.
pub fn parse_prepared(prepared: &str) -> EvalResult<Option<Expr>> {
    if prepared.trim().is_empty() {
        return Ok(None);
    }

    let tokens = tokenize(prepared)?;
    parser::parse(tokens, prepared.len())
        .map(Some)
        .map_err(EvalError::from_parse_errors)
}

/// Evaluate calculator input to a finite number.
///
/// Blank input evaluates to 0. Every failure, whatever its kind, comes
/// back as an `EvalError`; nothing panics on user input.
pub fn evaluate(input: &str, angle_mode: AngleMode) -> EvalResult<f64> {
    let prepared = prepare(input)?;

    match parse_prepared(&prepared)? {
        Some(expr) => Evaluator::new(angle_mode).evaluate(&expr),
        None => Ok(0.0),
    }
}

#[cfg(test)]
mod tests;
