// Error handling for evaluation
//
// Every way an expression can fail, grouped into the four observable kinds
// a calculator distinguishes. The display layer collapses them all to
// "Error"; the CLI uses the detail for diagnostics and exit codes.

use lexer::{Disallowed, LexError};
use parser::error::{describe, is_custom, ParseError};
use thiserror::Error;

pub use lexer::Span;

/// Coarse classification of an evaluation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Character outside the whitelist, or a name outside the context table
    Disallowed,
    /// Malformed or unbalanced expression
    Syntax,
    /// Function argument outside its mathematical domain
    Domain,
    /// Division by zero or overflow to infinity
    Singularity,
}

/// Evaluation error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Character outside the permitted set
    #[error("character '{ch}' is not allowed")]
    DisallowedChar { ch: char, span: Span },

    /// Identifier that is neither a known constant nor function
    #[error("'{name}' is not a known function or constant")]
    UnknownName { name: String, span: Span },

    /// Lexer or parser failure
    #[error("syntax error: {message}")]
    Syntax { message: String, span: Option<Span> },

    /// NaN produced from finite operands, e.g. sqrt(-1)
    #[error("{operation} is outside the function's domain")]
    Domain { operation: String },

    /// Infinity produced from finite operands, e.g. 1 / 0
    #[error("{operation} is not finite")]
    Singularity { operation: String },

    /// A number literal too large to represent
    #[error("number literal is too large to represent")]
    Overflow,
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::DisallowedChar { .. } | EvalError::UnknownName { .. } => {
                ErrorKind::Disallowed
            }
            EvalError::Syntax { .. } => ErrorKind::Syntax,
            EvalError::Domain { .. } => ErrorKind::Domain,
            EvalError::Singularity { .. } | EvalError::Overflow => ErrorKind::Singularity,
        }
    }

    /// Location in the normalized expression text, when known
    pub fn span(&self) -> Option<Span> {
        match self {
            EvalError::DisallowedChar { span, .. } | EvalError::UnknownName { span, .. } => {
                Some(span.clone())
            }
            EvalError::Syntax { span, .. } => span.clone(),
            _ => None,
        }
    }

    /// Get the exit code for this error type
    /// Used by main.rs to return specific exit codes
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Disallowed => 101,
            ErrorKind::Syntax => 102,
            ErrorKind::Domain => 103,
            ErrorKind::Singularity => 104,
        }
    }

    /// Collapse the parser's error list into one error, preferring the
    /// descriptive custom errors over bare "unexpected token" ones.
    pub fn from_parse_errors(errors: Vec<ParseError>) -> Self {
        let chosen = errors
            .iter()
            .find(|e| is_custom(e))
            .or_else(|| errors.first());

        match chosen {
            Some(error) => EvalError::Syntax {
                message: describe(error),
                span: Some(error.span()),
            },
            None => EvalError::Syntax {
                message: "invalid expression".to_string(),
                span: None,
            },
        }
    }
}

impl From<Disallowed> for EvalError {
    fn from(err: Disallowed) -> Self {
        EvalError::DisallowedChar {
            ch: err.ch,
            span: err.offset..err.offset + 1,
        }
    }
}

impl From<LexError> for EvalError {
    fn from(err: LexError) -> Self {
        EvalError::Syntax {
            message: format!("unrecognized input '{}'", err.text),
            span: Some(err.span),
        }
    }
}

/// Convenient Result type for evaluation
pub type EvalResult<T> = Result<T, EvalError>;
