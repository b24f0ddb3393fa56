// Error reporting with Ariadne
//
// This module provides readable error messages for parse failures.

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::error::{Simple, SimpleReason};
use lexer::token::Token;

/// Type alias for Chumsky parser errors
pub type ParseError = Simple<Token>;

/// One-line description of a parse error
pub fn describe(error: &ParseError) -> String {
    match error.reason() {
        SimpleReason::Custom(msg) => msg.clone(),
        SimpleReason::Unclosed { delimiter, .. } => {
            format!("unclosed delimiter '{}'", delimiter)
        }
        SimpleReason::Unexpected => match error.found() {
            Some(token) => format!("unexpected '{}'", token),
            None => "unexpected end of input".to_string(),
        },
    }
}

/// True for errors raised by name resolution and operand checks
pub fn is_custom(error: &ParseError) -> bool {
    matches!(error.reason(), SimpleReason::Custom(_))
}

/// Converts Chumsky errors to Ariadne reports on stderr
pub fn report_errors(filename: &str, source: &str, errors: &[ParseError]) -> std::io::Result<()> {
    for error in errors {
        let span = error.span();

        let report = Report::build(ReportKind::Error, filename, span.start)
            .with_code("E001")
            .with_message("Syntax Error")
            .with_label(
                Label::new((filename, span))
                    .with_message(describe(error))
                    .with_color(Color::Red),
            );

        // Add expected tokens if available (limit to 5 to avoid overwhelming output)
        let report = if error.expected().len() > 0 {
            let expected: Vec<String> = error
                .expected()
                .take(5)
                .map(format_expected)
                .collect();

            let help_msg = if error.expected().len() > 5 {
                format!("Expected one of: {}, ...", expected.join(", "))
            } else {
                format!("Expected: {}", expected.join(", "))
            };

            report.with_help(help_msg)
        } else {
            report
        };

        report.finish().eprint((filename, Source::from(source)))?;
    }

    Ok(())
}

/// Format expected token for human-readable output
fn format_expected(token: &Option<Token>) -> String {
    match token {
        Some(Token::Number(_)) => "number".to_string(),
        Some(Token::Identifier(_)) => "function or constant".to_string(),
        Some(t) => format!("'{}'", t),
        None => "end of input".to_string(),
    }
}
