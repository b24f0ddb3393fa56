// Error reporting with Ariadne for evaluation
//
// Renders an EvalError against the normalized expression text.

use crate::EvalError;
use ariadne::{Color, Label, Report, ReportKind, Source};

fn code(error: &EvalError) -> &'static str {
    match error {
        EvalError::DisallowedChar { .. } => "E100",
        EvalError::UnknownName { .. } => "E101",
        EvalError::Syntax { .. } => "E102",
        EvalError::Domain { .. } => "E103",
        EvalError::Singularity { .. } => "E104",
        EvalError::Overflow => "E105",
    }
}

fn help(error: &EvalError) -> Option<String> {
    match error {
        EvalError::DisallowedChar { .. } => Some(
            "Only digits, letters, whitespace and + - * / ^ ( ) . , ! % are accepted".to_string(),
        ),
        EvalError::UnknownName { .. } => Some(format!(
            "Known names: {}",
            crate::context::known_names().join(", ")
        )),
        EvalError::Domain { .. } => Some("Check the function's argument range".to_string()),
        EvalError::Singularity { .. } => {
            Some("The result overflowed or divided by zero".to_string())
        }
        EvalError::Syntax { .. } | EvalError::Overflow => None,
    }
}

/// Format an EvalError as an Ariadne report on stderr
pub fn report_eval_error(filename: &str, source: &str, error: &EvalError) -> std::io::Result<()> {
    // Errors without a location point at the whole expression
    let span = error.span().unwrap_or(0..source.chars().count().max(1));

    let report = Report::build(ReportKind::Error, filename, span.start)
        .with_code(code(error))
        .with_message(error.to_string())
        .with_label(
            Label::new((filename, span))
                .with_message(match error.span() {
                    Some(_) => "here",
                    None => "while evaluating this expression",
                })
                .with_color(Color::Red),
        );

    let report = match help(error) {
        Some(help) => report.with_help(help),
        None => report,
    };

    report.finish().eprint((filename, Source::from(source)))
}
