// Display formatting of results
//
// The formatted text is what the session puts back into the expression
// buffer, so it must lex and evaluate back to the value it shows.

/// Significant digits kept for non-integer results
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Format a result for the display. Non-finite values render as "Error".
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return "Error".to_string();
    }
    // also catches -0
    if value == 0.0 {
        return "0".to_string();
    }

    let shown = if value.fract() == 0.0 {
        value
    } else {
        round_significant(value)
    };

    let abs = shown.abs();
    if abs >= 1e21 || abs < 1e-7 {
        format!("{:e}", shown)
    } else {
        format!("{}", shown)
    }
}

fn round_significant(value: f64) -> f64 {
    format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse()
        .unwrap_or(value)
}
