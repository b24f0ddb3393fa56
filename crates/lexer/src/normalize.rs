// Display glyph normalization
//
// The keypad shows calculator glyphs (×, ÷, −, π) while the grammar only
// knows the ASCII operator set. Everything else passes through untouched,
// so a stray glyph is still caught by the whitelist afterwards.

/// Rewrite display glyphs into their computational spelling.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for ch in input.chars() {
        match ch {
            '×' | '·' | '∗' => out.push('*'),
            '÷' | '∕' => out.push('/'),
            '−' | '–' => out.push('-'),
            'π' => out.push_str("pi"),
            other => out.push(other),
        }
    }

    out
}

/// Inverse of [`normalize`] for the operator glyphs. The calculator session
/// writes formatted results back into its buffer through this.
pub fn to_display(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            '*' => '×',
            '/' => '÷',
            '-' => '−',
            other => other,
        })
        .collect()
}
