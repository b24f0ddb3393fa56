// Glyph Normalization and Whitelist Tests

use crate::{check_whitelist, normalize, to_display, Disallowed};

// ==================== GLYPHS ====================

#[test]
fn test_multiplication_glyph() {
    assert_eq!(normalize("2×3"), "2*3");
}

#[test]
fn test_division_glyph() {
    assert_eq!(normalize("8÷4"), "8/4");
}

#[test]
fn test_minus_glyph() {
    assert_eq!(normalize("5−1"), "5-1");
}

#[test]
fn test_pi_glyph_becomes_name() {
    assert_eq!(normalize("2×π"), "2*pi");
}

#[test]
fn test_caret_is_kept() {
    assert_eq!(normalize("2^8"), "2^8");
}

#[test]
fn test_ascii_untouched() {
    assert_eq!(normalize("sqrt(16)+3!"), "sqrt(16)+3!");
}

#[test]
fn test_to_display_swaps_operators_back() {
    assert_eq!(to_display("2*3-4/5"), "2×3−4÷5");
}

// ==================== WHITELIST ====================

#[test]
fn test_whitelist_accepts_calculator_text() {
    assert!(check_whitelist("sin(30) + 2^3 * 5% - 4! / 1.5e3, ").is_ok());
}

#[test]
fn test_whitelist_rejects_semicolon() {
    assert_eq!(
        check_whitelist("1;2"),
        Err(Disallowed { ch: ';', offset: 1 })
    );
}

#[test]
fn test_whitelist_rejects_quotes() {
    assert!(check_whitelist("alert(\"x\")").is_err());
}

#[test]
fn test_whitelist_rejects_brackets_and_equals() {
    assert!(check_whitelist("a[0]").is_err());
    assert!(check_whitelist("a=1").is_err());
}

#[test]
fn test_whitelist_offset_counts_chars() {
    // non-ASCII letters are outside the whitelist too
    let err = check_whitelist("é1$").unwrap_err();
    assert_eq!(err.ch, 'é');
    assert_eq!(err.offset, 0);

    let err = check_whitelist("12$").unwrap_err();
    assert_eq!(err.offset, 2);
}

#[test]
fn test_unnormalized_glyph_is_rejected() {
    assert!(check_whitelist("2×3").is_err());
}
