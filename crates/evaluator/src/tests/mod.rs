// Evaluator Test Modules


use crate::{evaluate, AngleMode};

pub(crate) const EPSILON: f64 = 1e-9;

pub(crate) fn deg(input: &str) -> f64 {
    evaluate(input, AngleMode::Degrees)
        .unwrap_or_else(|e| panic!("{} failed: {}", input, e))
}

pub(crate) fn rad(input: &str) -> f64 {
    evaluate(input, AngleMode::Radians)
        .unwrap_or_else(|e| panic!("{} failed: {}", input, e))
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {}, got {}",
        expected,
        actual
    );
}
