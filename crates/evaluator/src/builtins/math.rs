// Math library functions (sin, cos, sqrt, etc.)
//
// Values for the constants and functions of the evaluation context.

use crate::context::Context;
use parser::ast::{Constant, Function};

/// Largest n whose factorial is finite in f64
pub const MAX_FACTORIAL: f64 = 170.0;

/// Trait for the math table of the evaluation context
pub trait MathFunctions {
    /// Value of a named constant
    fn constant_value(&self, constant: Constant) -> f64;

    /// Apply a unary function. Domain errors come back as NaN and
    /// overflow as infinity, the same way the f64 primitives report them.
    fn apply_function(&self, func: Function, x: f64) -> f64;
}

impl MathFunctions for Context {
    fn constant_value(&self, constant: Constant) -> f64 {
        match constant {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }

    fn apply_function(&self, func: Function, x: f64) -> f64 {
        let mode = self.angle_mode;

        match func {
            // Trigonometric functions: angle in, ratio out
            Function::Sin => mode.to_radians(x).sin(),
            Function::Cos => mode.to_radians(x).cos(),
            Function::Tan => mode.to_radians(x).tan(),

            // Inverse trigonometric functions: ratio in, angle out
            Function::Asin => mode.from_radians(x.asin()),
            Function::Acos => mode.from_radians(x.acos()),
            Function::Atan => mode.from_radians(x.atan()),

            // Exponential and logarithmic functions
            Function::Ln => x.ln(),
            Function::Log => x.log10(),
            Function::Exp => x.exp(),

            Function::Sqrt => x.sqrt(),
            Function::Fact => factorial(x),
        }
    }
}

/// Factorial over the truncated argument.
///
/// Negative (after truncation) gives NaN; above 170 gives +inf.
pub fn factorial(x: f64) -> f64 {
    let n = x.trunc();

    if n.is_nan() || n < 0.0 {
        return f64::NAN;
    }
    if n > MAX_FACTORIAL {
        return f64::INFINITY;
    }

    (2..=n as u32).fold(1.0, |acc, i| acc * f64::from(i))
}
