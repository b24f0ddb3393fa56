// AST evaluation
//
// Walks the closed expression tree against a restricted context. A
// non-finite intermediate result stops evaluation immediately and is
// classified by what produced it.

use crate::builtins::math::MathFunctions;
use crate::context::{AngleMode, Context};
use crate::error::{EvalError, EvalResult};
use crate::format::format_result;
use parser::ast::{BinaryOp, Expr, Function, UnaryOp};

pub struct Evaluator {
    context: Context,
}

impl Evaluator {
    pub fn new(angle_mode: AngleMode) -> Self {
        Self {
            context: Context::new(angle_mode),
        }
    }

    /// Evaluate to a finite number
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<f64> {
        let value = self.eval(expr)?;
        log::trace!("{} = {}", expr, value);
        Ok(value)
    }

    fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number(n) if n.is_finite() => Ok(*n),
            Expr::Number(_) => Err(EvalError::Overflow),

            Expr::Constant(c) => Ok(self.context.constant_value(*c)),

            Expr::Unary {
                op: UnaryOp::Negate,
                expr,
            } => Ok(-self.eval(expr)?),

            Expr::Binary { op, lhs, rhs } => {
                let l = self.eval(lhs)?;
                let r = self.eval(rhs)?;
                let value = apply_binary(*op, l, r);
                if value.is_finite() {
                    return Ok(value);
                }

                let operation = format!("{} {} {}", format_result(l), op.symbol(), format_result(r));
                Err(match op {
                    BinaryOp::Pow if value.is_nan() => EvalError::Domain { operation },
                    _ => EvalError::Singularity { operation },
                })
            }

            Expr::Call { func, arg } => {
                let x = self.eval(arg)?;
                let value = self.context.apply_function(*func, x);
                if value.is_finite() {
                    return Ok(value);
                }

                let operation = describe_call(*func, x);
                Err(if value.is_nan() {
                    EvalError::Domain { operation }
                } else {
                    EvalError::Singularity { operation }
                })
            }
        }
    }
}

fn apply_binary(op: BinaryOp, l: f64, r: f64) -> f64 {
    match op {
        BinaryOp::Add => l + r,
        BinaryOp::Sub => l - r,
        BinaryOp::Mul => l * r,
        BinaryOp::Div => l / r,
        BinaryOp::Pow => l.powf(r),
    }
}

fn describe_call(func: Function, x: f64) -> String {
    match func {
        Function::Fact => format!("{}!", format_result(x)),
        _ => format!("{}({})", func.name(), format_result(x)),
    }
}
