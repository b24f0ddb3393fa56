// crates/parser/src/ast.rs

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
}

/// Named values of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub const ALL: [Constant; 2] = [Constant::Pi, Constant::E];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }
}

/// Unary functions of the calculator. `Fact` is what `n!` desugars to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Ln,
    Log,
    Sqrt,
    Exp,
    Fact,
}

impl Function {
    pub const ALL: [Function; 11] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Asin,
        Function::Acos,
        Function::Atan,
        Function::Ln,
        Function::Log,
        Function::Sqrt,
        Function::Exp,
        Function::Fact,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Ln => "ln",
            Function::Log => "log",
            Function::Sqrt => "sqrt",
            Function::Exp => "exp",
            Function::Fact => "fact",
        }
    }

    /// sin, cos, tan: argument is an angle
    pub fn takes_angle(&self) -> bool {
        matches!(self, Function::Sin | Function::Cos | Function::Tan)
    }

    /// asin, acos, atan: result is an angle
    pub fn returns_angle(&self) -> bool {
        matches!(self, Function::Asin | Function::Acos | Function::Atan)
    }
}

/// True if `name` is a constant or function the calculator knows
pub fn is_known_name(name: &str) -> bool {
    Constant::from_name(name).is_some() || Function::from_name(name).is_some()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),

    Constant(Constant),

    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },

    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    Call {
        func: Function,
        arg: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn negate(expr: Expr) -> Self {
        Expr::Unary {
            op: UnaryOp::Negate,
            expr: Box::new(expr),
        }
    }

    pub fn call(func: Function, arg: Expr) -> Self {
        Expr::Call {
            func,
            arg: Box::new(arg),
        }
    }
}

// Fully parenthesized form, used by `scicalc --ast`
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Constant(c) => write!(f, "{}", c.name()),
            Expr::Unary {
                op: UnaryOp::Negate,
                expr,
            } => write!(f, "(-{})", expr),
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
            Expr::Call { func, arg } => write!(f, "{}({})", func.name(), arg),
        }
    }
}
