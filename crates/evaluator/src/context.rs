// Restricted evaluation context
//
// The closed table of names an expression may refer to, plus the angle
// mode the trigonometric family consults. Nothing outside this table is
// reachable from an expression.

use parser::ast::{Constant, Function};
use std::fmt;
use std::str::FromStr;

/// How trigonometric arguments and results are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    pub fn toggle(self) -> Self {
        match self {
            AngleMode::Degrees => AngleMode::Radians,
            AngleMode::Radians => AngleMode::Degrees,
        }
    }

    /// Convert an angle in this mode to radians
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleMode::Degrees => value.to_radians(),
            AngleMode::Radians => value,
        }
    }

    /// Convert an angle in radians to this mode
    pub fn from_radians(self, value: f64) -> f64 {
        match self {
            AngleMode::Degrees => value.to_degrees(),
            AngleMode::Radians => value,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleMode::Degrees => write!(f, "deg"),
            AngleMode::Radians => write!(f, "rad"),
        }
    }
}

impl FromStr for AngleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(AngleMode::Degrees),
            "rad" | "radian" | "radians" => Ok(AngleMode::Radians),
            other => Err(format!("unknown angle mode '{}' (expected deg or rad)", other)),
        }
    }
}

/// Evaluation context: the only environment an expression sees
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    pub angle_mode: AngleMode,
}

impl Context {
    pub fn new(angle_mode: AngleMode) -> Self {
        Self { angle_mode }
    }
}

/// Every name bound in the context, constants first
pub fn known_names() -> Vec<&'static str> {
    Constant::ALL
        .iter()
        .map(Constant::name)
        .chain(Function::ALL.iter().map(Function::name))
        .collect()
}
