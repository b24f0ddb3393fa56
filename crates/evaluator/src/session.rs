//! Calculator session
//!
//! Keypad state for one interactive calculator: the expression being
//! typed, the angle mode, the inverse flag, the last answer and a short
//! history. The evaluator itself stays stateless; this is the only place
//! that remembers anything between evaluations.

use crate::context::AngleMode;
use crate::error::{EvalError, EvalResult};
use crate::format::format_result;
use lexer::to_display;
use parser::ast::Function;
use std::collections::VecDeque;

/// Number of evaluations the history keeps
pub const HISTORY_LIMIT: usize = 50;

/// A decimal digit key, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// Binary operator keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Glyph inserted into the expression
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }
}

/// Function keys. Trig keys have an inverse partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKey {
    Sin,
    Cos,
    Tan,
    Ln,
    Log,
    Sqrt,
    Exp,
}

impl FunctionKey {
    /// Function this key inserts given the inverse flag
    pub fn function(&self, inverse: bool) -> Function {
        match (self, inverse) {
            (Self::Sin, false) => Function::Sin,
            (Self::Sin, true) => Function::Asin,
            (Self::Cos, false) => Function::Cos,
            (Self::Cos, true) => Function::Acos,
            (Self::Tan, false) => Function::Tan,
            (Self::Tan, true) => Function::Atan,
            (Self::Ln, _) => Function::Ln,
            (Self::Log, _) => Function::Log,
            (Self::Sqrt, _) => Function::Sqrt,
            (Self::Exp, _) => Function::Exp,
        }
    }

    pub fn has_inverse(&self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }
}

/// Keypad keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(Digit),
    Point,
    Operator(Operator),
    OpenParen,
    CloseParen,
    Function(FunctionKey),
    Pi,
    Euler,
    Percent,
    Factorial,
    /// Scientific-notation marker ("EE")
    Exponent,
    Ans,
    Backspace,
    Clear,
    ToggleAngle,
    ToggleInverse,
    Equals,
}

/// What the display is showing
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Editing,
    /// The expression holds the formatted result of the last evaluation
    Result,
    /// The last evaluation failed; the expression is left as typed
    Error(EvalError),
}

/// One successful evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: f64,
}

#[derive(Debug, Clone)]
pub struct CalculatorSession {
    expression: String,
    status: Status,
    angle_mode: AngleMode,
    inverse: bool,
    last_answer: f64,
    history: VecDeque<HistoryEntry>,
}

impl CalculatorSession {
    pub fn new(angle_mode: AngleMode) -> Self {
        Self {
            expression: String::new(),
            status: Status::Editing,
            angle_mode,
            inverse: false,
            last_answer: 0.0,
            history: VecDeque::new(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn set_angle_mode(&mut self, angle_mode: AngleMode) {
        self.angle_mode = angle_mode;
    }

    pub fn inverse(&self) -> bool {
        self.inverse
    }

    pub fn last_answer(&self) -> f64 {
        self.last_answer
    }

    /// Oldest first
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    /// Text for the display
    pub fn display(&self) -> &str {
        match self.status {
            Status::Error(_) => "Error",
            _ if self.expression.is_empty() => "0",
            _ => &self.expression,
        }
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::ToggleAngle => {
                self.angle_mode = self.angle_mode.toggle();
                return;
            }
            Key::ToggleInverse => {
                self.inverse = !self.inverse;
                return;
            }
            Key::Equals => {
                // the outcome is visible through status() and display()
                let _ = self.equals();
                return;
            }
            _ => {}
        }

        let fresh = self.status == Status::Result && starts_new_expression(key);
        self.status = Status::Editing;
        if fresh {
            self.expression.clear();
        }

        match key {
            Key::Digit(d) => self.expression.push(d.as_char()),
            Key::Point => self.expression.push('.'),
            Key::Operator(op) => self.expression.push_str(op.glyph()),
            Key::OpenParen => self.expression.push('('),
            Key::CloseParen => self.expression.push(')'),
            Key::Function(fk) => {
                let func = fk.function(self.inverse);
                if fk.has_inverse() {
                    self.inverse = false;
                }
                self.expression.push_str(func.name());
                self.expression.push('(');
            }
            Key::Pi => self.expression.push('π'),
            Key::Euler => self.expression.push('e'),
            Key::Percent => self.expression.push('%'),
            Key::Factorial => self.expression.push('!'),
            Key::Exponent => self.expression.push('E'),
            Key::Ans => {
                let text = to_display(&format_result(self.last_answer));
                if self.last_answer < 0.0 {
                    self.expression.push('(');
                    self.expression.push_str(&text);
                    self.expression.push(')');
                } else {
                    self.expression.push_str(&text);
                }
            }
            Key::Backspace => self.backspace(),
            Key::Clear => self.expression.clear(),
            Key::ToggleAngle | Key::ToggleInverse | Key::Equals => {}
        }
    }

    /// Evaluate the current expression.
    ///
    /// On success the result replaces the expression and becomes the last
    /// answer. On failure the expression is kept for correction.
    pub fn equals(&mut self) -> EvalResult<f64> {
        match crate::evaluate(&self.expression, self.angle_mode) {
            Ok(value) => {
                log::debug!("{} = {}", self.expression, value);
                self.last_answer = value;
                self.history.push_back(HistoryEntry {
                    expression: std::mem::take(&mut self.expression),
                    result: value,
                });
                if self.history.len() > HISTORY_LIMIT {
                    self.history.pop_front();
                }
                self.expression = to_display(&format_result(value));
                self.status = Status::Result;
                Ok(value)
            }
            Err(err) => {
                log::debug!("{} failed: {}", self.expression, err);
                self.status = Status::Error(err.clone());
                Err(err)
            }
        }
    }

    /// Replace the expression with typed text and evaluate it
    pub fn submit(&mut self, text: &str) -> EvalResult<f64> {
        self.expression = text.to_string();
        self.equals()
    }

    // Removes a whole "sin(" at once, otherwise one character
    fn backspace(&mut self) {
        if let Some(head) = self.expression.strip_suffix('(') {
            let name_len = head
                .chars()
                .rev()
                .take_while(|c| c.is_ascii_alphabetic())
                .count();
            let start = head.len() - name_len;
            if name_len > 0 && Function::from_name(&head[start..]).is_some() {
                self.expression.truncate(start);
                return;
            }
        }
        self.expression.pop();
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(AngleMode::default())
    }
}

/// Keys that discard a just-shown result instead of extending it.
/// Backspace clears a result whole rather than trimming digits off it.
fn starts_new_expression(key: Key) -> bool {
    matches!(
        key,
        Key::Digit(_)
            | Key::Backspace
            | Key::Point
            | Key::OpenParen
            | Key::Function(_)
            | Key::Pi
            | Key::Euler
            | Key::Ans
    )
}
