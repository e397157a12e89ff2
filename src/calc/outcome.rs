//! Computation outcomes and their wire form.

use crate::calc::arith;

pub const DIVISION_BY_ZERO: &str = "Division by zero!";
pub const INVALID_OPERATOR: &str = "Invalid operator!";
pub const INVALID_JSON: &str = "Invalid JSON format";
pub const INVALID_REQUEST: &str = "Invalid request";

/// Result of one computation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(f64),
    Failure(String),
}

impl Outcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Serializes the outcome as a compact JSON object.
    ///
    /// Success values are written fixed-point with 10 fractional digits.
    /// Failure messages are written as-is; they are always one of the
    /// constants in this module.
    pub fn to_json(&self) -> String {
        match self {
            Outcome::Success(value) => format!("{{\"result\":{value:.10},\"success\":true}}"),
            Outcome::Failure(message) => format!("{{\"error\":\"{message}\",\"success\":false}}"),
        }
    }
}

/// Applies `operator` to the operands.
///
/// Division by zero is rejected before [`arith::divide`] is called.
pub fn evaluate(operand1: f64, operator: char, operand2: f64) -> Outcome {
    match operator {
        '+' => Outcome::Success(arith::add(operand1, operand2)),
        '-' => Outcome::Success(arith::subtract(operand1, operand2)),
        '*' => Outcome::Success(arith::multiply(operand1, operand2)),
        '/' if operand2 == 0.0 => Outcome::failure(DIVISION_BY_ZERO),
        '/' => Outcome::Success(arith::divide(operand1, operand2)),
        _ => Outcome::failure(INVALID_OPERATOR),
    }
}
