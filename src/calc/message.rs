//! Compute request message extraction
//!
//! Compute requests carry a body shaped like
//! `{"num1":<number>,"operator":"<char>","num2":<number>}`. This is not a
//! JSON parser: it scans for the three field markers in that fixed order and
//! slices out whatever sits between them. Reordered fields or extra
//! whitespace inside a number make the extraction fail.

use std::num::ParseFloatError;
use thiserror::Error;

const NUM1_MARKER: &str = "\"num1\":";
const OPERATOR_MARKER: &str = "\"operator\":\"";
const NUM2_MARKER: &str = "\"num2\":";

/// Two operands and the operator character found between them.
///
/// The operator is not validated here; see [`crate::calc::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedOperation {
    pub operand1: f64,
    pub operator: char,
    pub operand2: f64,
}

#[derive(Error, Debug, PartialEq)]
pub enum MessageError {
    #[error("missing field marker {0}")]
    MissingMarker(&'static str),

    #[error("no operator character after marker")]
    MissingOperator,

    #[error("first operand is not terminated by a comma")]
    UnterminatedOperand,

    #[error("invalid number {text:?}: {source}")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Extracts a [`ParsedOperation`] from a compute request body.
///
/// Each marker is searched for after the previous field, so a body with the
/// fields out of order is rejected as if a marker were missing.
pub fn parse_operation(body: &str) -> Result<ParsedOperation, MessageError> {
    let num1_start = find_after(body, 0, NUM1_MARKER)?;
    let num1_end = body[num1_start..]
        .find(',')
        .map(|i| num1_start + i)
        .ok_or(MessageError::UnterminatedOperand)?;
    let operand1 = parse_number(&body[num1_start..num1_end])?;

    let op_start = find_after(body, num1_end, OPERATOR_MARKER)?;
    let operator = body[op_start..]
        .chars()
        .next()
        .ok_or(MessageError::MissingOperator)?;

    let num2_start = find_after(body, op_start + operator.len_utf8(), NUM2_MARKER)?;
    let num2_end = body[num2_start..]
        .find('}')
        .map_or(body.len(), |i| num2_start + i);
    let operand2 = parse_number(&body[num2_start..num2_end])?;

    Ok(ParsedOperation {
        operand1,
        operator,
        operand2,
    })
}

/// Returns the index just past `marker`, searching from `from`.
fn find_after(body: &str, from: usize, marker: &'static str) -> Result<usize, MessageError> {
    body[from..]
        .find(marker)
        .map(|i| from + i + marker.len())
        .ok_or(MessageError::MissingMarker(marker))
}

fn parse_number(text: &str) -> Result<f64, MessageError> {
    text.parse::<f64>().map_err(|source| MessageError::InvalidNumber {
        text: text.to_string(),
        source,
    })
}
