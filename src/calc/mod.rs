//! Calculator core
//!
//! This module holds everything that turns a compute request body into a
//! structured result: the arithmetic operations, the request message
//! extractor, and the outcome serializer.

pub mod arith;
pub mod message;
pub mod outcome;

pub use message::{parse_operation, MessageError, ParsedOperation};
pub use outcome::{evaluate, Outcome};
