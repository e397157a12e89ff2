//! HTTP protocol handling.
//!
//! Just enough HTTP/1.1 to serve the calculator: one request per
//! connection, no keep-alive.
//!
//! - **`connection`**: per-connection state machine and request routing
//! - **`parser`**: splits a raw read into request line, headers and body
//! - **`request`**: request representation and routing classification
//! - **`response`**: response representation with builder pattern
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Single read, up to 4095 bytes
//!        └──────┬──────┘
//!               │ Bytes received (0 bytes / error → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route and build response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Always
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
