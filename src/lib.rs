//! calcd - arithmetic over HTTP
//!
//! Core library for the calculator service and its terminal mode.

pub mod calc;
pub mod config;
pub mod http;
pub mod interactive;
pub mod server;
