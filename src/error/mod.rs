//! Error handling
//!
//! Defines error types and handling for the client core.

pub mod types;

pub use types::*;
