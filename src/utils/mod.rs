//! Utility functions
//!
//! Shared helpers used across modules.

pub mod logging;
