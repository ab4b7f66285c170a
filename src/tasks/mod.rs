//! Task list management
//!
//! Handles the session's ordered task collection. The list lives in memory
//! only and is dropped when the session ends.

pub mod board;

pub use board::{Task, TaskList};
