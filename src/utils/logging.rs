//! Logging utilities
//!
//! Provides logging setup for embedding applications.

use env_logger;

/// Setup logging for the embedding application
/// (env_logger picks up the RUST_LOG environment variable)
pub fn setup_logging() {
    env_logger::init();
}
