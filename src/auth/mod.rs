//! Authentication system
//!
//! Handles login, registration, and the single active session.

pub mod results;
pub mod service;
pub mod session;

pub use results::{LoginOutcome, RegisterOutcome};
pub use service::AuthService;
pub use session::{Screen, Session};
