//! Authentication result types
//!
//! Defines the terminal outcomes of login and registration attempts. Storage
//! failures are not outcomes; they surface as `StoreError` from the service.

use crate::auth::session::Screen;
use crate::validation::ErrorState;

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Success,
    InvalidCredentials,
}

impl LoginOutcome {
    /// The screen the navigation layer should move to, if any.
    pub fn next_screen(&self) -> Option<Screen> {
        match self {
            LoginOutcome::Success => Some(Screen::Tasks),
            LoginOutcome::InvalidCredentials => None,
        }
    }

    /// The dismissible message the login screen renders, empty on success.
    pub fn message(&self) -> &'static str {
        match self {
            LoginOutcome::Success => "",
            LoginOutcome::InvalidCredentials => "Invalid username or password.",
        }
    }
}

/// Result of a registration attempt
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    Success,
    /// The form failed validation; carries the per-field messages to render.
    ValidationFailed(ErrorState),
}

impl RegisterOutcome {
    /// The screen the navigation layer should move to, if any.
    pub fn next_screen(&self) -> Option<Screen> {
        match self {
            RegisterOutcome::Success => Some(Screen::Login),
            RegisterOutcome::ValidationFailed(_) => None,
        }
    }

    /// The dismissible message the registration screen renders.
    pub fn message(&self) -> &'static str {
        match self {
            RegisterOutcome::Success => "Account created successfully!",
            RegisterOutcome::ValidationFailed(_) => "Please correct the errors in the form.",
        }
    }
}
