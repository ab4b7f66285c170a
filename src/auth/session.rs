//! Session state
//!
//! Tracks the single active session between a successful login and logout,
//! and names the screens the external navigation collaborator moves between.

/// Screens of the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Tasks,
}

/// Represents the state of the active user session.
#[derive(Debug, Default)]
pub struct Session {
    username: Option<String>,
    is_logged_in: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the session as granted for the given user.
    ///
    /// Called by the presentation layer when login reports success.
    pub fn grant(&mut self, username: &str) {
        self.username = Some(username.to_string());
        self.is_logged_in = true;
    }

    /// Resets the session state, logging out and clearing the username.
    pub fn logout(&mut self) {
        self.username = None;
        self.is_logged_in = false;
    }

    /// Returns whether a login has been granted and not yet ended.
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    /// Returns the logged-in username if set.
    pub fn username(&self) -> Option<&String> {
        self.username.as_ref()
    }
}
