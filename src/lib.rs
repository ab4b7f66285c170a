//! taskgate - Client core for account registration, login, and a personal
//! task list.
//!
//! The presentation layer collects input, feeds field change and blur events
//! to the validation engine, submits through [`AuthService`], and renders
//! the returned error strings and outcomes. Credentials persist as a JSON
//! array under a single storage key; the task list lives for the session
//! only.

pub mod auth;
pub mod config;
pub mod error;
pub mod storage;
pub mod tasks;
pub mod utils;
pub mod validation;

pub use auth::{AuthService, LoginOutcome, RegisterOutcome, Screen, Session};
pub use config::AppConfig;
pub use error::StoreError;
pub use storage::{Credential, CredentialStore, FileStorage, MemoryStorage, StorageProvider};
pub use tasks::{Task, TaskList};
pub use validation::{FormField, FormState, RegistrationForm, field_error, validate_form};
