//! Form validation engine
//!
//! Pure, stateless field-level and form-level validation for the
//! registration form. The presentation layer calls into this module on every
//! field change and blur and renders the returned error strings.

pub mod form;
pub mod rules;

pub use form::{ErrorState, FormField, FormReport, FormState, RegistrationForm, validate_form};
pub use rules::field_error;
