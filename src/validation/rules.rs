//! Field validation rules
//!
//! One rule per registration field. An empty returned string means the value
//! is valid; anything else is the inline error message for that field.
//!
//! The phone and zip rules are substring searches, not anchored matches, so
//! surrounding characters are accepted ("abc (123) 456-7890 xyz" passes).
//! Installed clients rely on that laxity; keep it.

use regex::Regex;
use std::sync::LazyLock;

use super::form::{FormField, FormState};

static ANY_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\d{3}\) \d{3}-\d{4}").unwrap());
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());
static LOWERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").unwrap());
static SPECIAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());
static ZIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{5}").unwrap());

/// Validates a single field value and returns its error message.
///
/// The full form state is passed alongside the candidate value because the
/// confirm-password rule compares against the current password field, which
/// may have changed since the confirmation was typed.
pub fn field_error(field: FormField, value: &str, form: &FormState) -> String {
    let error = match field {
        FormField::Firstname | FormField::Lastname => {
            if ANY_DIGIT.is_match(value) {
                "Error: Must not include numbers."
            } else {
                ""
            }
        }
        FormField::Phonenumber => {
            if !PHONE.is_match(value) {
                "Error: Must be in the format (xxx) xxx-xxxx."
            } else {
                ""
            }
        }
        FormField::Email => {
            if !EMAIL.is_match(value) {
                "Error: Invalid email format."
            } else {
                ""
            }
        }
        FormField::Password => {
            if !UPPERCASE.is_match(value)
                || !LOWERCASE.is_match(value)
                || !ANY_DIGIT.is_match(value)
                || !SPECIAL.is_match(value)
            {
                "Error: Must include an upper case letter, a lower case letter, a number, and a special character."
            } else {
                ""
            }
        }
        FormField::Confirmpassword => {
            if value != form.value(FormField::Password) {
                "Error: Passwords do not match."
            } else {
                ""
            }
        }
        FormField::Zip => {
            if !ZIP.is_match(value) {
                "Error: Must include 5 digits."
            } else {
                ""
            }
        }
        FormField::Username => "",
    };

    error.to_string()
}
