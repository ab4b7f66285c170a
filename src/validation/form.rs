//! Registration form state
//!
//! Holds field values and per-field error messages as explicit values owned
//! by the caller, and derives whole-form validity from them. The submit
//! action is enabled only while the form reports valid.

use std::collections::HashMap;
use std::fmt;

use super::rules::field_error;

/// The fields collected by the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Firstname,
    Lastname,
    Username,
    Phonenumber,
    Password,
    Confirmpassword,
    Email,
    Zip,
}

impl FormField {
    /// All fields, in the order the form renders them.
    pub const ALL: [FormField; 8] = [
        FormField::Firstname,
        FormField::Lastname,
        FormField::Username,
        FormField::Phonenumber,
        FormField::Password,
        FormField::Confirmpassword,
        FormField::Email,
        FormField::Zip,
    ];

    /// The field's wire name, as used by the presentation layer's input ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Firstname => "firstname",
            FormField::Lastname => "lastname",
            FormField::Username => "username",
            FormField::Phonenumber => "phonenumber",
            FormField::Password => "password",
            FormField::Confirmpassword => "confirmpassword",
            FormField::Email => "email",
            FormField::Zip => "zip",
        }
    }

    /// Parse a wire name back into a field.
    pub fn parse(name: &str) -> Option<FormField> {
        FormField::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values of all registration fields.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormState {
    firstname: String,
    lastname: String,
    username: String,
    phonenumber: String,
    password: String,
    confirmpassword: String,
    email: String,
    zip: String,
}

impl FormState {
    /// Returns the current value of a field.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Firstname => &self.firstname,
            FormField::Lastname => &self.lastname,
            FormField::Username => &self.username,
            FormField::Phonenumber => &self.phonenumber,
            FormField::Password => &self.password,
            FormField::Confirmpassword => &self.confirmpassword,
            FormField::Email => &self.email,
            FormField::Zip => &self.zip,
        }
    }

    /// Sets the current value of a field.
    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Firstname => self.firstname = value,
            FormField::Lastname => self.lastname = value,
            FormField::Username => self.username = value,
            FormField::Phonenumber => self.phonenumber = value,
            FormField::Password => self.password = value,
            FormField::Confirmpassword => self.confirmpassword = value,
            FormField::Email => self.email = value,
            FormField::Zip => self.zip = value,
        }
    }

    /// Returns whether any field is still the empty string.
    pub fn has_empty_fields(&self) -> bool {
        FormField::ALL.iter().any(|f| self.value(*f).is_empty())
    }
}

/// Per-field error messages. An empty string means the field is valid.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ErrorState {
    errors: HashMap<FormField, String>,
}

impl ErrorState {
    /// Returns the error message for a field, empty when valid or unchecked.
    pub fn message(&self, field: FormField) -> &str {
        self.errors.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Records the error message for a field.
    pub fn set(&mut self, field: FormField, message: String) {
        self.errors.insert(field, message);
    }

    /// Returns whether any field currently has a non-empty error.
    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|e| !e.is_empty())
    }
}

/// Result of a whole-form validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FormReport {
    pub errors: ErrorState,
    pub is_valid: bool,
}

/// Recomputes every field error and derives form validity.
///
/// Validity requires no field error and no empty field. Called after every
/// change or blur: the confirm-password rule reads the current password, so
/// stale per-field results cannot be trusted.
pub fn validate_form(form: &FormState) -> FormReport {
    let mut errors = ErrorState::default();
    for field in FormField::ALL {
        errors.set(field, field_error(field, form.value(field), form));
    }

    let is_valid = !errors.has_errors() && !form.has_empty_fields();
    FormReport { errors, is_valid }
}

/// A registration form with its validation state kept current.
///
/// Bundles the field values, the latest error messages, and the derived
/// submit-enable flag, revalidating on every change and blur event the
/// presentation layer forwards.
#[derive(Debug, Default, Clone)]
pub struct RegistrationForm {
    state: FormState,
    errors: ErrorState,
    is_valid: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a field change event and revalidates the whole form.
    pub fn apply_change(&mut self, field: FormField, value: impl Into<String>) {
        self.state.set_value(field, value);
        self.revalidate();
    }

    /// Applies a field blur event, re-checking the stored values.
    pub fn apply_blur(&mut self, _field: FormField) {
        self.revalidate();
    }

    fn revalidate(&mut self) {
        let report = validate_form(&self.state);
        self.errors = report.errors;
        self.is_valid = report.is_valid;
    }

    /// The error message to render next to a field.
    pub fn error(&self, field: FormField) -> &str {
        self.errors.message(field)
    }

    /// Whether the submit action should be enabled.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }
}
