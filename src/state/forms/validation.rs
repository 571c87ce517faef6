//! Sign-up validation rules
//!
//! `validate` is a pure function over [`FormValues`]: no I/O, no shared
//! state. Every field is evaluated independently so one failing field never
//! hides the errors of another.

use super::values::{FieldName, FormValues, ImageRef};
use std::collections::BTreeMap;

pub const USERNAME_MIN_LEN: usize = 2;
pub const USERNAME_MAX_LEN: usize = 70;
pub const PASSWORD_MIN_LEN: usize = 8;
/// Largest accepted upload, in bytes (1 MiB)
pub const MAX_IMAGE_BYTES: u64 = 1024 * 1024;
pub const SUPPORTED_IMAGE_FORMATS: &[&str] = &["image/jpg", "image/jpeg", "image/gif", "image/png"];
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*";

pub const MSG_USERNAME_REQUIRED: &str = "No Username provided.";
pub const MSG_USERNAME_TOO_SHORT: &str = "Too Short!";
pub const MSG_USERNAME_TOO_LONG: &str = "Too Long!";
pub const MSG_PASSWORD_REQUIRED: &str = "No password provided.";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password is too short - should be 8 chars minimum.";
pub const MSG_PASSWORD_LOWERCASE: &str = "Password must contain one lowercase.";
pub const MSG_PASSWORD_UPPERCASE: &str = "Password must contain one uppercase.";
pub const MSG_PASSWORD_NUMBER: &str = "Password must contain one number.";
pub const MSG_PASSWORD_SPECIAL: &str = "Password must contain one special case character.";
pub const MSG_IMAGE_TOO_LARGE: &str = "File too large";
pub const MSG_IMAGE_UNSUPPORTED: &str = "Unsupported Format";
pub const MSG_GENDER_REQUIRED: &str = "No gender provided.";
pub const MSG_FIELD_REQUIRED: &str = "No field provided.";

/// Mapping of field name to its failing-rule messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FieldName, Vec<&'static str>>,
}

impl ValidationResult {
    fn push(&mut self, field: FieldName, message: &'static str) {
        self.errors.entry(field).or_default().push(message);
    }

    /// The message shown for a field (first failing rule), if any
    pub fn error(&self, field: FieldName) -> Option<&'static str> {
        self.errors.get(&field).and_then(|m| m.first().copied())
    }

    /// Every failing-rule message for a field, in rule order
    pub fn messages(&self, field: FieldName) -> &[&'static str] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_error(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Fields that currently fail, in form order
    pub fn failing_fields(&self) -> Vec<FieldName> {
        self.errors.keys().copied().collect()
    }
}

/// Evaluate every rule against the given values.
pub fn validate(values: &FormValues) -> ValidationResult {
    let mut result = ValidationResult::default();

    for message in username_errors(&values.username) {
        result.push(FieldName::Username, message);
    }
    for message in password_errors(&values.password) {
        result.push(FieldName::Password, message);
    }
    if let Some(image) = &values.image {
        for message in image_errors(image) {
            result.push(FieldName::Image, message);
        }
    }
    if values.gender.is_none() {
        result.push(FieldName::Gender, MSG_GENDER_REQUIRED);
    }
    if values.field.is_empty() {
        result.push(FieldName::Field, MSG_FIELD_REQUIRED);
    }

    result
}

fn username_errors(username: &str) -> Vec<&'static str> {
    if username.is_empty() {
        return vec![MSG_USERNAME_REQUIRED];
    }

    let len = username.chars().count();
    if len < USERNAME_MIN_LEN {
        vec![MSG_USERNAME_TOO_SHORT]
    } else if len > USERNAME_MAX_LEN {
        vec![MSG_USERNAME_TOO_LONG]
    } else {
        Vec::new()
    }
}

fn password_errors(password: &str) -> Vec<&'static str> {
    if password.is_empty() {
        return vec![MSG_PASSWORD_REQUIRED];
    }

    let rules: [(bool, &'static str); 5] = [
        (
            password.chars().count() >= PASSWORD_MIN_LEN,
            MSG_PASSWORD_TOO_SHORT,
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            MSG_PASSWORD_LOWERCASE,
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            MSG_PASSWORD_UPPERCASE,
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            MSG_PASSWORD_NUMBER,
        ),
        (
            password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)),
            MSG_PASSWORD_SPECIAL,
        ),
    ];

    rules
        .into_iter()
        .filter(|(passed, _)| !passed)
        .map(|(_, message)| message)
        .collect()
}

fn image_errors(image: &ImageRef) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if image.size_bytes > MAX_IMAGE_BYTES {
        errors.push(MSG_IMAGE_TOO_LARGE);
    }
    if !SUPPORTED_IMAGE_FORMATS.contains(&image.mime_type.as_str()) {
        errors.push(MSG_IMAGE_UNSUPPORTED);
    }
    errors
}
