//! Sign-up form state: text inputs, selections, focus and touched bookkeeping

use super::field::FormField;
use super::validation::{validate, ValidationResult};
use super::values::{FieldName, FieldOfWork, FormValues, Gender, ImageRef};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Which fields the user has interacted with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedState {
    touched: HashSet<FieldName>,
}

impl TouchedState {
    pub fn touch(&mut self, field: FieldName) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(FieldName::ALL);
    }

    pub fn reset(&mut self) {
        self.touched.clear();
    }
}

/// Rows of the sign-up form, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Username,
    Password,
    Image,
    Gender,
    Field,
    Actions,
}

impl FormRow {
    pub const ALL: [FormRow; 6] = [
        FormRow::Username,
        FormRow::Password,
        FormRow::Image,
        FormRow::Gender,
        FormRow::Field,
        FormRow::Actions,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    /// The validated field bound to this row (the actions row has none)
    pub fn field_name(&self) -> Option<FieldName> {
        match self {
            Self::Username => Some(FieldName::Username),
            Self::Password => Some(FieldName::Password),
            Self::Image => Some(FieldName::Image),
            Self::Gender => Some(FieldName::Gender),
            Self::Field => Some(FieldName::Field),
            Self::Actions => None,
        }
    }

    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::Username | Self::Password | Self::Image)
    }

    /// Number of horizontal options on this row
    pub fn option_count(&self) -> usize {
        match self {
            Self::Gender => Gender::ALL.len(),
            Self::Field => FieldOfWork::ALL.len(),
            Self::Actions => SIGNUP_BUTTONS.len(),
            _ => 0,
        }
    }
}

/// Buttons on the actions row
pub const SIGNUP_BUTTONS: [&str; 2] = ["Sign In", "Forgot Password?"];
pub const SUBMIT_BUTTON: usize = 0;
pub const FORGOT_PASSWORD_BUTTON: usize = 1;

/// The sign-up form
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub username: FormField,
    pub password: FormField,
    pub image_path: FormField,
    /// Image resolved from `image_path` on blur or submit
    pub image: Option<ImageRef>,
    /// Why `image_path` could not be attached
    pub image_error: Option<String>,
    pub gender: Option<Gender>,
    pub field: BTreeSet<FieldOfWork>,
    pub touched: TouchedState,
    pub active_field_index: usize,
    /// Highlighted option on the gender, field and actions rows
    pub option_cursor: usize,
    pub reveal_password: bool,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            username: FormField::text("username", "Username", "Username"),
            password: FormField::secret("password", "Password", "Password"),
            image_path: FormField::text("image", "Upload Image", "Path to image"),
            image: None,
            image_error: None,
            gender: None,
            field: BTreeSet::new(),
            touched: TouchedState::default(),
            active_field_index: 0,
            option_cursor: 0,
            reveal_password: false,
        }
    }

    pub fn active_row(&self) -> FormRow {
        FormRow::from_index(self.active_field_index)
    }

    /// Snapshot of the current values
    pub fn values(&self) -> FormValues {
        FormValues {
            username: self.username.as_text().to_string(),
            password: self.password.as_text().to_string(),
            image: self.image.clone(),
            gender: self.gender,
            field: self.field.clone(),
        }
    }

    pub fn errors(&self) -> ValidationResult {
        validate(&self.values())
    }

    /// Error text to display for a field: only once touched
    pub fn visible_error(&self, field: FieldName) -> Option<String> {
        if !self.touched.is_touched(field) {
            return None;
        }
        if field == FieldName::Image {
            if let Some(err) = &self.image_error {
                return Some(err.clone());
            }
        }
        let errors = self.errors();
        let first = errors.error(field)?;
        let more = errors.messages(field).len().saturating_sub(1);
        if more == 0 {
            Some(first.to_string())
        } else {
            Some(format!("{first} (+{more} more)"))
        }
    }

    /// True when no rule fails and the image (if any) was attached
    pub fn can_submit(&self) -> bool {
        self.image_error.is_none() && self.errors().is_valid()
    }

    /// Resolve the typed image path into an [`ImageRef`].
    ///
    /// Relative paths are joined onto `base_dir` when one is given.
    pub fn resolve_image(&mut self, base_dir: Option<&Path>) {
        let typed = self.image_path.as_text().trim();
        if typed.is_empty() {
            self.image = None;
            self.image_error = None;
            return;
        }

        let mut path = PathBuf::from(typed);
        if path.is_relative() {
            if let Some(base) = base_dir {
                path = base.join(path);
            }
        }

        match ImageRef::from_path(&path) {
            Ok(image) => {
                tracing::debug!(
                    "Attached image {} ({} bytes, {})",
                    image.path.display(),
                    image.size_bytes,
                    image.mime_type
                );
                self.image = Some(image);
                self.image_error = None;
            }
            Err(err) => {
                tracing::debug!("Cannot attach image {}: {err}", path.display());
                self.image = None;
                self.image_error = Some(err.to_string());
            }
        }
    }

    /// Move the option cursor left, wrapping around
    pub fn prev_option(&mut self) {
        let count = self.active_row().option_count();
        if count == 0 {
            return;
        }
        self.option_cursor = if self.option_cursor == 0 {
            count - 1
        } else {
            self.option_cursor - 1
        };
    }

    /// Move the option cursor right, wrapping around
    pub fn next_option(&mut self) {
        let count = self.active_row().option_count();
        if count == 0 {
            return;
        }
        self.option_cursor = (self.option_cursor + 1) % count;
    }

    /// Select the highlighted gender or toggle the highlighted field checkbox
    pub fn activate_option(&mut self) {
        match self.active_row() {
            FormRow::Gender => {
                self.select_gender(Gender::ALL[self.option_cursor % Gender::ALL.len()])
            }
            FormRow::Field => {
                let field = FieldOfWork::ALL[self.option_cursor % FieldOfWork::ALL.len()];
                if !self.field.remove(&field) {
                    self.field.insert(field);
                }
            }
            _ => {}
        }
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.gender = Some(gender);
        if let Some(idx) = Gender::ALL.iter().position(|g| *g == gender) {
            if self.active_row() == FormRow::Gender {
                self.option_cursor = idx;
            }
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.reveal_password = !self.reveal_password;
    }

    /// Discard every value and touched flag, keeping the reveal preference
    pub fn reset(&mut self) {
        let reveal = self.reveal_password;
        *self = Self::new();
        self.reveal_password = reveal;
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        FormRow::ALL.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    /// Leaving a row marks its field touched (blur)
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(FormRow::ALL.len() - 1);
        if index != self.active_field_index {
            if let Some(field) = self.active_row().field_name() {
                self.touched.touch(field);
            }
            self.option_cursor = 0;
        }
        self.active_field_index = index;
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_row() {
            FormRow::Username => Some(&mut self.username),
            FormRow::Password => Some(&mut self.password),
            FormRow::Image => Some(&mut self.image_path),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.username),
            1 => Some(&self.password),
            2 => Some(&self.image_path),
            _ => None,
        }
    }
}
