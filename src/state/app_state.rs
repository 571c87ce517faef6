//! Application state definitions

use super::forms::{Form, FormRow, SignupForm};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Values echoed back after a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedDialog {
    pub message: String,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The sign-up form and its values
    pub form: SignupForm,
    /// Base directory for relative image paths
    pub image_base_dir: Option<PathBuf>,
    /// Pending error messages, shown one at a time
    pub error_queue: VecDeque<String>,
    /// Dialog shown after the submit handler accepted the values
    pub submitted: Option<SubmittedDialog>,
    /// One-line message for the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::debug!("Queued error: {message}");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently on screen
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Resolve the image path if focus is leaving the image row
    fn blur_image_row(&mut self) {
        if self.form.active_row() == FormRow::Image {
            self.form.resolve_image(self.image_base_dir.as_deref());
        }
    }

    /// Move to next form row
    pub fn next_form_field(&mut self) {
        self.blur_image_row();
        self.form.next_field();
    }

    /// Move to previous form row
    pub fn prev_form_field(&mut self) {
        self.blur_image_row();
        self.form.prev_field();
    }

    /// Handle character input on the active text row
    pub fn form_input_char(&mut self, c: char, shift: bool) {
        let ch = if shift { c.to_ascii_uppercase() } else { c };
        if let Some(field) = self.form.get_active_field_mut() {
            field.push_char(ch);
        }
    }

    /// Handle backspace on the active text row
    pub fn form_backspace(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.pop_char();
        }
    }

    /// Resolve pending input and mark every field touched, as a submit does
    pub fn prepare_submit(&mut self) {
        self.form.resolve_image(self.image_base_dir.as_deref());
        self.form.touched.touch_all();
    }

    /// Discard all form values
    pub fn clear_form(&mut self) {
        self.form.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert!(!state.has_errors());
        assert!(state.submitted.is_none());
        assert!(state.status_message.is_none());
        assert_eq!(state.form.active_row(), FormRow::Username);
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_input_goes_to_active_row() {
        let mut state = AppState::default();
        state.form_input_char('a', true);
        state.form_input_char('l', false);
        assert_eq!(state.form.username.as_text(), "Al");

        state.next_form_field();
        state.form_input_char('x', false);
        state.form_backspace();
        state.form_input_char('y', false);
        assert_eq!(state.form.password.as_text(), "y");
    }

    #[test]
    fn test_input_ignored_on_choice_rows() {
        let mut state = AppState::default();
        state.form.set_active_field(3);
        state.form_input_char('z', false);
        state.form_backspace();
        assert_eq!(state.form.username.as_text(), "");
        assert_eq!(state.form.image_path.as_text(), "");
    }

    #[test]
    fn test_leaving_image_row_resolves_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState {
            image_base_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        state.form.set_active_field(2);
        for c in "nope.png".chars() {
            state.form_input_char(c, false);
        }
        state.next_form_field();

        assert_eq!(state.form.active_row(), FormRow::Gender);
        assert_eq!(state.form.image_error.as_deref(), Some("File not found"));
        assert_eq!(
            state.form.visible_error(FieldName::Image).as_deref(),
            Some("File not found")
        );
    }

    #[test]
    fn test_prepare_submit_touches_everything() {
        let mut state = AppState::default();
        state.prepare_submit();
        for field in FieldName::ALL {
            assert!(state.form.touched.is_touched(field));
        }
    }
}
