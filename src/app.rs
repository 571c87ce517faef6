//! Application state and core logic

use crate::config::SignupConfig;
use crate::state::{
    AppState, FormRow, Gender, SubmittedDialog, FORGOT_PASSWORD_BUTTON, SUBMIT_BUTTON,
};
use crate::submit::{EchoSubmitHandler, SubmitHandler};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receives the values once they validate
    submit_handler: Box<dyn SubmitHandler>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance with the echoing submit handler
    pub fn new(config: &SignupConfig) -> Self {
        Self::with_handler(config, Box::new(EchoSubmitHandler))
    }

    /// Create a new App instance with a custom submit handler
    pub fn with_handler(config: &SignupConfig, submit_handler: Box<dyn SubmitHandler>) -> Self {
        let mut state = AppState {
            image_base_dir: config.image_base_dir(),
            ..Default::default()
        };
        state.form.reveal_password = !config.mask_password();

        Self {
            state,
            submit_handler,
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Request the main loop to exit
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Submitted-values dialog (modal)
        if self.state.submitted.is_some() {
            self.handle_submitted_dialog_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;
        self.state.status_message = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => {
                    self.submit().await;
                    return Ok(());
                }
                KeyCode::Char('t') => {
                    self.state.form.toggle_password_visibility();
                    return Ok(());
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            _ => match self.state.form.active_row() {
                row if row.is_text_input() => self.handle_text_row_key(key),
                FormRow::Gender => self.handle_gender_row_key(key),
                FormRow::Field => self.handle_field_row_key(key),
                FormRow::Actions => self.handle_actions_row_key(key).await,
                _ => {}
            },
        }

        Ok(())
    }

    fn handle_text_row_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => self
                .state
                .form_input_char(c, key.modifiers.contains(KeyModifiers::SHIFT)),
            KeyCode::Backspace => self.state.form_backspace(),
            KeyCode::Enter => self.state.next_form_field(),
            _ => {}
        }
    }

    fn handle_gender_row_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.form.prev_option(),
            KeyCode::Right | KeyCode::Char('l') => self.state.form.next_option(),
            KeyCode::Char(' ') | KeyCode::Enter => self.state.form.activate_option(),
            KeyCode::Char('m') | KeyCode::Char('M') => self.state.form.select_gender(Gender::Male),
            KeyCode::Char('f') | KeyCode::Char('F') => {
                self.state.form.select_gender(Gender::Female)
            }
            _ => {}
        }
    }

    fn handle_field_row_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.form.prev_option(),
            KeyCode::Right | KeyCode::Char('l') => self.state.form.next_option(),
            KeyCode::Char(' ') | KeyCode::Enter => self.state.form.activate_option(),
            _ => {}
        }
    }

    async fn handle_actions_row_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.form.prev_option(),
            KeyCode::Right | KeyCode::Char('l') => self.state.form.next_option(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.form.option_cursor {
                SUBMIT_BUTTON => self.submit().await,
                FORGOT_PASSWORD_BUTTON => {
                    self.state.status_message =
                        Some("Password recovery is not available".to_string());
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_submitted_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.state.submitted = None;
            }
            KeyCode::Char(c) if c == crate::platform::COPY_KEY => {
                let Some(message) = self.state.submitted.as_ref().map(|d| d.message.clone())
                else {
                    return;
                };
                match self.copy_to_clipboard(&message) {
                    Ok(()) => {
                        self.copy_message = Some(copied_message(&message));
                    }
                    Err(e) => self.push_error(format!("Failed to copy: {e}")),
                }
            }
            _ => {}
        }
    }

    /// Validate and hand the values to the submit handler.
    ///
    /// Every field is marked touched first so all errors become visible; the
    /// handler is only called when no field fails.
    pub async fn submit(&mut self) {
        self.state.prepare_submit();

        if !self.state.form.can_submit() {
            let failing = self
                .state
                .form
                .errors()
                .failing_fields()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            tracing::debug!("Submit blocked, failing fields: {failing}");
            self.state.status_message =
                Some("Please fix the highlighted fields".to_string());
            return;
        }

        let values = self.state.form.values();
        match self.submit_handler.submit(&values).await {
            Ok(outcome) => {
                self.state.submitted = Some(SubmittedDialog {
                    message: outcome.message,
                });
                self.state.clear_form();
            }
            Err(e) => self.push_error(format!("Submit failed: {e}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Status text after copying `text` to the clipboard
fn copied_message(text: &str) -> String {
    format!("Copied {} chars", text.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, FieldOfWork, FormValues, MSG_USERNAME_TOO_SHORT};
    use crate::submit::{MockSubmitHandler, SubmitOutcome};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(handler: MockSubmitHandler) -> App {
        App::with_handler(&SignupConfig::default(), Box::new(handler))
    }

    async fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    /// Fill the form through the keyboard: "Al", "Abcdef1!", no image, male, Frontend
    async fn fill_valid_form(app: &mut App) {
        type_str(app, "Al").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_str(app, "Abcdef1!").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Char('m'))).await.unwrap();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
    }

    #[test]
    fn test_new_app_defaults() {
        let app = App::new(&SignupConfig::default());
        assert!(!app.should_quit());
        assert!(!app.state.form.reveal_password);
        assert!(app.state.image_base_dir.is_none());
    }

    #[test]
    fn test_config_unmasks_password() {
        let config = SignupConfig {
            mask_password: Some(false),
            ..Default::default()
        };
        let app = App::new(&config);
        assert!(app.state.form.reveal_password);
    }

    #[test]
    fn test_request_quit() {
        let mut app = App::new(&SignupConfig::default());
        app.request_quit();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_valid_submit_calls_handler_once_and_resets() {
        let mut handler = MockSubmitHandler::new();
        handler
            .expect_submit()
            .withf(|values: &FormValues| {
                values.username == "Al"
                    && values.password == "Abcdef1!"
                    && values.gender == Some(Gender::Male)
                    && values.field.iter().copied().collect::<Vec<_>>()
                        == vec![FieldOfWork::Frontend]
                    && values.image.is_none()
            })
            .times(1)
            .returning(|_| {
                Ok(SubmitOutcome {
                    message: "echo".to_string(),
                })
            });

        let mut app = app_with(handler);
        fill_valid_form(&mut app).await;
        assert_eq!(app.state.form.active_row(), FormRow::Actions);
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert_eq!(
            app.state.submitted,
            Some(SubmittedDialog {
                message: "echo".to_string()
            })
        );
        assert_eq!(app.state.form.username.as_text(), "");
        assert!(!app.state.form.touched.is_touched(FieldName::Username));
    }

    #[tokio::test]
    async fn test_invalid_submit_never_calls_handler() {
        let mut handler = MockSubmitHandler::new();
        handler.expect_submit().never();

        let mut app = app_with(handler);
        type_str(&mut app, "A").await;
        app.handle_key(ctrl('s')).await.unwrap();

        assert!(app.state.submitted.is_none());
        assert!(app.state.status_message.is_some());
        for field in FieldName::ALL {
            assert!(app.state.form.touched.is_touched(field));
        }
        assert_eq!(
            app.state.form.visible_error(FieldName::Username).as_deref(),
            Some(MSG_USERNAME_TOO_SHORT)
        );
        // Values are kept for correction
        assert_eq!(app.state.form.username.as_text(), "A");
    }

    #[tokio::test]
    async fn test_handler_failure_goes_to_error_queue() {
        let mut handler = MockSubmitHandler::new();
        handler
            .expect_submit()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("offline")));

        let mut app = app_with(handler);
        fill_valid_form(&mut app).await;
        app.handle_key(ctrl('s')).await.unwrap();

        assert_eq!(app.state.current_error(), Some("Submit failed: offline"));
        assert!(app.state.submitted.is_none());
        assert_eq!(app.state.form.username.as_text(), "Al");

        // Error dialog is modal until dismissed
        app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
        assert!(app.state.has_errors());
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert!(!app.state.has_errors());
    }

    #[tokio::test]
    async fn test_submitted_dialog_dismissal() {
        let mut handler = MockSubmitHandler::new();
        handler.expect_submit().returning(|_| {
            Ok(SubmitOutcome {
                message: "{}".to_string(),
            })
        });

        let mut app = app_with(handler);
        fill_valid_form(&mut app).await;
        app.submit().await;
        assert!(app.state.submitted.is_some());

        // Typing does not reach the form while the dialog is open
        app.handle_key(key(KeyCode::Char('z'))).await.unwrap();
        assert_eq!(app.state.form.username.as_text(), "");

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert!(app.state.submitted.is_none());
    }

    #[tokio::test]
    async fn test_forgot_password_sets_status() {
        let mut handler = MockSubmitHandler::new();
        handler.expect_submit().never();

        let mut app = app_with(handler);
        app.handle_key(key(KeyCode::BackTab)).await.unwrap();
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert_eq!(
            app.state.status_message.as_deref(),
            Some("Password recovery is not available")
        );
    }

    #[tokio::test]
    async fn test_ctrl_t_toggles_password_visibility() {
        let mut app = app_with(MockSubmitHandler::new());
        app.handle_key(ctrl('t')).await.unwrap();
        assert!(app.state.form.reveal_password);
        assert_eq!(app.state.form.username.as_text(), "");
    }

    #[tokio::test]
    async fn test_field_row_toggles_with_space() {
        let mut app = app_with(MockSubmitHandler::new());
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Down)).await.unwrap();
        }
        assert_eq!(app.state.form.active_row(), FormRow::Field);
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
        assert!(app.state.form.field.contains(&FieldOfWork::Backend));
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert!(app.state.form.field.is_empty());
    }

    #[test]
    fn test_copied_message_counts_chars_not_bytes() {
        assert_eq!(copied_message("{\"username\": \"Zoë\"}"), "Copied 19 chars");
        assert_eq!(copied_message("ab"), "Copied 2 chars");
    }
}
