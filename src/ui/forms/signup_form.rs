//! Sign-up form rendering

use super::field_renderer::{draw_choice_field, draw_field, ChoiceKind, ChoiceOption, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{
    FieldName, FieldOfWork, FormRow, Gender, FORGOT_PASSWORD_BUTTON, SIGNUP_BUTTONS, SUBMIT_BUTTON,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::ACCENT;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the form card
pub const FORM_WIDTH: u16 = 64;
/// Height of the form card including borders and margin
pub const FORM_HEIGHT: u16 = 2 + 2 + 2 + FIELD_HEIGHT * 5 + BUTTON_HEIGHT + 1;

/// Draw the sign-up form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let active = form.active_row();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Title
            Constraint::Length(FIELD_HEIGHT),  // Username
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(FIELD_HEIGHT),  // Image
            Constraint::Length(FIELD_HEIGHT),  // Gender
            Constraint::Length(FIELD_HEIGHT),  // Field
            Constraint::Length(BUTTON_HEIGHT), // Actions
            Constraint::Length(1),             // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let title = Paragraph::new(Span::styled(
        "Sign Up",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let username_error = form.visible_error(FieldName::Username);
    draw_field(
        frame,
        chunks[1],
        &form.username,
        active == FormRow::Username,
        true,
        username_error.as_deref(),
    );

    let password_error = form.visible_error(FieldName::Password);
    draw_field(
        frame,
        chunks[2],
        &form.password,
        active == FormRow::Password,
        form.reveal_password,
        password_error.as_deref(),
    );

    let image_error = form.visible_error(FieldName::Image);
    draw_field(
        frame,
        chunks[3],
        &form.image_path,
        active == FormRow::Image,
        true,
        image_error.as_deref(),
    );

    let gender_options: Vec<ChoiceOption> = Gender::ALL
        .iter()
        .map(|g| ChoiceOption {
            label: g.label(),
            checked: form.gender == Some(*g),
        })
        .collect();
    let gender_error = form.visible_error(FieldName::Gender);
    draw_choice_field(
        frame,
        chunks[4],
        "Choose Gender",
        ChoiceKind::Radio,
        &gender_options,
        (active == FormRow::Gender).then_some(form.option_cursor),
        gender_error.as_deref(),
    );

    let field_options: Vec<ChoiceOption> = FieldOfWork::ALL
        .iter()
        .map(|f| ChoiceOption {
            label: f.label(),
            checked: form.field.contains(f),
        })
        .collect();
    let field_error = form.visible_error(FieldName::Field);
    draw_choice_field(
        frame,
        chunks[5],
        "Choose Field",
        ChoiceKind::Checkbox,
        &field_options,
        (active == FormRow::Field).then_some(form.option_cursor),
        field_error.as_deref(),
    );

    draw_actions(frame, chunks[6], app);
    draw_help_text(frame, chunks[7]);
}

/// Draw the submit and forgot-password buttons side by side
fn draw_actions(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let on_actions = form.active_row() == FormRow::Actions;

    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Sign In (primary)
            Constraint::Min(0),
            Constraint::Length(22), // Forgot Password?
        ])
        .split(area);

    render_button(
        frame,
        button_chunks[0],
        SIGNUP_BUTTONS[SUBMIT_BUTTON],
        on_actions && form.option_cursor == SUBMIT_BUTTON,
        Some(ACCENT),
    );
    render_button(
        frame,
        button_chunks[2],
        SIGNUP_BUTTONS[FORGOT_PASSWORD_BUTTON],
        on_actions && form.option_cursor == FORGOT_PASSWORD_BUTTON,
        None,
    );
}

/// Draw the keyboard help line
fn draw_help_text(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", key_style),
        Span::raw(": next  "),
        Span::styled("Space", key_style),
        Span::raw(": select  "),
        Span::styled(crate::platform::SUBMIT_SHORTCUT, key_style),
        Span::raw(": submit  "),
        Span::styled(crate::platform::REVEAL_SHORTCUT, key_style),
        Span::raw(": reveal"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
