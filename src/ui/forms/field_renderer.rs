//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus the error line
pub const FIELD_HEIGHT: u16 = 4;

/// One option on a radio or checkbox row
pub struct ChoiceOption<'a> {
    pub label: &'a str,
    pub checked: bool,
}

/// Whether a choice row behaves like radio buttons or checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    Radio,
    Checkbox,
}

fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Split a field area into the bordered input and the error line below it
fn split_field(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

fn draw_error_line(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let line = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)));
        frame.render_widget(line, area);
    }
}

/// Draw a text input with its error line
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    reveal_secret: bool,
    error: Option<&str>,
) {
    let (input_area, error_area) = split_field(area);

    let display_value = field.display_value(reveal_secret);
    let (text, text_style) = if display_value.is_empty() && !is_active {
        (
            field.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        )
    } else if is_active {
        (display_value, Style::default().fg(Color::Cyan))
    } else {
        (display_value, Style::default())
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(text, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));

    frame.render_widget(content.block(block), input_area);
    draw_error_line(frame, error_area, error);
}

/// Draw a row of radio buttons or checkboxes with its error line
///
/// `cursor` is the highlighted option while the row is active.
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    kind: ChoiceKind,
    options: &[ChoiceOption],
    cursor: Option<usize>,
    error: Option<&str>,
) {
    let (input_area, error_area) = split_field(area);

    let mut spans = Vec::new();
    for (idx, option) in options.iter().enumerate() {
        let mark = match (kind, option.checked) {
            (ChoiceKind::Radio, true) => "(•)",
            (ChoiceKind::Radio, false) => "( )",
            (ChoiceKind::Checkbox, true) => "[x]",
            (ChoiceKind::Checkbox, false) => "[ ]",
        };
        let style = if cursor == Some(idx) {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        if idx > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(format!("{mark} {}", option.label), style));
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(cursor.is_some(), error.is_some()));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);
    draw_error_line(frame, error_area, error);
}
