//! Dialog echoing the submitted form values

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the submitted values as preformatted text
pub fn render_submitted_dialog(frame: &mut Frame, message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::raw(": close  "),
        Span::styled(crate::platform::COPY_KEY.to_string(), key_style),
        Span::raw(": copy"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Submitted",
            title_color: crate::ui::ACCENT,
            border_color: crate::ui::ACCENT,
            message,
            preformatted: true,
            hint: Some(hint),
            max_width: 72,
        },
    );
}
