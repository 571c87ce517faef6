//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::{style::Color, Frame};

/// Accent color for the title and primary action
pub const ACCENT: Color = Color::Rgb(249, 115, 22);

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    let form_area = layout::centered_rect(main_area, forms::FORM_WIDTH, forms::FORM_HEIGHT);
    forms::draw_signup(frame, form_area, app);

    layout::draw_status_bar(frame, status_area, app);

    // Modal overlays, errors first
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error, app.state.error_queue.len());
    } else if let Some(submitted) = &app.state.submitted {
        components::render_submitted_dialog(frame, &submitted.message);
    }
}
