mod button;
mod field;
mod layout;
mod status_bar;
mod theme;
mod toast;

use crate::app::state::{AppState, FocusTarget};
use crate::core::date;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let form = layout::compute_layout(area);

    let title = Line::from(Span::styled("Age Calculator", theme::Theme::title())).centered();
    frame.render_widget(Paragraph::new(title), form.title);

    field::render(frame, form.first_name, state, FocusTarget::FirstName, "First Name", "");
    field::render(frame, form.last_name, state, FocusTarget::LastName, "Last Name", "");
    let placeholder = if state.config.ui.date_format_hint {
        date::DATE_PLACEHOLDER
    } else {
        ""
    };
    field::render(
        frame,
        form.date_of_birth,
        state,
        FocusTarget::DateOfBirth,
        "Date of Birth",
        placeholder,
    );
    button::render(frame, form.button, state);

    let hint = Line::from(Span::styled("Dates use MM/DD/YYYY", theme::Theme::hint())).centered();
    frame.render_widget(Paragraph::new(hint), form.hint);

    status_bar::render(frame, form.status_bar, state);

    // Toast draws last so it overlays the form
    toast::render(frame, state);
}
