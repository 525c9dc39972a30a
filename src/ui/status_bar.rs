use crate::app::state::{AppState, FocusTarget};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        " Tab next | Shift-Tab prev | Enter select | Esc quit ",
        Theme::status_bar(),
    ));

    // Focus indicator
    let focus_name = match state.focus {
        FocusTarget::FirstName => "FIRST NAME",
        FocusTarget::LastName => "LAST NAME",
        FocusTarget::DateOfBirth => "DATE OF BIRTH",
        FocusTarget::Calculate => "CALCULATE",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.as_ref().width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
