use crate::app::state::{AppState, FocusTarget};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusTarget::Calculate;
    let (border_style, label_style) = if focused {
        (Theme::border_focused(), Theme::button_focused())
    } else {
        (Theme::border(), Theme::button())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Line::from(Span::styled(" Calculate Age ", label_style)).centered();
    frame.render_widget(Paragraph::new(label), inner);
}
