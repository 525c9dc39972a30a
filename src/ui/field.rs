use crate::app::state::{AppState, FocusTarget};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    target: FocusTarget,
    title: &str,
    placeholder: &str,
) {
    let Some(input) = state.field(target) else {
        return;
    };
    let focused = state.focus == target;

    let (border_style, title_style) = if focused {
        (Theme::border_focused(), Theme::title())
    } else {
        (Theme::border(), Theme::label())
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(title_style)
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if input.text.is_empty() && !placeholder.is_empty() {
        let paragraph = Paragraph::new(placeholder).style(Theme::placeholder());
        frame.render_widget(paragraph, inner);
    } else {
        let paragraph = Paragraph::new(input.text.as_str()).style(Theme::field_text());
        frame.render_widget(paragraph, inner);
    }

    if focused {
        // Cursor placed by display width of the text before it
        let before = &input.text[..input.cursor];
        let cursor_x = inner.x + before.width() as u16;
        let cursor_y = inner.y;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), cursor_y));
    }
}
