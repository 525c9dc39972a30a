use crate::app::state::{AppState, ToastKind};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Floating overlay near the bottom of the screen. Drawn after the form so
/// it sits on top; disappears when the tick handler expires it.
pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(toast) = &state.toast else {
        return;
    };

    let area = frame.area();
    if area.height < 7 || area.width < 12 {
        return;
    }

    let text_width = toast.text.as_str().width() as u16;
    let popup_w = (text_width + 4).max(20).min(area.width.saturating_sub(4));
    let popup_h = 3;
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = area.height.saturating_sub(popup_h + 2);
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let style = match toast.kind {
        ToastKind::Success => Theme::toast_success(),
        ToastKind::Error => Theme::toast_error(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let line = Line::from(Span::styled(toast.text.as_str(), style)).centered();
    frame.render_widget(Paragraph::new(line), inner);
}
