use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct FormLayout {
    pub title: Rect,
    pub first_name: Rect,
    pub last_name: Rect,
    pub date_of_birth: Rect,
    pub button: Rect,
    pub hint: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> FormLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Form content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Center the form in a fixed-width column
    let form_width = 48.min(content.width);
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(form_width),
            Constraint::Min(0),
        ])
        .split(content);

    let column = h_chunks[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Top margin
            Constraint::Length(1), // Title
            Constraint::Length(1), // Gap
            Constraint::Length(3), // First name
            Constraint::Length(3), // Last name
            Constraint::Length(3), // Date of birth
            Constraint::Length(1), // Gap
            Constraint::Length(3), // Calculate button
            Constraint::Length(1), // Format hint
            Constraint::Min(0),    // Remainder
        ])
        .split(column);

    FormLayout {
        title: rows[1],
        first_name: rows[3],
        last_name: rows[4],
        date_of_birth: rows[5],
        button: rows[7],
        hint: rows[8],
        status_bar,
    }
}
