use std::time::{Duration, Instant};

use crate::config::AppConfig;

/// Single-line text field contents plus a byte cursor. Every editing
/// operation leaves the cursor on a char boundary.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// The four tab stops of the form, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    FirstName,
    LastName,
    DateOfBirth,
    Calculate,
}

impl FocusTarget {
    pub fn next(self) -> Self {
        match self {
            FocusTarget::FirstName => FocusTarget::LastName,
            FocusTarget::LastName => FocusTarget::DateOfBirth,
            FocusTarget::DateOfBirth => FocusTarget::Calculate,
            FocusTarget::Calculate => FocusTarget::FirstName,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusTarget::FirstName => FocusTarget::Calculate,
            FocusTarget::LastName => FocusTarget::FirstName,
            FocusTarget::DateOfBirth => FocusTarget::LastName,
            FocusTarget::Calculate => FocusTarget::DateOfBirth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification. Cleared by the tick handler once `expires_at`
/// passes; nothing is recorded about what was shown.
#[derive(Debug)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

pub struct AppState {
    pub config: AppConfig,
    pub first_name: InputState,
    pub last_name: InputState,
    pub date_of_birth: InputState,
    pub focus: FocusTarget,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            first_name: InputState::new(),
            last_name: InputState::new(),
            date_of_birth: InputState::new(),
            focus: FocusTarget::FirstName,
            toast: None,
            should_quit: false,
            dirty: true,
        }
    }

    /// The field behind a tab stop; `None` for the button.
    pub fn field(&self, target: FocusTarget) -> Option<&InputState> {
        match target {
            FocusTarget::FirstName => Some(&self.first_name),
            FocusTarget::LastName => Some(&self.last_name),
            FocusTarget::DateOfBirth => Some(&self.date_of_birth),
            FocusTarget::Calculate => None,
        }
    }

    pub fn field_mut(&mut self, target: FocusTarget) -> Option<&mut InputState> {
        match target {
            FocusTarget::FirstName => Some(&mut self.first_name),
            FocusTarget::LastName => Some(&mut self.last_name),
            FocusTarget::DateOfBirth => Some(&mut self.date_of_birth),
            FocusTarget::Calculate => None,
        }
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut InputState> {
        self.field_mut(self.focus)
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = self.focus.prev();
        self.dirty = true;
    }

    pub fn show_toast(&mut self, text: String, kind: ToastKind) {
        let ttl = Duration::from_secs(self.config.ui.toast_duration_secs);
        self.toast = Some(Toast {
            text,
            kind,
            expires_at: Instant::now() + ttl,
        });
        self.dirty = true;
    }

    /// Drop the toast once its deadline has passed.
    pub fn expire_toast(&mut self) {
        if let Some(toast) = &self.toast {
            if Instant::now() >= toast.expires_at {
                self.toast = None;
                self.dirty = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_keeps_char_boundaries() {
        let mut input = InputState::new();
        for c in "Renée".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text, "Renée");
        input.delete_back();
        assert_eq!(input.text, "Ren\u{e9}");
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "Re\u{e9}");
        input.move_end();
        input.delete_forward();
        assert_eq!(input.text, "Re\u{e9}");
    }

    #[test]
    fn delete_word_back_stops_at_spaces() {
        let mut input = InputState::new();
        for c in "Mary Jane".chars() {
            input.insert_char(c);
        }
        input.delete_word_back();
        assert_eq!(input.text, "Mary ");
        input.delete_word_back();
        assert_eq!(input.text, "");
    }

    #[test]
    fn focus_cycle_wraps_both_ways() {
        let mut target = FocusTarget::FirstName;
        for _ in 0..4 {
            target = target.next();
        }
        assert_eq!(target, FocusTarget::FirstName);
        assert_eq!(FocusTarget::FirstName.prev(), FocusTarget::Calculate);
        assert_eq!(FocusTarget::Calculate.next(), FocusTarget::FirstName);
    }
}
