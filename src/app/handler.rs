use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => {
            state.expire_toast();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::Esc {
        return vec![Action::Quit];
    }

    // Ctrl+Enter submits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Enter {
        return vec![Action::Submit];
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.cycle_focus_back();
            vec![]
        }
        KeyCode::Enter => {
            if state.focus == FocusTarget::Calculate {
                vec![Action::Submit]
            } else {
                // Enter in a field advances to the next tab stop
                state.cycle_focus();
                vec![]
            }
        }
        _ => handle_field_key(state, key),
    }
}

fn handle_field_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(field) = state.focused_field_mut() else {
        return vec![];
    };
    match key.code {
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            field.delete_word_back()
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => field.clear(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            field.insert_char(c)
        }
        KeyCode::Backspace => field.delete_back(),
        KeyCode::Delete => field.delete_forward(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    #[test]
    fn tab_cycles_through_fields_and_button() {
        let mut state = state();
        assert_eq!(state.focus, FocusTarget::FirstName);
        handle_event(&mut state, press(KeyCode::Tab));
        assert_eq!(state.focus, FocusTarget::LastName);
        handle_event(&mut state, press(KeyCode::Tab));
        handle_event(&mut state, press(KeyCode::Tab));
        assert_eq!(state.focus, FocusTarget::Calculate);
        handle_event(&mut state, press(KeyCode::Tab));
        assert_eq!(state.focus, FocusTarget::FirstName);
        handle_event(&mut state, press(KeyCode::BackTab));
        assert_eq!(state.focus, FocusTarget::Calculate);
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut state = state();
        handle_event(&mut state, press(KeyCode::Char('J')));
        handle_event(&mut state, press(KeyCode::Char('o')));
        assert_eq!(state.first_name.text, "Jo");
        handle_event(&mut state, press(KeyCode::Tab));
        handle_event(&mut state, press(KeyCode::Char('D')));
        assert_eq!(state.last_name.text, "D");
        handle_event(&mut state, press(KeyCode::Backspace));
        assert_eq!(state.last_name.text, "");
    }

    #[test]
    fn typing_on_the_button_is_ignored() {
        let mut state = state();
        state.focus = FocusTarget::Calculate;
        let actions = handle_event(&mut state, press(KeyCode::Char('x')));
        assert!(actions.is_empty());
        assert_eq!(state.first_name.text, "");
    }

    #[test]
    fn enter_advances_fields_and_fires_the_button() {
        let mut state = state();
        assert!(handle_event(&mut state, press(KeyCode::Enter)).is_empty());
        assert_eq!(state.focus, FocusTarget::LastName);
        state.focus = FocusTarget::Calculate;
        let actions = handle_event(&mut state, press(KeyCode::Enter));
        assert_eq!(actions, vec![Action::Submit]);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, press(KeyCode::Esc)), vec![Action::Quit]);
        assert_eq!(handle_event(&mut state, ctrl('c')), vec![Action::Quit]);
    }

    #[test]
    fn ctrl_u_clears_the_focused_field() {
        let mut state = state();
        handle_event(&mut state, press(KeyCode::Char('J')));
        handle_event(&mut state, ctrl('u'));
        assert_eq!(state.first_name.text, "");
    }

    #[test]
    fn tick_expires_the_toast() {
        let mut state = state();
        state.config.ui.toast_duration_secs = 0;
        state.show_toast("done".to_string(), ToastKind::Success);
        assert!(state.toast.is_some());
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.toast.is_none());
    }
}
