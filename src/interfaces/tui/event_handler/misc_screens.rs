//! Delete confirmation, help and settings screen event handlers

use ratatui::crossterm::event::KeyCode;

use crate::errors::MarksError;
use crate::interfaces::tui::action::Action;
use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle delete confirm screen key events
pub fn handle_delete_confirm_screen(app: &mut App, key_code: KeyCode) -> Action {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            match app.commit_delete() {
                Ok(removed) => app.set_status(format!("Deleted '{}'.", removed.title)),
                Err(MarksError::IndexOutOfRange(_)) => {}
                Err(e) => app.set_error(e.format_simple()),
            }
            app.cancel_form();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_form(),
        _ => {}
    }
    Action::Noop
}

/// Any key leaves the help screen
pub fn handle_help_screen(app: &mut App, _key_code: KeyCode) -> Action {
    app.switch_screen(CurrentScreen::Browse);
    Action::Noop
}

/// Settings menu: `c` opens the accent picker, `q`/Esc go back
pub fn handle_settings_screen(app: &mut App, key_code: KeyCode) -> Action {
    match key_code {
        KeyCode::Char('c') | KeyCode::Char('C') => app.switch_screen(CurrentScreen::AccentPicker),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.switch_screen(CurrentScreen::Browse)
        }
        _ => {}
    }
    Action::Noop
}

/// Accent picker: j/k cycle, Enter or Space applies and persists
pub fn handle_accent_picker_screen(app: &mut App, key_code: KeyCode) -> Action {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.cycle_accent(false),
        KeyCode::Down | KeyCode::Char('j') => app.cycle_accent(true),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let name = app.apply_selected_accent();
            app.set_status(format!("Accent colour set to {}.", name));
            return Action::SaveAccent(name.to_string());
        }
        KeyCode::Esc => app.switch_screen(CurrentScreen::Settings),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.switch_screen(CurrentScreen::Browse),
        _ => {}
    }
    Action::Noop
}
