//! Browse screen event handler

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::action::Action;
use crate::interfaces::tui::app::{App, CurrentScreen, Focus};

/// Handle browse screen key events
pub fn handle_browse_screen(app: &mut App, key_code: KeyCode) -> Action {
    let detail_focus = app.focus == Focus::Detail;
    match key_code {
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Up | KeyCode::Char('k') if detail_focus => app.move_detail_up(),
        KeyCode::Down | KeyCode::Char('j') if detail_focus => app.move_detail_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Char('g') | KeyCode::Home => app.jump_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Char('a') => app.begin_add(),
        KeyCode::Char('e') if detail_focus => {
            app.begin_field_edit(app.detail_field());
        }
        KeyCode::Char('e') => {
            app.begin_edit();
        }
        KeyCode::Char('m') => {
            app.begin_move();
        }
        KeyCode::Char('d') => {
            app.begin_delete();
        }
        KeyCode::Char('f') => app.begin_filter_entry(),
        KeyCode::Char('/') => app.begin_search_entry(),
        KeyCode::Char('o') => {
            return match app.selected_bookmark().map(|b| b.url.clone()) {
                Some(url) => Action::OpenUrl(url),
                None => {
                    app.set_status("Nothing to open.");
                    Action::Noop
                }
            };
        }
        KeyCode::Esc if detail_focus => app.focus = Focus::List,
        KeyCode::Esc => {
            if app.view.is_filtered() {
                app.clear_view_filters();
                app.set_status("Filter and search cleared.");
            }
        }
        KeyCode::Char('?') => app.switch_screen(CurrentScreen::Help),
        KeyCode::Char('s') => app.open_settings(),
        KeyCode::Char('q') => {
            app.switch_screen(CurrentScreen::Quit);
            return Action::Quit;
        }
        _ => {}
    }
    Action::Noop
}
