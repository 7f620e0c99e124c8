//! Text-entry screen event handlers
//!
//! 添加、编辑、移动、过滤、搜索共用同一套输入处理，Enter 时按当前屏幕推进。

use ratatui::crossterm::event::KeyCode;

use crate::errors::MarksError;
use crate::interfaces::tui::action::Action;
use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::input_handler::{
    handle_backspace, handle_tab_completion, handle_text_input,
};

/// Handle key events on any text-entry screen
pub fn handle_text_entry_screen(app: &mut App, key_code: KeyCode) -> Action {
    match key_code {
        KeyCode::Char(c) => handle_text_input(app, c),
        KeyCode::Backspace => handle_backspace(app),
        KeyCode::Tab => handle_tab_completion(app),
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => commit_step(app),
        _ => {}
    }
    Action::Noop
}

fn commit_step(app: &mut App) {
    match app.current_screen {
        CurrentScreen::AddFolder => {
            if app.form.folder.trim().is_empty() {
                app.form.folder = app.resolve_default_folder();
            }
            app.switch_screen(CurrentScreen::AddTitle);
        }
        CurrentScreen::AddTitle => app.switch_screen(CurrentScreen::AddUrl),
        CurrentScreen::AddUrl => app.switch_screen(CurrentScreen::AddNote),
        CurrentScreen::AddNote => {
            match app.commit_add() {
                Ok(added) => app.set_status(format!(
                    "Added '{}' to {}.",
                    added.title, added.folder
                )),
                Err(e) => app.set_error(e.format_simple()),
            }
            app.cancel_form();
        }
        CurrentScreen::EditTitle if !app.form.single_field => {
            app.switch_screen(CurrentScreen::EditUrl)
        }
        CurrentScreen::EditUrl if !app.form.single_field => {
            app.switch_screen(CurrentScreen::EditNote)
        }
        CurrentScreen::EditTitle | CurrentScreen::EditUrl | CurrentScreen::EditNote => {
            match app.commit_edit() {
                Ok(()) => app.set_status("Bookmark updated."),
                Err(MarksError::IndexOutOfRange(_)) => {}
                Err(e) => app.set_error(e.format_simple()),
            }
            app.cancel_form();
        }
        CurrentScreen::MoveFolder => match app.commit_move() {
            Ok(folder) => {
                app.set_status(format!("Moved to {}.", folder));
                app.cancel_form();
            }
            // Blank folder: stay on the prompt
            Err(MarksError::Validation(msg)) => app.set_error(msg),
            Err(_) => app.cancel_form(),
        },
        CurrentScreen::FilterEntry => {
            app.apply_folder_filter();
            let message = match &app.view.folder_filter {
                Some(folder) => format!("Showing folder {}.", folder),
                None => "Folder filter cleared.".to_string(),
            };
            app.set_status(message);
            app.cancel_form();
        }
        CurrentScreen::SearchEntry => {
            app.apply_search_query();
            let message = match app.view.search_query {
                Some(_) => format!("{} matching bookmarks.", app.visible_len()),
                None => "Search cleared.".to_string(),
            };
            app.set_status(message);
            app.cancel_form();
        }
        CurrentScreen::Browse
        | CurrentScreen::DeleteConfirm
        | CurrentScreen::Help
        | CurrentScreen::Settings
        | CurrentScreen::AccentPicker
        | CurrentScreen::Quit => {}
    }
}
