//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - browse_screen: Browse
//! - form_screens: AddFolder..AddNote, EditTitle..EditNote, MoveFolder,
//!   FilterEntry, SearchEntry
//! - misc_screens: DeleteConfirm, Help, Settings, AccentPicker

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action::Action;
use super::app::{App, CurrentScreen};
use super::input_handler;

mod browse_screen;
mod form_screens;
mod misc_screens;

use browse_screen::*;
use form_screens::*;
use misc_screens::*;

/// Handle keyboard input based on current screen
///
/// Ctrl-C cancels modal screens and quits from Browse. Ctrl-U clears the
/// field being edited. Other control chords and all Alt chords are ignored.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return Action::Noop;
    }
    let key_code = if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') if app.current_screen == CurrentScreen::Browse => KeyCode::Char('q'),
            KeyCode::Char('c') => KeyCode::Esc,
            KeyCode::Char('u') => {
                input_handler::handle_clear_field(app);
                return Action::Noop;
            }
            _ => return Action::Noop,
        }
    } else {
        key.code
    };

    match app.current_screen {
        CurrentScreen::Browse => handle_browse_screen(app, key_code),
        CurrentScreen::AddFolder
        | CurrentScreen::AddTitle
        | CurrentScreen::AddUrl
        | CurrentScreen::AddNote
        | CurrentScreen::EditTitle
        | CurrentScreen::EditUrl
        | CurrentScreen::EditNote
        | CurrentScreen::MoveFolder
        | CurrentScreen::FilterEntry
        | CurrentScreen::SearchEntry => handle_text_entry_screen(app, key_code),
        CurrentScreen::DeleteConfirm => handle_delete_confirm_screen(app, key_code),
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Settings => handle_settings_screen(app, key_code),
        CurrentScreen::AccentPicker => handle_accent_picker_screen(app, key_code),
        CurrentScreen::Quit => Action::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::tui::app::{EditingField, Focus};
    use crate::storage::{Bookmark, BookmarkStore};

    fn bookmark(folder: &str, title: &str, url: &str) -> Bookmark {
        Bookmark::new(folder, title, url, "").unwrap()
    }

    fn app_with(bookmarks: Vec<Bookmark>) -> App {
        App::new(BookmarkStore::from_bookmarks(bookmarks), "General")
    }

    fn press(app: &mut App, code: KeyCode) -> Action {
        handle_key_event(app, KeyEvent::from(code))
    }

    fn ctrl(app: &mut App, c: char) -> Action {
        handle_key_event(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_flow_appends_record() {
        let mut app = app_with(vec![bookmark("F", "A", "u1")]);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.current_screen, CurrentScreen::AddFolder);
        type_text(&mut app, "G");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "B");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "u2");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen, CurrentScreen::AddNote);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.current_screen, CurrentScreen::Browse);
        assert_eq!(
            app.store.all(),
            &[bookmark("F", "A", "u1"), bookmark("G", "B", "u2")]
        );
        assert_eq!(app.cursor.selected(), Some(0));
        assert_eq!(app.form, Default::default());
    }

    #[test]
    fn test_filter_bottom_then_delete_last_visible() {
        let mut app = app_with(vec![bookmark("F", "one", "u1"), bookmark("G", "two", "u2")]);
        press(&mut app, KeyCode::Char('f'));
        type_text(&mut app, "F");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.visible_indices(), &[0]);

        press(&mut app, KeyCode::Char('G'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor.selected(), Some(0));

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.current_screen, CurrentScreen::DeleteConfirm);
        press(&mut app, KeyCode::Char('y'));

        assert_eq!(app.visible_len(), 0);
        assert_eq!(app.cursor.selected(), None);
        assert_eq!(app.store.all(), &[bookmark("G", "two", "u2")]);
    }

    #[test]
    fn test_search_matches_url_substring() {
        let mut app = app_with(vec![bookmark("F", "first", "u1"), bookmark("F", "second", "turl2x")]);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "URL2");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view.search_query.as_deref(), Some("URL2"));
        assert_eq!(app.visible_indices(), &[1]);
    }

    #[test]
    fn test_stale_edit_target_is_a_no_op() {
        let mut app = app_with(vec![bookmark("F", "A", "u1")]);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.current_screen, CurrentScreen::EditTitle);
        if let Some(target) = app.form.target.as_mut() {
            target.index = 99;
        }
        type_text(&mut app, "!");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.current_screen, CurrentScreen::Browse);
        assert_eq!(app.store.all(), &[bookmark("F", "A", "u1")]);
        assert!(app.error_message.is_empty());
    }

    #[test]
    fn test_edit_updates_selected_record() {
        let mut app = app_with(vec![bookmark("F", "A", "u1"), bookmark("F", "B", "u2")]);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.form.title, "B");
        type_text(&mut app, "2");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'u');
        type_text(&mut app, "https://b2");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "note");
        press(&mut app, KeyCode::Enter);

        let updated = app.store.get(1).unwrap();
        assert_eq!(updated.title, "B2");
        assert_eq!(updated.url, "https://b2");
        assert_eq!(updated.note, "note");
        assert_eq!(updated.folder, "F");
    }

    #[test]
    fn test_add_with_empty_folder_uses_default() {
        let mut app = app_with(vec![]);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form.folder, "General");
        type_text(&mut app, "T");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "https://t");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.get(0).unwrap().folder, "General");
        assert_eq!(app.last_folder.as_deref(), Some("General"));
        assert_eq!(app.cursor.selected(), Some(0));
    }

    #[test]
    fn test_add_validation_failure_returns_to_browse() {
        let mut app = app_with(vec![]);
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Work");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen, CurrentScreen::Browse);
        assert!(app.store.is_empty());
        assert!(app.error_message.contains("Title is required"));
    }

    #[test]
    fn test_move_rejects_empty_and_stays() {
        let mut app = app_with(vec![bookmark("F", "A", "u1")]);
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.form.folder, "F");
        ctrl(&mut app, 'u');
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen, CurrentScreen::MoveFolder);
        assert!(!app.error_message.is_empty());

        type_text(&mut app, " Archive ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen, CurrentScreen::Browse);
        assert_eq!(app.store.get(0).unwrap().folder, "Archive");
    }

    #[test]
    fn test_tab_completes_folder() {
        let mut app = app_with(vec![bookmark("Work", "A", "u1"), bookmark("Reading", "B", "u2")]);
        press(&mut app, KeyCode::Char('f'));
        type_text(&mut app, "re");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.form.query, "Reading");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.form.query, "Work");
    }

    #[test]
    fn test_search_draft_preview_and_cancel() {
        let mut app = app_with(vec![bookmark("F", "alpha", "u1"), bookmark("F", "beta", "u2")]);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "bet");
        assert_eq!(app.display_rows().len(), 1);
        assert_eq!(app.view.search_query, None);

        ctrl(&mut app, 'c');
        assert_eq!(app.current_screen, CurrentScreen::Browse);
        assert_eq!(app.view.search_query, None);
        assert_eq!(app.visible_len(), 2);
    }

    #[test]
    fn test_escape_clears_filter_and_query() {
        let mut app = app_with(vec![bookmark("F", "alpha", "u1"), bookmark("G", "beta", "u2")]);
        press(&mut app, KeyCode::Char('f'));
        type_text(&mut app, "F");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "alp");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.visible_len(), 1);

        press(&mut app, KeyCode::Esc);
        assert!(!app.view.is_filtered());
        assert_eq!(app.visible_len(), 2);
    }

    #[test]
    fn test_delete_confirm_keys() {
        let mut app = app_with(vec![bookmark("F", "A", "u1")]);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.current_screen, CurrentScreen::DeleteConfirm);
        press(&mut app, KeyCode::Char('N'));
        assert_eq!(app.current_screen, CurrentScreen::Browse);
        assert_eq!(app.store.len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn test_selection_keys_are_no_ops_when_empty() {
        let mut app = app_with(vec![]);
        for key in ['e', 'm', 'd'] {
            press(&mut app, KeyCode::Char(key));
            assert_eq!(app.current_screen, CurrentScreen::Browse);
        }
        assert_eq!(press(&mut app, KeyCode::Char('o')), Action::Noop);
        assert_eq!(app.status_message, "Nothing to open.");
    }

    #[test]
    fn test_open_quit_and_help() {
        let mut app = app_with(vec![bookmark("F", "A", "https://a")]);
        assert_eq!(
            press(&mut app, KeyCode::Char('o')),
            Action::OpenUrl("https://a".to_string())
        );
        assert_eq!(app.current_screen, CurrentScreen::Browse);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.current_screen, CurrentScreen::Help);
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.current_screen, CurrentScreen::Browse);

        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
        assert!(!app.is_running());
    }

    #[test]
    fn test_ctrl_c_in_browse_quits() {
        let mut app = app_with(vec![]);
        assert!(ctrl(&mut app, 'c').should_quit());
    }

    fn alt(app: &mut App, c: char) -> Action {
        handle_key_event(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT))
    }

    #[test]
    fn test_alt_chords_are_ignored() {
        let mut app = app_with(vec![bookmark("F", "A", "u1")]);
        assert_eq!(alt(&mut app, 'q'), Action::Noop);
        assert!(app.is_running());
        alt(&mut app, 'd');
        assert_eq!(app.current_screen, CurrentScreen::Browse);

        press(&mut app, KeyCode::Char('/'));
        alt(&mut app, 'x');
        assert_eq!(app.form.query, "");
    }

    #[test]
    fn test_detail_focus_edits_single_field() {
        let mut app = app_with(vec![bookmark("F", "A", "u1"), bookmark("F", "B", "u2")]);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Detail);

        // j/k now move between fields, not rows
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor.selected(), Some(1));
        assert_eq!(app.detail_field(), EditingField::Url);

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.current_screen, CurrentScreen::EditUrl);
        ctrl(&mut app, 'u');
        type_text(&mut app, "https://b");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.current_screen, CurrentScreen::Browse);
        assert_eq!(app.store.get(1).unwrap(), &bookmark("F", "B", "https://b"));
        assert_eq!(app.store.get(0).unwrap(), &bookmark("F", "A", "u1"));
    }

    #[test]
    fn test_detail_focus_folder_field_moves() {
        let mut app = app_with(vec![bookmark("F", "A", "u1")]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.detail_field(), EditingField::Folder);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.current_screen, CurrentScreen::MoveFolder);
        ctrl(&mut app, 'u');
        type_text(&mut app, "G");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.get(0).unwrap().folder, "G");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_detail_field_edit_with_empty_title_is_rejected() {
        let mut app = app_with(vec![bookmark("F", "A", "u1")]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.current_screen, CurrentScreen::EditTitle);
        ctrl(&mut app, 'u');
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.current_screen, CurrentScreen::Browse);
        assert_eq!(app.store.get(0).unwrap().title, "A");
        assert!(!app.error_message.is_empty());
    }

    #[test]
    fn test_tab_needs_a_selection() {
        let mut app = app_with(vec![]);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_settings_accent_picker_cycles_and_applies() {
        let mut app = app_with(vec![]);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.current_screen, CurrentScreen::Settings);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.current_screen, CurrentScreen::Settings);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.current_screen, CurrentScreen::AccentPicker);

        // cyan -> white -> red
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        assert_eq!(
            press(&mut app, KeyCode::Char(' ')),
            Action::SaveAccent("red".to_string())
        );
        assert_eq!(app.accent, ratatui::style::Color::Red);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.current_screen, CurrentScreen::Settings);
        ctrl(&mut app, 'c');
        assert_eq!(app.current_screen, CurrentScreen::Browse);
        assert!(app.is_running());
    }
}
