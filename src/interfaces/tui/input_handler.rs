//! Input handling utilities
//!
//! Provides unified input handling for the text-entry screens

use super::app::App;

/// Handle text character input
pub fn handle_text_input(app: &mut App, c: char) {
    if let Some(field) = app.current_screen.editing_field() {
        app.form.field_mut(field).push(c);
    }
}

/// Handle backspace input
pub fn handle_backspace(app: &mut App) {
    if let Some(field) = app.current_screen.editing_field() {
        app.form.field_mut(field).pop();
    }
}

/// Clear the whole field (Ctrl-U)
pub fn handle_clear_field(app: &mut App) {
    if let Some(field) = app.current_screen.editing_field() {
        app.form.field_mut(field).clear();
    }
}

/// Handle tab key: cycle folder completion
pub fn handle_tab_completion(app: &mut App) {
    if !app.current_screen.offers_folder_completion() {
        return;
    }
    let Some(field) = app.current_screen.editing_field() else {
        return;
    };
    let folders = app.store.folders();
    if let Some(next) = next_completion(&folders, app.form.field(field)) {
        *app.form.field_mut(field) = next;
    }
}

/// The next folder after `current` when it is an exact option, otherwise the
/// first option starting with `current` (case-insensitive), otherwise the
/// first option.
pub fn next_completion(options: &[String], current: &str) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    if let Some(pos) = options.iter().position(|o| o == current) {
        return Some(options[(pos + 1) % options.len()].clone());
    }
    let prefix = current.trim().to_lowercase();
    options
        .iter()
        .find(|o| o.to_lowercase().starts_with(&prefix))
        .or_else(|| options.first())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["Work".into(), "Reading".into(), "Recipes".into()]
    }

    #[test]
    fn test_completion_prefix_then_cycle() {
        let opts = options();
        assert_eq!(next_completion(&opts, "re").as_deref(), Some("Reading"));
        assert_eq!(next_completion(&opts, "Reading").as_deref(), Some("Recipes"));
        assert_eq!(next_completion(&opts, "Recipes").as_deref(), Some("Work"));
    }

    #[test]
    fn test_completion_without_match_starts_over() {
        let opts = options();
        assert_eq!(next_completion(&opts, "zzz").as_deref(), Some("Work"));
        assert_eq!(next_completion(&opts, "").as_deref(), Some("Work"));
        assert_eq!(next_completion(&[], "Work"), None);
    }
}
