//! 模态输入行

use ratatui::{Frame, layout::Rect};

use super::widgets::InputField;
use crate::interfaces::tui::app::{App, CurrentScreen};

pub fn draw_input_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let Some(field) = app.current_screen.editing_field() else {
        return;
    };

    let placeholder = match app.current_screen {
        CurrentScreen::AddFolder => Some(format!("Enter = {}", app.resolve_default_folder())),
        CurrentScreen::MoveFolder => app
            .form
            .target
            .as_ref()
            .map(|target| format!("currently in {}", target.snapshot.folder)),
        _ => None,
    };

    let mut input = InputField::new(app.current_screen.prompt_label(), app.form.field(field))
        .active(true);
    if let Some(placeholder) = placeholder.as_deref() {
        input = input.placeholder(placeholder);
    }
    if app.current_screen.offers_folder_completion() {
        input = input.hint("Tab: complete");
    }
    input.render(frame, area);
}
