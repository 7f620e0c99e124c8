// UI submodules
mod common;
mod delete_confirm;
mod detail_panel;
mod help;
mod input_prompt;
mod main_screen;
mod settings;
pub mod widgets;

// Re-export common utilities
pub use common::{draw_footer, draw_status_bar, draw_title_bar};

// Re-export screen drawing functions
pub use delete_confirm::draw_delete_confirm_screen;
pub use detail_panel::draw_detail_panel;
pub use help::draw_help_screen;
pub use input_prompt::draw_input_prompt;
pub use main_screen::draw_main_screen;
pub use settings::draw_settings_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    // The input line only takes space while a text-entry screen is active
    let prompt_height = if app.current_screen.is_text_entry() { 3 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title
            Constraint::Min(6),                // Main content
            Constraint::Length(prompt_height), // Input prompt
            Constraint::Length(3),             // Status
            Constraint::Length(2),             // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    // Dual-panel layout: list on the left, details on the right
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left: bookmark list
            Constraint::Percentage(40), // Right: detail panel
        ])
        .split(main_chunks[1]);

    draw_main_screen(frame, app, content_chunks[0]);
    draw_detail_panel(frame, app, content_chunks[1]);

    if prompt_height > 0 {
        draw_input_prompt(frame, app, main_chunks[2]);
    }

    draw_status_bar(frame, app, main_chunks[3]);
    draw_footer(frame, app, main_chunks[4]);

    // Overlays
    match app.current_screen {
        CurrentScreen::DeleteConfirm => draw_delete_confirm_screen(frame, app, main_chunks[1]),
        CurrentScreen::Help => draw_help_screen(frame, main_chunks[1]),
        CurrentScreen::Settings | CurrentScreen::AccentPicker => {
            draw_settings_screen(frame, app, main_chunks[1])
        }
        _ => {}
    }
}
