//! Accent colour settings

use super::state::{App, CurrentScreen};
use crate::interfaces::tui::constants::ACCENT_CHOICES;

impl App {
    /// Open the settings menu with the current accent highlighted.
    pub fn open_settings(&mut self) {
        self.accent_selected = ACCENT_CHOICES
            .iter()
            .position(|(_, color)| *color == self.accent)
            .unwrap_or(0);
        self.switch_screen(CurrentScreen::Settings);
    }

    pub fn cycle_accent(&mut self, forward: bool) {
        let len = ACCENT_CHOICES.len();
        self.accent_selected = if forward {
            (self.accent_selected + 1) % len
        } else {
            (self.accent_selected + len - 1) % len
        };
    }

    /// Applies the highlighted colour and returns its config name.
    pub fn apply_selected_accent(&mut self) -> &'static str {
        let (name, color) = ACCENT_CHOICES[self.accent_selected % ACCENT_CHOICES.len()];
        self.accent = color;
        name
    }
}
