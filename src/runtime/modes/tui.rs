//! TUI mode
//!
//! This module contains the TUI (Terminal User Interface) mode startup logic.
//! It loads the collection, runs the interactive session and saves on exit.

use std::str::FromStr;
use std::time::Duration;

use ratatui::style::Color;
use tracing::warn;

use crate::config::{ConfigFilePreferences, StaticConfig};
use crate::errors::Result;
use crate::interfaces::tui::{self, App, constants::colors};
use crate::runtime::lifetime::{shutdown, startup};
use crate::utils::SystemOpener;

/// Run TUI mode
///
/// This function:
/// 1. Loads the collection (a load failure starts an empty session)
/// 2. Runs the interactive session
/// 3. Saves the collection, even when the session ended with an error
pub fn run_tui(config: &StaticConfig) -> Result<()> {
    let ctx = startup::prepare_tui_startup(config);

    let mut app = App::new(ctx.store, config.storage.default_folder.clone())
        .with_status_timeout(Duration::from_secs(config.ui.status_timeout_secs))
        .with_accent(parse_accent(&config.ui.accent_color));
    if let Some(e) = &ctx.load_error {
        app.set_error(e.format_simple());
    }

    let opener = SystemOpener::new(config.opener.command.clone());
    let prefs = ConfigFilePreferences::for_config(config);
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let session = tui::run_tui(&mut app, &opener, &prefs, tick_rate);

    let saved = shutdown::save_on_exit(&ctx.storage, &app.store);
    session.and(saved)
}

fn parse_accent(name: &str) -> Color {
    Color::from_str(name.trim()).unwrap_or_else(|_| {
        warn!("Unknown ui.accent_color '{}', using default", name);
        colors::PRIMARY
    })
}
