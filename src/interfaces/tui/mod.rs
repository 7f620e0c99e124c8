//! Terminal User Interface (TUI) module
//!
//! Provides the interactive terminal interface for browsing and editing bookmarks

use std::io::{self, Stderr};
use std::time::{Duration, Instant};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{debug, info, warn};

pub mod action;
pub mod app;
pub mod constants;
pub mod event_handler;
mod input_handler;
mod ui;

pub use action::Action;
pub use app::App;
pub use event_handler::handle_key_event;

use crate::config::PreferenceStore;
use crate::errors::{MarksError, Result};
use crate::utils::UrlOpener;
use ui::ui;

type TuiTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI until the user quits.
///
/// The terminal is always restored, even when the loop fails. Saving is the
/// caller's job.
pub fn run_tui(
    app: &mut App,
    opener: &dyn UrlOpener,
    prefs: &dyn PreferenceStore,
    tick_rate: Duration,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode().map_err(terminal_error)?;
    let mut stderr = io::stderr();
    if let Err(e) = execute!(stderr, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(terminal_error(e));
    }
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal(None);
            return Err(terminal_error(e));
        }
    };

    info!("TUI started with {} bookmarks", app.store.len());
    let res = run_app(&mut terminal, app, opener, prefs, tick_rate);

    // Restore terminal
    restore_terminal(Some(&mut terminal));
    info!("TUI stopped");

    res
}

fn restore_terminal(terminal: Option<&mut TuiTerminal>) {
    if let Err(e) = disable_raw_mode() {
        warn!("Failed to disable raw mode: {}", e);
    }
    match terminal {
        Some(terminal) => {
            if let Err(e) = execute!(terminal.backend_mut(), LeaveAlternateScreen) {
                warn!("Failed to leave alternate screen: {}", e);
            }
            if let Err(e) = terminal.show_cursor() {
                warn!("Failed to show cursor: {}", e);
            }
        }
        None => {
            let _ = execute!(io::stderr(), LeaveAlternateScreen);
        }
    }
}

/// Main application loop
fn run_app(
    terminal: &mut TuiTerminal,
    app: &mut App,
    opener: &dyn UrlOpener,
    prefs: &dyn PreferenceStore,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        app.expire_messages(Instant::now());

        // Render UI
        terminal
            .draw(|f| ui(f, app))
            .map_err(terminal_error)?;

        if !event::poll(tick_rate).map_err(terminal_error)? {
            continue;
        }

        // Handle events
        let Event::Key(key) = event::read().map_err(terminal_error)? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_key_event(app, key) {
            Action::OpenUrl(url) => open_url(app, opener, &url),
            Action::SaveAccent(name) => save_accent(app, prefs, &name),
            action if action.should_quit() => return Ok(()),
            _ => {}
        }
        if !app.is_running() {
            return Ok(());
        }
    }
}

fn open_url(app: &mut App, opener: &dyn UrlOpener, url: &str) {
    debug!("Opening {}", url);
    match opener.open(url) {
        Ok(()) => app.set_status(format!("Opened {}", url)),
        Err(e) => {
            warn!("{}", e);
            app.set_error(e.format_simple());
        }
    }
}

fn save_accent(app: &mut App, prefs: &dyn PreferenceStore, name: &str) {
    if let Err(e) = prefs.save_accent_color(name) {
        warn!("Failed to save accent colour: {}", e);
        app.set_error(format!("Accent applied but not saved: {}", e.message()));
    }
}

fn terminal_error(e: io::Error) -> MarksError {
    MarksError::terminal(e.to_string())
}
