//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - CLI mode (single-shot commands)
//! - TUI mode (interactive terminal UI)

pub mod cli;
pub mod tui;

// Re-export mode functions for convenience
pub use cli::run_cli;
pub use tui::run_tui;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Cli,
    Tui,
}

/// Detect which mode to run from the parsed subcommand
///
/// No subcommand or `tui` starts the TUI; everything else is a CLI command.
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        None | Some(Commands::Tui) => Mode::Tui,
        Some(_) => Mode::Cli,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_mode() {
        assert_eq!(detect_mode(None), Mode::Tui);
        assert_eq!(detect_mode(Some(&Commands::Tui)), Mode::Tui);
        assert_eq!(
            detect_mode(Some(&Commands::List {
                include_note: false
            })),
            Mode::Cli
        );
        assert_eq!(detect_mode(Some(&Commands::Launcher)), Mode::Cli);
    }
}
