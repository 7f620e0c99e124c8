//! User interfaces: single-shot CLI commands and the interactive TUI

pub mod cli;
pub mod tui;
