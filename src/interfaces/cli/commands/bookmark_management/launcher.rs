//! Launcher command: choose a bookmark in rofi (or any dmenu-style tool) and open it

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use super::helpers::{format_list_line, load_store, parse_launcher_choice};
use crate::config::LauncherConfig;
use crate::interfaces::cli::CliError;
use crate::storage::{Bookmark, FileStorage};
use crate::utils::UrlOpener;

/// Lines offered to the launcher. Records without a URL are left out.
pub fn launcher_entries(bookmarks: &[Bookmark]) -> Vec<String> {
    bookmarks
        .iter()
        .filter(|b| !b.url.trim().is_empty())
        .map(|b| format_list_line(b, false))
        .collect()
}

pub fn run_launcher(
    storage: &FileStorage,
    launcher: &LauncherConfig,
    opener: &dyn UrlOpener,
) -> Result<(), CliError> {
    if which::which(&launcher.command).is_err() {
        return Err(CliError::InputError(format!(
            "{} not found. Install it or pipe `marks list` into your launcher.",
            launcher.command
        )));
    }

    let store = load_store(storage)?;
    let entries = launcher_entries(store.all());
    if entries.is_empty() {
        return Err(CliError::CommandError("No bookmarks to show.".to_string()));
    }

    let choice = choose(launcher, &entries)?;
    if choice.trim().is_empty() {
        return Err(CliError::Cancelled);
    }

    let url = parse_launcher_choice(&choice)
        .ok_or_else(|| CliError::InputError("Selected entry missing URL.".to_string()))?;
    info!("Opening {} from launcher", url);
    opener.open(&url)?;
    Ok(())
}

/// Pipe the entries into the launcher and return its stdout.
fn choose(launcher: &LauncherConfig, entries: &[String]) -> Result<String, CliError> {
    debug!("Running {} {:?}", launcher.command, launcher.args);
    let spawn_error =
        |e: std::io::Error| CliError::CommandError(format!("Failed to run {}: {}", launcher.command, e));

    let mut child = Command::new(&launcher.command)
        .args(&launcher.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(spawn_error)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(entries.join("\n").as_bytes())
            .map_err(spawn_error)?;
    }

    let output = child.wait_with_output().map_err(spawn_error)?;
    if !output.status.success() {
        return Err(CliError::Cancelled);
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
