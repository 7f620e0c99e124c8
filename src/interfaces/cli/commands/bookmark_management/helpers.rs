//! Helper functions for bookmark CLI commands

use std::process::{Command, Stdio};

use colored::Colorize;
use tracing::{debug, warn};

use crate::interfaces::cli::CliError;
use crate::storage::{Bookmark, BookmarkStore, FileStorage};
use crate::utils::single_line;

const NOTIFY_COMMAND: &str = "notify-send";

/// Load the collection. A malformed file is an error here, unlike the TUI.
pub fn load_store(storage: &FileStorage) -> Result<BookmarkStore, CliError> {
    let bookmarks = storage.load()?;
    Ok(BookmarkStore::from_bookmarks(bookmarks))
}

pub fn save_store(storage: &FileStorage, store: &BookmarkStore) -> Result<(), CliError> {
    storage.save(store.all())?;
    Ok(())
}

/// `[folder] title - url`, with ` | note` when requested and non-empty
pub fn format_list_line(bookmark: &Bookmark, include_note: bool) -> String {
    let folder = single_line(&bookmark.folder);
    let mut line = format!(
        "[{}] {} - {}",
        folder.trim(),
        single_line(&bookmark.title).trim(),
        single_line(&bookmark.url).trim()
    );
    if include_note {
        let note = single_line(&bookmark.note);
        if !note.trim().is_empty() {
            line = format!("{} | {}", line, note.trim());
        }
    }
    line.trim().to_string()
}

/// Extract the URL from a line chosen in the launcher.
///
/// The URL is the text after the last " - ". Returns `None` when nothing
/// usable remains.
pub fn parse_launcher_choice(choice: &str) -> Option<String> {
    let choice = choice.trim();
    let url = match choice.rsplit_once(" - ") {
        Some((_, url)) => url,
        None => choice,
    };
    let url = url.trim();
    (!url.is_empty()).then(|| url.to_string())
}

/// Confirm an action through `notify-send` when enabled and available,
/// otherwise on stdout.
pub fn announce(message: &str, notify: bool) {
    if notify && which::which(NOTIFY_COMMAND).is_ok() {
        debug!("Sending desktop notification: {}", message);
        let status = Command::new(NOTIFY_COMMAND)
            .args(["marks", message])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(_) => return,
            Err(e) => warn!("{} failed: {}", NOTIFY_COMMAND, e),
        }
    }
    println!("{} {}", "✓".bold().green(), message);
}
