//! List bookmarks command

use std::io::{self, Write};

use super::helpers::{format_list_line, load_store};
use crate::interfaces::cli::CliError;
use crate::storage::FileStorage;

/// Plain output, one line per record, suitable for piping into a launcher
pub fn list_bookmarks(storage: &FileStorage, include_note: bool) -> Result<(), CliError> {
    let store = load_store(storage)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for bookmark in store.all() {
        if let Err(e) = writeln!(out, "{}", format_list_line(bookmark, include_note)) {
            // Closed pipe (e.g. `marks list | head`)
            if e.kind() == io::ErrorKind::BrokenPipe {
                return Ok(());
            }
            return Err(CliError::CommandError(format!("Failed to write output: {}", e)));
        }
    }
    Ok(())
}
