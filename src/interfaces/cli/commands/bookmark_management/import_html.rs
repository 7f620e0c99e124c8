//! Import bookmarks from a browser-exported HTML file

use std::path::Path;

use tracing::info;

use super::helpers::{announce, load_store, save_store};
use crate::interfaces::cli::CliError;
use crate::storage::FileStorage;
use crate::utils::html_import::import_bookmarks_file;

pub fn import_html(storage: &FileStorage, source: &Path, notify: bool) -> Result<(), CliError> {
    if !source.exists() {
        return Err(CliError::InputError(format!(
            "file not found: {}",
            source.display()
        )));
    }

    let imported = import_bookmarks_file(source)?;
    if imported.is_empty() {
        return Err(CliError::CommandError(
            "No bookmarks found in the HTML file.".to_string(),
        ));
    }

    let mut store = load_store(storage)?;
    let outcome = store.extend_validated(imported);
    save_store(storage, &store)?;

    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());
    info!(
        "Imported {} bookmarks from {} ({} skipped)",
        outcome.added, name, outcome.skipped
    );

    let mut message = format!("Imported {} bookmarks from {}.", outcome.added, name);
    if outcome.skipped > 0 {
        message.push_str(&format!(" Skipped {} invalid entries.", outcome.skipped));
    }
    announce(&message, notify);
    Ok(())
}
