use std::path::PathBuf;

use tracing::error;

use crate::config::{StaticConfig, default_data_dir};
use crate::errors::MarksError;
use crate::storage::{BookmarkStore, FileStorage};
use crate::system::logging::LogSink;

/// TUI log file name, placed next to the data file
const TUI_LOG_FILE: &str = "marks.log";

pub struct StartupContext {
    pub storage: FileStorage,
    pub store: BookmarkStore,
    /// Set when the data file could not be read; the session starts empty.
    pub load_error: Option<MarksError>,
}

/// Load the collection for an interactive session.
///
/// A load failure does not abort the session. The data file is only
/// overwritten if the session saves on quit.
pub fn prepare_tui_startup(config: &StaticConfig) -> StartupContext {
    let storage = FileStorage::new(&config.storage.data_file);

    match storage.load() {
        Ok(bookmarks) => StartupContext {
            storage,
            store: BookmarkStore::from_bookmarks(bookmarks),
            load_error: None,
        },
        Err(e) => {
            error!("Starting with an empty collection: {}", e);
            StartupContext {
                storage,
                store: BookmarkStore::new(),
                load_error: Some(e),
            }
        }
    }
}

/// TUI logs go to a file because the terminal is taken
pub fn tui_log_sink(config: &StaticConfig) -> LogSink {
    let dir = config
        .storage
        .data_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(default_data_dir);
    LogSink::File(dir.join(TUI_LOG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(data_file: PathBuf) -> StaticConfig {
        let mut config = StaticConfig::default();
        config.storage.data_file = data_file;
        config
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = prepare_tui_startup(&config_with(dir.path().join("bookmarks.json")));
        assert!(ctx.store.is_empty());
        assert!(ctx.load_error.is_none());
    }

    #[test]
    fn test_malformed_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        std::fs::write(&path, "{ not json").unwrap();

        let ctx = prepare_tui_startup(&config_with(path.clone()));
        assert!(ctx.store.is_empty());
        assert!(matches!(ctx.load_error, Some(MarksError::Load(_))));
        // untouched until the session saves
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_log_file_next_to_data() {
        let config = config_with(PathBuf::from("/tmp/marks-data/bookmarks.json"));
        assert_eq!(
            tui_log_sink(&config),
            LogSink::File(PathBuf::from("/tmp/marks-data/marks.log"))
        );
    }
}
