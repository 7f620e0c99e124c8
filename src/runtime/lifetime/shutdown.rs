use tracing::{debug, error};

use crate::errors::Result;
use crate::storage::{BookmarkStore, FileStorage};

/// Persist the collection when an interactive session ends.
///
/// On failure the collection is dumped to a recovery file next to the data
/// file and the save error is returned.
pub fn save_on_exit(storage: &FileStorage, store: &BookmarkStore) -> Result<()> {
    match storage.save(store.all()) {
        Ok(()) => {
            debug!("Session saved");
            Ok(())
        }
        Err(e) => {
            error!("Failed to save bookmarks: {}", e);
            match storage.save_recovery(store.all()) {
                Ok(path) => {
                    eprintln!("Bookmarks were saved to {}", path.display());
                }
                Err(recovery_err) => {
                    error!("Failed to write recovery file: {}", recovery_err);
                }
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Bookmark;

    #[test]
    fn test_save_on_exit_writes_collection() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("bookmarks.json"));
        let mut store = BookmarkStore::new();
        store
            .add(Bookmark::new("Dev", "Docs", "https://docs.rs", "").unwrap())
            .unwrap();

        save_on_exit(&storage, &store).unwrap();
        assert_eq!(storage.load().unwrap(), store.all());
    }

    #[test]
    fn test_save_failure_writes_recovery_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of the data file makes the final rename fail
        let target = dir.path().join("bookmarks.json");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "x").unwrap();
        let storage = FileStorage::new(&target);
        let mut store = BookmarkStore::new();
        store
            .add(Bookmark::new("Dev", "Docs", "https://docs.rs", "").unwrap())
            .unwrap();

        assert!(save_on_exit(&storage, &store).is_err());

        let recovered = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .any(|e| e.file_name().to_string_lossy().contains(".recovery-"));
        assert!(recovered);
    }
}
