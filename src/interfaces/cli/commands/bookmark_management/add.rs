//! Add bookmark command

use tracing::info;

use super::helpers::{announce, load_store, save_store};
use crate::interfaces::cli::CliError;
use crate::storage::{Bookmark, FileStorage};

pub fn add_bookmark(
    storage: &FileStorage,
    name: &str,
    url: &str,
    folder: &str,
    note: &str,
    notify: bool,
) -> Result<(), CliError> {
    // Validate before touching the data file
    let bookmark = Bookmark::new(folder, name, url, note)?;

    let mut store = load_store(storage)?;
    let added = store.add(bookmark)?.clone();
    save_store(storage, &store)?;

    info!("Added '{}' to {}", added.title, added.folder);
    announce(
        &format!("Added '{}' to folder '{}'.", added.title, added.folder),
        notify,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("bookmarks.json"));

        add_bookmark(&storage, " Docs ", "https://docs.rs", "Dev", "", false).unwrap();
        add_bookmark(&storage, "Blog", "https://blog.rust-lang.org", "Dev", "news", false)
            .unwrap();

        let saved = storage.load().unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].title, "Docs");
        assert_eq!(saved[1].note, "news");
    }

    #[test]
    fn test_add_rejects_blank_title_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        let storage = FileStorage::new(&path);

        let err = add_bookmark(&storage, "  ", "https://docs.rs", "Dev", "", false).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(!path.exists());
    }
}
