pub mod file;
pub mod models;
pub mod store;

pub use file::FileStorage;
pub use models::{Bookmark, BookmarkUpdate, DEFAULT_FOLDER, ImportOutcome};
pub use store::BookmarkStore;
