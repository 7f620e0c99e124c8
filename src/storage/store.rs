//! In-memory bookmark collection
//!
//! 书签集合的唯一所有者。插入顺序即为持久化顺序，所有索引均为绝对索引。

use tracing::{debug, warn};

use super::models::{Bookmark, BookmarkUpdate, ImportOutcome};
use crate::errors::{MarksError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records that were already normalised by the persistence layer.
    pub fn from_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self { bookmarks }
    }

    /// 校验并追加
    pub fn add(&mut self, bookmark: Bookmark) -> Result<&Bookmark> {
        let bookmark = Bookmark::new(
            &bookmark.folder,
            &bookmark.title,
            &bookmark.url,
            &bookmark.note,
        )?;
        debug!("Adding bookmark '{}' to folder '{}'", bookmark.title, bookmark.folder);
        self.bookmarks.push(bookmark);
        let last = self.bookmarks.len() - 1;
        Ok(&self.bookmarks[last])
    }

    /// 替换标题、URL、备注，以及可选的文件夹
    pub fn update(&mut self, index: usize, fields: BookmarkUpdate) -> Result<()> {
        let current = self.get(index).ok_or_else(|| out_of_range(index, self.len()))?;
        let folder = fields.folder.as_deref().unwrap_or(&current.folder);
        let updated = Bookmark::new(folder, &fields.title, &fields.url, &fields.note)?;
        debug!("Updating bookmark at index {}", index);
        self.bookmarks[index] = updated;
        Ok(())
    }

    pub fn move_to(&mut self, index: usize, new_folder: &str) -> Result<()> {
        let len = self.len();
        let folder = new_folder.trim();
        let bookmark = self
            .bookmarks
            .get_mut(index)
            .ok_or_else(|| out_of_range(index, len))?;
        if folder.is_empty() {
            return Err(MarksError::validation("Folder is required"));
        }
        debug!("Moving bookmark {} from '{}' to '{}'", index, bookmark.folder, folder);
        bookmark.folder = folder.to_string();
        Ok(())
    }

    /// 删除并返回被删除的记录，后续索引依次前移
    pub fn delete(&mut self, index: usize) -> Result<Bookmark> {
        if index >= self.len() {
            return Err(out_of_range(index, self.len()));
        }
        Ok(self.bookmarks.remove(index))
    }

    /// Distinct folders in first-seen order.
    pub fn folders(&self) -> Vec<String> {
        let mut folders: Vec<String> = Vec::new();
        for bookmark in &self.bookmarks {
            if !folders.iter().any(|f| f == &bookmark.folder) {
                folders.push(bookmark.folder.clone());
            }
        }
        folders
    }

    pub fn all(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn get(&self, index: usize) -> Option<&Bookmark> {
        self.bookmarks.get(index)
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// 批量导入：无效记录被跳过并计数
    pub fn extend_validated<I>(&mut self, records: I) -> ImportOutcome
    where
        I: IntoIterator<Item = Bookmark>,
    {
        let mut outcome = ImportOutcome::default();
        for record in records {
            match self.add(record) {
                Ok(_) => outcome.added += 1,
                Err(e) => {
                    warn!("Skipping imported record: {}", e.message());
                    outcome.skipped += 1;
                }
            }
        }
        outcome
    }
}

fn out_of_range(index: usize, len: usize) -> MarksError {
    MarksError::index_out_of_range(format!(
        "Index {} is out of range for {} bookmarks",
        index, len
    ))
}
