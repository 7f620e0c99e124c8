use serde::{Deserialize, Serialize};

use crate::errors::{MarksError, Result};

/// 未分组书签使用的默认文件夹
pub const DEFAULT_FOLDER: &str = "General";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
    pub folder: String,
    #[serde(default)]
    pub note: String,
}

impl Bookmark {
    /// 创建经过裁剪和校验的书签
    pub fn new(
        folder: impl AsRef<str>,
        title: impl AsRef<str>,
        url: impl AsRef<str>,
        note: impl AsRef<str>,
    ) -> Result<Self> {
        let bookmark = Bookmark {
            title: title.as_ref().trim().to_string(),
            url: url.as_ref().trim().to_string(),
            folder: folder.as_ref().trim().to_string(),
            note: note.as_ref().trim().to_string(),
        };
        bookmark.validate()?;
        Ok(bookmark)
    }

    /// Checks the required fields. Values are expected to be trimmed already.
    pub fn validate(&self) -> Result<()> {
        if self.folder.trim().is_empty() {
            return Err(MarksError::validation("Folder is required"));
        }
        if self.title.trim().is_empty() {
            return Err(MarksError::validation("Title is required"));
        }
        if self.url.trim().is_empty() {
            return Err(MarksError::validation("URL is required"));
        }
        Ok(())
    }

    /// `needle` must already be lowercase.
    pub fn matches_query(&self, needle: &str) -> bool {
        [&self.folder, &self.title, &self.url, &self.note]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// 编辑时提交的字段
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookmarkUpdate {
    /// `None` keeps the current folder.
    pub folder: Option<String>,
    pub title: String,
    pub url: String,
    pub note: String,
}

impl BookmarkUpdate {
    pub fn new(title: impl Into<String>, url: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            folder: None,
            title: title.into(),
            url: url.into(),
            note: note.into(),
        }
    }

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }
}

/// 批量导入结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportOutcome {
    pub added: usize,
    pub skipped: usize,
}
