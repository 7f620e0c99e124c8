//! 可见集合计算
//!
//! 根据文件夹过滤和搜索词从完整集合中派生出可见子集，保持存储顺序。

use crate::storage::Bookmark;

/// 视图状态：文件夹过滤与搜索词，两者同时存在时取交集
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub folder_filter: Option<String>,
    pub search_query: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank input clears the filter.
    pub fn with_folder_filter(mut self, folder: impl AsRef<str>) -> Self {
        self.folder_filter = normalize(folder.as_ref());
        self
    }

    /// Blank input clears the query.
    pub fn with_search_query(mut self, query: impl AsRef<str>) -> Self {
        self.search_query = normalize(query.as_ref());
        self
    }

    pub fn cleared(self) -> Self {
        Self::default()
    }

    pub fn is_filtered(&self) -> bool {
        self.folder_filter.is_some() || self.search_query.is_some()
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// 可见行：绝对索引 + 记录引用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    pub index: usize,
    pub bookmark: &'a Bookmark,
}

pub fn compute_visible<'a>(collection: &'a [Bookmark], view: &ViewState) -> Vec<VisibleRow<'a>> {
    let needle = view.search_query.as_deref().map(str::to_lowercase);

    collection
        .iter()
        .enumerate()
        .filter(|(_, bookmark)| {
            view.folder_filter
                .as_deref()
                .is_none_or(|folder| bookmark.folder == folder)
        })
        .filter(|(_, bookmark)| {
            needle
                .as_deref()
                .is_none_or(|needle| bookmark.matches_query(needle))
        })
        .map(|(index, bookmark)| VisibleRow { index, bookmark })
        .collect()
}
