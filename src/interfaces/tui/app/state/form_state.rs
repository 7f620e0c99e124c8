//! 表单状态管理
//!
//! 管理添加/编辑/移动书签以及过滤、搜索输入时的草稿缓冲区

use crate::storage::Bookmark;

/// 当前正在编辑的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditingField {
    Folder,
    Title,
    Url,
    Note,
    /// 过滤或搜索输入
    Query,
}

impl EditingField {
    /// 获取字段显示标题
    pub fn display_title(&self) -> &'static str {
        match self {
            Self::Folder => "Folder",
            Self::Title => "Title",
            Self::Url => "URL",
            Self::Note => "Note",
            Self::Query => "Query",
        }
    }
}

/// 编辑目标：进入编辑时捕获的绝对索引和记录快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub index: usize,
    pub snapshot: Bookmark,
}

/// 表单状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub folder: String,
    pub title: String,
    pub url: String,
    pub note: String,
    pub query: String,
    pub target: Option<EditTarget>,
    /// 只编辑一个字段（详情面板中按 e），Enter 直接提交
    pub single_field: bool,
}

impl FormState {
    /// 创建新的表单状态
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer pre-populated from an existing record.
    pub fn for_target(index: usize, bookmark: &Bookmark) -> Self {
        Self {
            folder: bookmark.folder.clone(),
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
            note: bookmark.note.clone(),
            query: String::new(),
            target: Some(EditTarget {
                index,
                snapshot: bookmark.clone(),
            }),
            single_field: false,
        }
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// 清空所有输入
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn field(&self, field: EditingField) -> &str {
        match field {
            EditingField::Folder => &self.folder,
            EditingField::Title => &self.title,
            EditingField::Url => &self.url,
            EditingField::Note => &self.note,
            EditingField::Query => &self.query,
        }
    }

    pub fn field_mut(&mut self, field: EditingField) -> &mut String {
        match field {
            EditingField::Folder => &mut self.folder,
            EditingField::Title => &mut self.title,
            EditingField::Url => &mut self.url,
            EditingField::Note => &mut self.note,
            EditingField::Query => &mut self.query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_target_copies_record() {
        let bookmark = Bookmark::new("Work", "Jira", "https://jira", "sprint").unwrap();
        let form = FormState::for_target(3, &bookmark);
        assert_eq!(form.field(EditingField::Title), "Jira");
        assert_eq!(form.field(EditingField::Note), "sprint");
        assert_eq!(form.target.as_ref().map(|t| t.index), Some(3));
    }

    #[test]
    fn test_field_mut_and_clear() {
        let mut form = FormState::with_query("rust");
        form.field_mut(EditingField::Query).push('y');
        assert_eq!(form.query, "rusty");
        form.clear();
        assert_eq!(form, FormState::default());
    }
}
