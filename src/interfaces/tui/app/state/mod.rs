//! App state definition and basic state management
//!
//! 包含核心 App 结构和基础状态管理，以及拆分后的子状态模块

mod form_state;

pub use form_state::{EditTarget, EditingField, FormState};

use std::time::{Duration, Instant};

use ratatui::style::Color;

use super::navigation::SelectionCursor;
use super::view_filter::{VisibleRow, ViewState, compute_visible};
use crate::interfaces::tui::constants::colors;
use crate::storage::{Bookmark, BookmarkStore};

/// 默认的提示消息过期时间
const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_secs(4);

/// 当前屏幕（模态状态机的状态）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Browse,
    AddFolder,
    AddTitle,
    AddUrl,
    AddNote,
    EditTitle,
    EditUrl,
    EditNote,
    MoveFolder,
    FilterEntry,
    SearchEntry,
    DeleteConfirm,
    Help,
    Settings,
    AccentPicker,
    Quit,
}

/// 主界面焦点：列表或详情面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Detail,
}

/// Fields of the detail panel, top to bottom.
pub const DETAIL_FIELDS: [EditingField; 4] = [
    EditingField::Folder,
    EditingField::Title,
    EditingField::Url,
    EditingField::Note,
];

impl CurrentScreen {
    /// Field edited by this screen, for text-entry screens.
    pub fn editing_field(&self) -> Option<EditingField> {
        match self {
            Self::AddFolder | Self::MoveFolder => Some(EditingField::Folder),
            Self::AddTitle | Self::EditTitle => Some(EditingField::Title),
            Self::AddUrl | Self::EditUrl => Some(EditingField::Url),
            Self::AddNote | Self::EditNote => Some(EditingField::Note),
            Self::FilterEntry | Self::SearchEntry => Some(EditingField::Query),
            Self::Browse
            | Self::DeleteConfirm
            | Self::Help
            | Self::Settings
            | Self::AccentPicker
            | Self::Quit => None,
        }
    }

    pub fn is_text_entry(&self) -> bool {
        self.editing_field().is_some()
    }

    /// Tab cycles through existing folders on these screens.
    pub fn offers_folder_completion(&self) -> bool {
        matches!(self, Self::AddFolder | Self::MoveFolder | Self::FilterEntry)
    }

    /// 输入提示文本
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Self::AddFolder => "Add · Folder",
            Self::AddTitle => "Add · Title",
            Self::AddUrl => "Add · URL",
            Self::AddNote => "Add · Note (optional)",
            Self::EditTitle => "Edit · Title",
            Self::EditUrl => "Edit · URL",
            Self::EditNote => "Edit · Note",
            Self::MoveFolder => "Move to folder",
            Self::FilterEntry => "Filter by folder (empty clears)",
            Self::SearchEntry => "Search (empty clears)",
            Self::Browse
            | Self::DeleteConfirm
            | Self::Help
            | Self::Settings
            | Self::AccentPicker
            | Self::Quit => "",
        }
    }
}

pub struct App {
    pub store: BookmarkStore,
    pub current_screen: CurrentScreen,

    // View state and selection
    pub view: ViewState,
    pub cursor: SelectionCursor,
    visible: Vec<usize>,

    // Form state for add/edit/move/filter/search
    pub form: FormState,
    pub last_folder: Option<String>,
    pub default_folder: String,

    // Transient messages
    pub status_message: String,
    pub error_message: String,
    message_set_at: Option<Instant>,
    pub status_timeout: Duration,

    // Detail panel focus
    pub focus: Focus,
    pub detail_selected: usize,

    // Settings
    pub accent_selected: usize,

    // UI state
    pub accent: Color,
    pub scroll_offset: usize,
    pub last_visible_height: usize,
}

impl App {
    pub fn new(store: BookmarkStore, default_folder: impl Into<String>) -> App {
        let mut app = App {
            store,
            current_screen: CurrentScreen::Browse,
            view: ViewState::new(),
            cursor: SelectionCursor::new(),
            visible: Vec::new(),
            form: FormState::new(),
            last_folder: None,
            default_folder: default_folder.into(),
            status_message: String::new(),
            error_message: String::new(),
            message_set_at: None,
            status_timeout: DEFAULT_STATUS_TIMEOUT,
            focus: Focus::List,
            detail_selected: 0,
            accent_selected: 0,
            accent: colors::PRIMARY,
            scroll_offset: 0,
            last_visible_height: 0,
        };
        app.refresh_visible();
        app
    }

    pub fn with_status_timeout(mut self, timeout: Duration) -> Self {
        self.status_timeout = timeout;
        self
    }

    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Recompute the visible sequence and clamp the cursor to it.
    pub fn refresh_visible(&mut self) {
        self.visible = compute_visible(self.store.all(), &self.view)
            .iter()
            .map(|row| row.index)
            .collect();
        self.cursor.clamp(self.visible.len());
        if self.visible.is_empty() {
            self.focus = Focus::List;
        }
        self.adjust_scroll_offset();
    }

    /// Replace the view state and recompute.
    pub fn set_view(&mut self, view: ViewState) {
        self.view = view;
        self.refresh_visible();
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Absolute indices of the last computed visible sequence.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Absolute index of the selected row.
    pub fn selected_index(&self) -> Option<usize> {
        self.cursor
            .selected()
            .and_then(|i| self.visible.get(i))
            .copied()
    }

    pub fn selected_bookmark(&self) -> Option<&Bookmark> {
        self.selected_index().and_then(|i| self.store.get(i))
    }

    /// View used for drawing: the search draft is previewed while typing.
    pub fn display_view(&self) -> ViewState {
        match self.current_screen {
            CurrentScreen::SearchEntry => self.view.clone().with_search_query(&self.form.query),
            _ => self.view.clone(),
        }
    }

    pub fn display_rows(&self) -> Vec<VisibleRow<'_>> {
        compute_visible(self.store.all(), &self.display_view())
    }

    /// Cursor position for `display_rows()`.
    pub fn display_selection(&self, len: usize) -> Option<usize> {
        let mut cursor = self.cursor;
        cursor.clamp(len);
        cursor.selected()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message.clear();
        self.message_set_at = Some(Instant::now());
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        self.status_message.clear();
        self.message_set_at = Some(Instant::now());
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message.clear();
        self.message_set_at = None;
    }

    /// Drop messages older than the status timeout.
    pub fn expire_messages(&mut self, now: Instant) {
        if let Some(set_at) = self.message_set_at
            && now.saturating_duration_since(set_at) >= self.status_timeout
        {
            self.clear_messages();
        }
    }

    /// Field highlighted in the detail panel.
    pub fn detail_field(&self) -> EditingField {
        DETAIL_FIELDS[self.detail_selected.min(DETAIL_FIELDS.len() - 1)]
    }

    pub fn is_running(&self) -> bool {
        self.current_screen != CurrentScreen::Quit
    }
}
