//! Navigation and selection logic

use super::state::{App, DETAIL_FIELDS, Focus};
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;

/// Selected row within the visible sequence.
///
/// 不变式：可见集合非空时为 `Some(i)` 且 `i < len`，为空时为 `None`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    selected: Option<usize>,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor at `index`, clamped to `len`.
    pub fn at(index: usize, len: usize) -> Self {
        let mut cursor = Self {
            selected: Some(index),
        };
        cursor.clamp(len);
        cursor
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn move_up(&mut self, len: usize) {
        self.step_back(1, len);
    }

    pub fn move_down(&mut self, len: usize) {
        self.step_forward(1, len);
    }

    pub fn page_up(&mut self, len: usize) {
        self.step_back(PAGE_SCROLL_STEP, len);
    }

    pub fn page_down(&mut self, len: usize) {
        self.step_forward(PAGE_SCROLL_STEP, len);
    }

    pub fn move_top(&mut self, len: usize) {
        self.selected = (len > 0).then_some(0);
    }

    pub fn move_bottom(&mut self, len: usize) {
        self.selected = len.checked_sub(1);
    }

    /// Re-establish the invariant after the visible set changed.
    pub fn clamp(&mut self, len: usize) {
        self.selected = match len {
            0 => None,
            _ => Some(self.selected.unwrap_or(0).min(len - 1)),
        };
    }

    fn step_back(&mut self, step: usize, len: usize) {
        self.clamp(len);
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(step));
        }
    }

    fn step_forward(&mut self, step: usize, len: usize) {
        self.clamp(len);
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_add(step).min(len - 1));
        }
    }
}

impl App {
    /// Tab: move focus between the list and the detail panel. The detail
    /// panel only takes focus while a bookmark is selected.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::List if self.selected_index().is_some() => Focus::Detail,
            _ => Focus::List,
        };
    }

    pub fn move_detail_up(&mut self) {
        self.detail_selected = self.detail_selected.saturating_sub(1);
    }

    pub fn move_detail_down(&mut self) {
        self.detail_selected = (self.detail_selected + 1).min(DETAIL_FIELDS.len() - 1);
    }

    pub fn move_selection_up(&mut self) {
        let len = self.visible_len();
        self.cursor.move_up(len);
        self.adjust_scroll_offset();
    }

    pub fn move_selection_down(&mut self) {
        let len = self.visible_len();
        self.cursor.move_down(len);
        self.adjust_scroll_offset();
    }

    pub fn jump_to_top(&mut self) {
        let len = self.visible_len();
        self.cursor.move_top(len);
        self.scroll_offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        let len = self.visible_len();
        self.cursor.move_bottom(len);
        self.adjust_scroll_offset();
    }

    pub fn page_up(&mut self) {
        let len = self.visible_len();
        self.cursor.page_up(len);
        self.adjust_scroll_offset();
    }

    pub fn page_down(&mut self) {
        let len = self.visible_len();
        self.cursor.page_down(len);
        self.adjust_scroll_offset();
    }

    /// 调整 scroll_offset 确保选中行在可见窗口内
    pub fn adjust_scroll_offset(&mut self) {
        let Some(selected) = self.cursor.selected() else {
            self.scroll_offset = 0;
            return;
        };
        let vh = self.last_visible_height.max(1);
        // 如果光标在可见窗口上方，向上滚动
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        }
        // 如果光标在可见窗口下方，向下滚动
        if selected >= self.scroll_offset + vh {
            self.scroll_offset = selected + 1 - vh;
        }
    }
}
