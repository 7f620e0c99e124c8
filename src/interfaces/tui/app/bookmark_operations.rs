//! Bookmark CRUD operations
//!
//! 所有写操作先把选中行解析为绝对索引，并与进入模态时的快照比对。

use tracing::{debug, warn};

use super::state::{App, CurrentScreen, EditingField, FormState};
use crate::errors::{MarksError, Result};
use crate::storage::{Bookmark, BookmarkUpdate};

impl App {
    pub fn begin_add(&mut self) {
        self.form = FormState::new();
        self.switch_screen(CurrentScreen::AddFolder);
    }

    /// Returns false when nothing is selected.
    pub fn begin_edit(&mut self) -> bool {
        self.begin_targeted(CurrentScreen::EditTitle)
    }

    /// Edit a single field of the selected bookmark. The folder goes through
    /// the move prompt.
    pub fn begin_field_edit(&mut self, field: EditingField) -> bool {
        let screen = match field {
            EditingField::Folder => return self.begin_move(),
            EditingField::Title => CurrentScreen::EditTitle,
            EditingField::Url => CurrentScreen::EditUrl,
            EditingField::Note => CurrentScreen::EditNote,
            EditingField::Query => return false,
        };
        if !self.begin_targeted(screen) {
            return false;
        }
        self.form.single_field = true;
        true
    }

    pub fn begin_move(&mut self) -> bool {
        self.begin_targeted(CurrentScreen::MoveFolder)
    }

    pub fn begin_delete(&mut self) -> bool {
        self.begin_targeted(CurrentScreen::DeleteConfirm)
    }

    pub fn begin_filter_entry(&mut self) {
        self.form = FormState::with_query(self.view.folder_filter.clone().unwrap_or_default());
        self.switch_screen(CurrentScreen::FilterEntry);
    }

    pub fn begin_search_entry(&mut self) {
        self.form = FormState::with_query(self.view.search_query.clone().unwrap_or_default());
        self.switch_screen(CurrentScreen::SearchEntry);
    }

    fn begin_targeted(&mut self, screen: CurrentScreen) -> bool {
        let Some(index) = self.selected_index() else {
            return false;
        };
        let Some(bookmark) = self.store.get(index) else {
            return false;
        };
        self.form = FormState::for_target(index, bookmark);
        self.switch_screen(screen);
        true
    }

    /// Last folder used in this session, else the active filter, else the
    /// configured default.
    pub fn resolve_default_folder(&self) -> String {
        self.last_folder
            .clone()
            .or_else(|| self.view.folder_filter.clone())
            .unwrap_or_else(|| self.default_folder.clone())
    }

    pub fn commit_add(&mut self) -> Result<Bookmark> {
        let draft = Bookmark {
            folder: self.form.folder.clone(),
            title: self.form.title.clone(),
            url: self.form.url.clone(),
            note: self.form.note.clone(),
        };
        let added = self.store.add(draft)?.clone();
        self.last_folder = Some(added.folder.clone());
        self.refresh_visible();
        Ok(added)
    }

    pub fn commit_edit(&mut self) -> Result<()> {
        let index = self.resolve_target()?;
        let fields = BookmarkUpdate::new(
            self.form.title.clone(),
            self.form.url.clone(),
            self.form.note.clone(),
        );
        self.store.update(index, fields)?;
        self.refresh_visible();
        Ok(())
    }

    /// Returns the trimmed destination folder.
    pub fn commit_move(&mut self) -> Result<String> {
        let folder = self.form.folder.trim().to_string();
        if folder.is_empty() {
            return Err(MarksError::validation("Folder is required"));
        }
        let index = self.resolve_target()?;
        self.store.move_to(index, &folder)?;
        self.last_folder = Some(folder.clone());
        self.refresh_visible();
        Ok(folder)
    }

    pub fn commit_delete(&mut self) -> Result<Bookmark> {
        let index = self.resolve_target()?;
        let removed = self.store.delete(index)?;
        self.refresh_visible();
        Ok(removed)
    }

    pub fn apply_folder_filter(&mut self) {
        let view = self.view.clone().with_folder_filter(&self.form.query);
        self.set_view(view);
    }

    pub fn apply_search_query(&mut self) {
        let view = self.view.clone().with_search_query(&self.form.query);
        self.set_view(view);
    }

    pub fn clear_view_filters(&mut self) {
        let view = self.view.clone().cleared();
        self.set_view(view);
    }

    /// Leave any modal state without touching the store.
    pub fn cancel_form(&mut self) {
        self.form.clear();
        self.switch_screen(CurrentScreen::Browse);
    }

    pub fn switch_screen(&mut self, screen: CurrentScreen) {
        debug!("Screen {:?} -> {:?}", self.current_screen, screen);
        self.current_screen = screen;
    }

    /// The captured index must still hold the record captured on entry.
    fn resolve_target(&self) -> Result<usize> {
        let target = self
            .form
            .target
            .as_ref()
            .ok_or_else(|| MarksError::index_out_of_range("No bookmark selected"))?;
        match self.store.get(target.index) {
            Some(current) if *current == target.snapshot => Ok(target.index),
            _ => {
                warn!(
                    "Stale selection: bookmark at index {} no longer matches",
                    target.index
                );
                Err(MarksError::index_out_of_range(format!(
                    "Bookmark at index {} changed since it was selected",
                    target.index
                )))
            }
        }
    }
}
