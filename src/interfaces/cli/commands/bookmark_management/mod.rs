//! Bookmark CLI commands

mod add;
mod helpers;
mod import_html;
mod launcher;
mod list;

pub use add::add_bookmark;
pub use helpers::{format_list_line, parse_launcher_choice};
pub use import_html::import_html;
pub use launcher::run_launcher;
pub use list::list_bookmarks;
