//! TUI application state
//!
//! - state: App / CurrentScreen / FormState
//! - view_filter: visible subset computation
//! - navigation: selection cursor
//! - bookmark_operations: store mutations driven by the modal state machine
//! - settings: accent colour selection

mod bookmark_operations;
mod settings;
pub mod navigation;
pub mod state;
pub mod view_filter;

pub use navigation::SelectionCursor;
pub use state::{App, CurrentScreen, DETAIL_FIELDS, EditTarget, EditingField, Focus, FormState};
pub use view_filter::{VisibleRow, ViewState, compute_visible};
