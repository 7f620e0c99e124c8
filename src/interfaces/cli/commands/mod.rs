//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod bookmark_management;
pub mod config_management;

pub use bookmark_management::*;
