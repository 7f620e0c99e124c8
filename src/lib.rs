//! marks - A minimal terminal bookmark manager
//!
//! This library provides the core functionality for marks: an ordered
//! bookmark collection persisted as a single JSON file, a keyboard-driven
//! TUI and launcher-friendly CLI commands.
//!
//! # Architecture
//! - `storage`: Bookmark model, in-memory store and the JSON file backend
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging setup
//! - `utils`: URL opening and HTML bookmark import

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod storage;
pub mod system;
pub mod utils;
