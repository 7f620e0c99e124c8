//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for marks using clap's derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// marks - A minimal terminal bookmark manager
#[derive(Parser, Debug)]
#[command(name = "marks")]
#[command(version)]
#[command(about = "A minimal terminal bookmark manager", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Override the bookmarks data file
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive TUI (default)
    Tui,

    /// Add a bookmark without opening the TUI
    Add {
        /// Bookmark title
        #[arg(long, short = 'n')]
        name: String,

        /// Bookmark URL
        #[arg(long, short = 'u')]
        url: String,

        /// Folder (default: storage.default_folder)
        #[arg(long, short = 'f')]
        folder: Option<String>,

        /// Optional note
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Print bookmarks as `[folder] title - url`, one per line
    List {
        /// Append ` | note` when a note exists
        #[arg(long)]
        include_note: bool,
    },

    /// Pick a bookmark with the configured launcher (rofi -dmenu) and open it
    Launcher,

    /// Import bookmarks from a browser-exported HTML file
    ImportHtml {
        /// Netscape bookmark HTML file
        file: PathBuf,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
