//! CLI interface module
//!
//! Single-shot commands that share validation and persistence with the TUI.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::MarksError;
use crate::storage::FileStorage;
use crate::utils::SystemOpener;
use commands::{
    add_bookmark, config_management, import_html, list_bookmarks, run_launcher,
};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ValidationError(String),
    /// Bad input from the user or the environment (missing file, missing tool)
    InputError(String),
    CommandError(String),
    /// Nothing was chosen; exits non-zero without a message
    Cancelled,
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::ValidationError(_) | CliError::InputError(_) => 2,
            CliError::StorageError(_) | CliError::CommandError(_) | CliError::Cancelled => 1,
        }
    }

    /// Whether the error should be reported at all
    pub fn is_silent(&self) -> bool {
        matches!(self, CliError::Cancelled)
    }

    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ValidationError(msg) => format!("Error: {}", msg),
            CliError::InputError(msg) => format!("Error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
            CliError::Cancelled => "Cancelled".to_string(),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ValidationError(msg) | CliError::InputError(msg) => {
                format!("{} {}", "Error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
            CliError::Cancelled => "Cancelled".dimmed().to_string(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<MarksError> for CliError {
    fn from(err: MarksError) -> Self {
        match err {
            MarksError::Validation(msg) | MarksError::IndexOutOfRange(msg) => {
                CliError::ValidationError(msg)
            }
            MarksError::Import(msg) => CliError::InputError(msg),
            MarksError::Load(_)
            | MarksError::Save(_)
            | MarksError::FileOperation(_)
            | MarksError::Serialization(_) => CliError::StorageError(err.message().to_string()),
            MarksError::OpenUrl(msg) | MarksError::Config(msg) | MarksError::Terminal(msg) => {
                CliError::CommandError(msg)
            }
        }
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    // Config generation needs no data file
    if let Commands::Config {
        action: ConfigCommands::Generate { output_path, force },
    } = cmd
    {
        return config_management::config_generate(output_path, force);
    }

    let storage = FileStorage::new(&config.storage.data_file);

    match cmd {
        Commands::Add {
            name,
            url,
            folder,
            note,
        } => {
            let folder = folder.unwrap_or_else(|| config.storage.default_folder.clone());
            add_bookmark(&storage, &name, &url, &folder, &note, config.launcher.notify)
        }
        Commands::List { include_note } => list_bookmarks(&storage, include_note),
        Commands::Launcher => {
            let opener = SystemOpener::new(config.opener.command.clone());
            run_launcher(&storage, &config.launcher, &opener)
        }
        Commands::ImportHtml { file } => import_html(&storage, &file, config.launcher.notify),
        Commands::Tui | Commands::Config { .. } => Err(CliError::CommandError(
            "Not a single-shot command".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::ValidationError("x".into()).exit_code(), 2);
        assert_eq!(CliError::InputError("x".into()).exit_code(), 2);
        assert_eq!(CliError::StorageError("x".into()).exit_code(), 1);
        assert_eq!(CliError::Cancelled.exit_code(), 1);
        assert!(CliError::Cancelled.is_silent());
    }

    #[test]
    fn test_from_marks_error() {
        let err: CliError = MarksError::validation("Title is required").into();
        assert!(matches!(err, CliError::ValidationError(ref m) if m == "Title is required"));

        let err: CliError = MarksError::save("disk full").into();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.format_simple(), "Storage error: disk full");
    }
}
