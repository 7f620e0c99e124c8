//! CLI mode
//!
//! Delegates to the actual CLI implementation.

use tracing::debug;

use crate::cli::Commands;
use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;

/// Run CLI mode
pub fn run_cli(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    debug!("Running CLI command {:?}", cmd);
    crate::interfaces::cli::run_cli_command(cmd, config)
}
