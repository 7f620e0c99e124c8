use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use marks::cli::Cli;
use marks::config::init_config;
use marks::runtime::lifetime::startup;
use marks::runtime::modes::{self, Mode, detect_mode};
use marks::system::logging::{LogSink, init_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = init_config(cli.config.as_deref(), cli.data_file.clone())
        .context("Failed to load configuration")?;

    let mode = detect_mode(cli.command.as_ref());
    let sink = match mode {
        Mode::Tui => startup::tui_log_sink(config),
        Mode::Cli => LogSink::Stderr,
    };
    // Keep the guard alive until exit so buffered log lines are flushed
    let _guard = init_logging(&config.logging, sink).context("Failed to initialize logging")?;

    match (mode, cli.command) {
        (Mode::Cli, Some(cmd)) => match modes::run_cli(cmd, config) {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(e) => {
                if !e.is_silent() {
                    eprintln!("{}", e.format_colored());
                }
                Ok(ExitCode::from(e.exit_code()))
            }
        },
        _ => match modes::run_tui(config) {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(e) => {
                eprintln!("{}", e.format_colored());
                Ok(ExitCode::FAILURE)
            }
        },
    }
}
