//! Draftdesk entrypoint for the interactive email review session.

use std::io::{self, Write};
use std::process::ExitCode;

use draftdesk::logging::init_logging;
use draftdesk::{DraftdeskConfig, StartupError};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = load_config()?;
    // Held until exit so buffered log lines are flushed.
    let _log_guard = init_logging(config.log_file.as_deref())?;

    cli::review_tui::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`StartupError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<DraftdeskConfig, StartupError> {
    DraftdeskConfig::load().map_err(|error| StartupError::Configuration {
        message: error.to_string(),
    })
}
