//! Tracing setup for the terminal interface.
//!
//! The interface draws on the alternate screen, so log output never goes to
//! the terminal. When a log file is configured, events are written to it
//! through a non-blocking appender; otherwise no subscriber is installed.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::StartupError;

/// Environment variable holding the log filter directives.
pub const LOG_FILTER_ENV: &str = "DRAFTDESK_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Builds the filter from `directives`, falling back to `info` when they are
/// absent or invalid.
#[must_use]
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber writing to `log_file`.
///
/// Returns the appender guard, which must be held until shutdown so buffered
/// events are flushed. Returns `Ok(None)` without installing anything when
/// no log file is configured.
///
/// # Errors
///
/// Returns [`StartupError::Logging`] when the file cannot be opened or a
/// global subscriber is already installed.
pub fn init_logging(log_file: Option<&str>) -> Result<Option<WorkerGuard>, StartupError> {
    let Some(path) = log_file.map(Path::new) else {
        return Ok(None);
    };

    let appender = open_appender(path)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let directives = std::env::var(LOG_FILTER_ENV).ok();

    tracing_subscriber::registry()
        .with(build_filter(directives.as_deref()))
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|error| StartupError::Logging {
            message: error.to_string(),
        })?;

    tracing::info!(log_file = %path.display(), "tracing initialised");
    Ok(Some(guard))
}

fn open_appender(path: &Path) -> Result<RollingFileAppender, StartupError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| StartupError::Logging {
            message: format!("log file `{}` has no file name", path.display()),
        })?;
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|error| StartupError::Logging {
            message: format!("cannot open log file `{}`: {error}", path.display()),
        })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::absent(None, "info")]
    #[case::invalid(Some("draftdesk=loudest"), "info")]
    #[case::explicit(Some("draftdesk=debug"), "draftdesk=debug")]
    fn filter_falls_back_to_info(#[case] directives: Option<&str>, #[case] expected: &str) {
        assert_eq!(build_filter(directives).to_string(), expected);
    }

    #[test]
    fn no_log_file_installs_nothing() {
        let guard = init_logging(None).expect("absent log file should be accepted");
        assert!(guard.is_none());
    }

    #[test]
    fn appender_creates_file_in_directory() {
        let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
        let path = temp_dir.path().join("session.log");

        open_appender(&path).expect("appender should open");

        assert!(path.exists(), "log file should be created");
    }

    #[test]
    fn directory_paths_are_refused() {
        let error = open_appender(Path::new("/")).expect_err("root has no file name");
        assert!(matches!(error, StartupError::Logging { .. }));
    }
}
