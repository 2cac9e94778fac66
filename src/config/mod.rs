//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach, lowest to
//! highest precedence:
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.draftdesk.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `DRAFTDESK_BACKEND_URL` and friends
//! 4. **Command-line arguments** – `--backend-url`/`-b` and others
//!
//! # Configuration File
//!
//! ```toml
//! backend_url = "http://localhost:8000"
//! request_timeout_seconds = 30
//! log_file = "draftdesk.log"
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

/// Legacy environment variables consulted, in order, when no backend URL is
/// configured through the usual layers.
pub const LEGACY_BACKEND_URL_VARS: [&str; 2] = ["BACKEND_URL", "VITE_BACKEND_URL"];

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use draftdesk::DraftdeskConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = DraftdeskConfig::load().expect("failed to load configuration");
/// let backend = config.resolve_backend_url();
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "DRAFTDESK",
    discovery(
        dotfile_name = ".draftdesk.toml",
        config_file_name = "draftdesk.toml",
        app_name = "draftdesk"
    )
)]
pub struct DraftdeskConfig {
    /// Base URL of the classification backend; `/emails` is appended.
    ///
    /// Can be provided via:
    /// - CLI: `--backend-url <URL>` or `-b <URL>`
    /// - Environment: `DRAFTDESK_BACKEND_URL`, then `BACKEND_URL` or
    ///   `VITE_BACKEND_URL` (legacy)
    /// - Config file: `backend_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub backend_url: Option<String>,

    /// Request timeout for the review item fetch, in seconds.
    ///
    /// Defaults to 30 seconds. Zero is treated as one second.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// File receiving the tracing log.
    ///
    /// The interface owns the terminal, so nothing is logged unless this is
    /// set.
    ///
    /// Can be provided via:
    /// - CLI: `--log-file <PATH>` or `-l <PATH>`
    /// - Environment: `DRAFTDESK_LOG_FILE`
    /// - Config file: `log_file = "..."`
    #[ortho_config(cli_short = 'l')]
    pub log_file: Option<String>,
}

impl Default for DraftdeskConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            log_file: None,
        }
    }
}

impl DraftdeskConfig {
    /// Resolves the backend base URL, falling back to the legacy
    /// `BACKEND_URL` and `VITE_BACKEND_URL` environment variables.
    ///
    /// Blank values count as absent. Returns `None` when no source provides
    /// a URL; the load then fails with a configuration cause instead of
    /// aborting startup.
    #[must_use]
    pub fn resolve_backend_url(&self) -> Option<String> {
        non_blank(self.backend_url.clone()).or_else(|| {
            LEGACY_BACKEND_URL_VARS
                .iter()
                .find_map(|name| non_blank(env::var(name).ok()))
        })
    }

    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds.max(1))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|candidate| !candidate.trim().is_empty())
}
