//! Errors that stop the application before or while the interface runs.

use thiserror::Error;

/// Failure during application startup or terminal handling.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StartupError {
    /// Configuration could not be loaded or is unusable.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the problem.
        message: String,
    },

    /// The tracing log could not be set up.
    #[error("failed to initialise logging: {message}")]
    Logging {
        /// Description of the problem.
        message: String,
    },

    /// The terminal interface failed to start or exited abnormally.
    #[error("terminal interface failed: {message}")]
    Terminal {
        /// Description of the problem.
        message: String,
    },
}
