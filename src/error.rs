//! Error types for the fetch pipeline.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while fetching and serializing a page.
///
/// An empty selection is not an error; it yields an empty output string.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The browser process could not be started
    #[error("failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Navigation did not complete (DNS failure, connection refused, timeout)
    #[error("navigation failed: {0}")]
    NavigationFailed(String),

    /// The in-page extraction script threw or returned an unusable value
    #[error("page script evaluation failed: {0}")]
    EvaluationFailed(String),

    /// The browser tab could not be acquired or torn down
    #[error("tab operation failed: {0}")]
    TabOperationFailed(String),
}
