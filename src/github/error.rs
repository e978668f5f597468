//! GitHub API error type.
//!
//! A thin wrapper over octocrab errors that attaches the operation being
//! attempted. There is deliberately no transient/permanent categorization and
//! no retry machinery here: failed reads surface the delivery as failed (so
//! GitHub's redelivery takes care of retrying), and failed writes are logged
//! and dropped by the dispatcher.

use thiserror::Error;

/// A GitHub API error with context about the failed operation.
#[derive(Debug, Error)]
#[error("GitHub API error while {operation}: {source}")]
pub struct GitHubApiError {
    /// What the client was doing when the call failed.
    pub operation: &'static str,

    /// The underlying octocrab error.
    #[source]
    pub source: octocrab::Error,
}

impl GitHubApiError {
    /// Wraps an octocrab error with the name of the failed operation.
    pub fn new(operation: &'static str, source: octocrab::Error) -> Self {
        Self { operation, source }
    }
}
