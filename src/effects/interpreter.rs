//! Effect interpreter trait.
//!
//! The trait defines how effects are executed. The production implementation
//! (octocrab-based) lives in `crate::github`; tests provide mock interpreters
//! that record effects instead of performing I/O.

use std::future::Future;

use super::GitHubEffect;

/// Interprets GitHub effects against the GitHub API.
///
/// Implementations are constructed with a `RepoId`, so all effects executed
/// through a single interpreter instance are scoped to that repository.
///
/// # Example (mock for testing)
///
/// ```ignore
/// struct RecordingInterpreter {
///     seen: Mutex<Vec<GitHubEffect>>,
/// }
///
/// impl GitHubInterpreter for RecordingInterpreter {
///     type Error = Infallible;
///
///     async fn interpret(&self, effect: GitHubEffect) -> Result<(), Self::Error> {
///         self.seen.lock().unwrap().push(effect);
///         Ok(())
///     }
/// }
/// ```
pub trait GitHubInterpreter {
    /// The error type returned by this interpreter.
    type Error;

    /// Execute a GitHub effect.
    fn interpret(
        &self,
        effect: GitHubEffect,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
