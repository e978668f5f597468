//! Best-effort dispatch of outbound effects.
//!
//! A failed write is logged and swallowed, never retried and never allowed to
//! fail the overall event handling: a lost instructional comment is only a
//! cosmetic gap in the conversation, while failing the delivery would make
//! GitHub redeliver the webhook and double-post every comment that did
//! succeed.

use std::fmt::Display;

use tracing::error;

use crate::effects::{GitHubEffect, GitHubInterpreter};

/// Executes each effect in order, logging and swallowing failures.
pub async fn dispatch_effects<I>(interpreter: &I, effects: Vec<GitHubEffect>)
where
    I: GitHubInterpreter,
    I::Error: Display,
{
    for effect in effects {
        if let Err(e) = interpreter.interpret(effect.clone()).await {
            error!(error = %e, effect = ?effect, "Failed to execute effect");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::sync::Mutex;

    use crate::types::IssueNumber;

    /// Records every effect it is asked to execute.
    struct RecordingInterpreter {
        seen: Mutex<Vec<GitHubEffect>>,
    }

    impl GitHubInterpreter for RecordingInterpreter {
        type Error = Infallible;

        async fn interpret(&self, effect: GitHubEffect) -> Result<(), Infallible> {
            self.seen.lock().unwrap().push(effect);
            Ok(())
        }
    }

    /// Fails every other call.
    struct FlakyInterpreter {
        calls: Mutex<u32>,
    }

    impl GitHubInterpreter for FlakyInterpreter {
        type Error = String;

        async fn interpret(&self, _effect: GitHubEffect) -> Result<(), String> {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            if *calls % 2 == 1 {
                Err("boom".to_string())
            } else {
                Ok(())
            }
        }
    }

    fn comment(issue: u64, body: &str) -> GitHubEffect {
        GitHubEffect::CreateIssueComment {
            issue: IssueNumber(issue),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn dispatches_effects_in_order() {
        let interpreter = RecordingInterpreter {
            seen: Mutex::new(Vec::new()),
        };
        let effects = vec![comment(1, "welcome"), comment(1, "assign yourself")];

        dispatch_effects(&interpreter, effects.clone()).await;

        assert_eq!(*interpreter.seen.lock().unwrap(), effects);
    }

    #[tokio::test]
    async fn a_failed_write_does_not_stop_the_rest() {
        let interpreter = FlakyInterpreter {
            calls: Mutex::new(0),
        };
        let effects = vec![comment(1, "a"), comment(1, "b"), comment(1, "c")];

        // Must not panic or bail early; all three effects are attempted.
        dispatch_effects(&interpreter, effects).await;

        assert_eq!(*interpreter.calls.lock().unwrap(), 3);
    }
}
