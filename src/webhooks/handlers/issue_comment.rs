//! Handler for `issue_comment` webhook events.
//!
//! The bot receives these deliveries but no curriculum step is attached to
//! commenting, so they are decoded, logged, and dropped.

use tracing::debug;

use crate::webhooks::events::IssueCommentEvent;

use super::HandlerResult;

/// Handles an issue comment event. Always a no-op.
pub fn handle_issue_comment(event: &IssueCommentEvent) -> HandlerResult {
    debug!(
        issue = %event.issue_number,
        action = ?event.action,
        author = %event.author_login,
        "No curriculum step is attached to issue comments"
    );
    HandlerResult::empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IssueNumber, RepoId};
    use crate::webhooks::events::CommentAction;

    #[test]
    fn comments_never_produce_effects() {
        for action in [
            CommentAction::Created,
            CommentAction::Edited,
            CommentAction::Deleted,
        ] {
            let event = IssueCommentEvent {
                repo: RepoId::new("myorg", "training"),
                action,
                issue_number: IssueNumber(1),
                author_login: "alice".to_string(),
            };
            assert!(handle_issue_comment(&event).is_empty());
        }
    }
}
