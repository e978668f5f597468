//! Handler for `push` webhook events.
//!
//! A push to the user's branch is checked for the expected file,
//! `users/<login>.md`, in the head commit's added list:
//! - present: Step 4 (open a pull request) is posted on the training issue
//! - absent: a corrective comment is posted naming the expected file

use tracing::info;

use crate::curriculum::{CurriculumContext, steps};
use crate::effects::GitHubEffect;
use crate::webhooks::events::PushEvent;

use super::HandlerResult;

/// Handles a push event.
///
/// The caller has already filtered out ref create/delete pushes and resolved
/// the curriculum context for the sender.
pub fn handle_push(event: &PushEvent, context: &CurriculumContext) -> HandlerResult {
    let Some(issue) = context.issue_number else {
        return HandlerResult::empty();
    };

    let expected_filename = format!("users/{}.md", event.sender_login);

    let has_expected_file = event
        .head_commit_added
        .iter()
        .any(|filename| *filename == expected_filename);

    if !has_expected_file {
        info!(
            expected = %expected_filename,
            ref_name = %event.ref_name,
            "Head commit doesn't add the expected file; posting corrective comment"
        );
        return HandlerResult::with_effects(vec![GitHubEffect::CreateIssueComment {
            issue,
            body: steps::render_unexpected_file(&event.sender_login, &event.ref_name),
        }]);
    }

    HandlerResult::with_effects(vec![GitHubEffect::CreateIssueComment {
        issue,
        body: steps::render_open_pull_request(&event.ref_name, &event.sender_login),
    }])
}
