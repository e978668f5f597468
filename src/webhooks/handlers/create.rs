//! Handler for `create` webhook events.
//!
//! When the user creates a branch, Step 3 (commit a file) is posted on their
//! training issue, referencing the new branch by name.

use crate::curriculum::{CurriculumContext, steps};
use crate::effects::GitHubEffect;
use crate::webhooks::events::CreateEvent;

use super::HandlerResult;

/// Handles a branch creation event.
///
/// The caller has already filtered out tag creations and resolved the
/// curriculum context for the sender.
pub fn handle_create(event: &CreateEvent, context: &CurriculumContext) -> HandlerResult {
    let Some(issue) = context.issue_number else {
        return HandlerResult::empty();
    };

    HandlerResult::with_effects(vec![GitHubEffect::CreateIssueComment {
        issue,
        body: steps::render_commit_file(&event.ref_name, &event.sender_login),
    }])
}
