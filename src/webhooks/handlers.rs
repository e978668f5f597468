//! Event handlers for GitHub webhook events.
//!
//! This module maps webhook events to outbound effects. Handlers are pure
//! functions following the effects-as-data pattern: they take the event plus
//! the resolved curriculum context and return effects to execute, without
//! performing any I/O. The async [`process_event`] orchestrator is the only
//! place that touches the network, and only to resolve the context.
//!
//! # Routing
//!
//! | Event | Action | Gate | Effect |
//! |-------|--------|------|--------|
//! | `issues` | `opened` | none | welcome + assign-yourself comments |
//! | `issues` | `assigned` | assignee == author | workflow-intro + create-branch comments |
//! | `issue_comment` | any | - | none |
//! | `create` | branch ref | active issue | commit-a-file comment |
//! | `push` | not a ref create/delete | active issue | open-a-PR comment, or corrective comment if `users/<login>.md` wasn't added |
//! | `pull_request` | `opened`/`reopened` | active issue | link-PR comment |
//! | `pull_request` | `edited` | active issue + body links issue | change-request review |
//! | `pull_request` | `synchronize` | active issue + >1 commit | approving review |
//! | `pull_request` | `closed` | active issue + merged | completion comment |
//!
//! Any pair not in this table is a no-op: logged and ignored, not an error.

mod create;
mod issue_comment;
mod issues;
mod pull_request;
mod push;

use tracing::debug;

use crate::curriculum::{IssueDirectory, find_active_issue};
use crate::effects::GitHubEffect;

use super::events::{RefType, TrainingEvent};

pub use create::handle_create;
pub use issue_comment::handle_issue_comment;
pub use issues::handle_issues;
pub use pull_request::handle_pull_request;
pub use push::handle_push;

/// Result of handling an event: the effects to execute, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResult {
    /// Effects to execute (comment/review creation).
    pub effects: Vec<GitHubEffect>,
}

impl HandlerResult {
    /// Creates an empty result (no effects).
    pub fn empty() -> Self {
        HandlerResult {
            effects: Vec::new(),
        }
    }

    /// Creates a result with the given effects.
    pub fn with_effects(effects: Vec<GitHubEffect>) -> Self {
        HandlerResult { effects }
    }

    /// Returns true if this result has no effects.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

/// Handles a GitHub webhook event.
///
/// This is the main entry point for event handling. It performs the cheap
/// payload-level pre-checks first (so no upstream query is made for deliveries
/// that can never fire a step), resolves the curriculum context for the gated
/// tracks via `directory`, and dispatches to the pure per-kind handler.
///
/// # Errors
///
/// The only fallible operation is the active-issue query; its errors propagate
/// unmodified so the caller can surface the delivery as failed (and
/// retryable). An inapplicable event is a successful empty result, never an
/// error.
pub async fn process_event<D: IssueDirectory>(
    event: &TrainingEvent,
    directory: &D,
) -> Result<HandlerResult, D::Error> {
    match event {
        TrainingEvent::Issues(e) => Ok(handle_issues(e)),

        TrainingEvent::IssueComment(e) => Ok(handle_issue_comment(e)),

        TrainingEvent::Create(e) => {
            if e.ref_type != RefType::Branch {
                debug!(ref_name = %e.ref_name, "Ignoring create event for non-branch ref");
                return Ok(HandlerResult::empty());
            }
            let context = find_active_issue(directory, &e.sender_login).await?;
            Ok(handle_create(e, &context))
        }

        TrainingEvent::Push(e) => {
            if e.created || e.deleted {
                debug!(ref_name = %e.ref_name, "Dropping push event because it was a ref create or delete");
                return Ok(HandlerResult::empty());
            }
            let context = find_active_issue(directory, &e.sender_login).await?;
            Ok(handle_push(e, &context))
        }

        TrainingEvent::PullRequest(e) => {
            let context = find_active_issue(directory, &e.sender_login).await?;
            Ok(handle_pull_request(e, &context))
        }
    }
}
