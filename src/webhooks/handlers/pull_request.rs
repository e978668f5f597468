//! Handler for `pull_request` webhook events.
//!
//! This handler covers the back half of the curriculum:
//! - `opened`/`reopened` - Step 5: ask the user to link the PR to their issue
//! - `edited` - Step 6: change-request review, once the body links the issue
//! - `synchronize` - Step 7: approving review, once a second commit lands
//! - `closed` (merged) - completion comment

use tracing::info;

use crate::curriculum::{CurriculumContext, steps};
use crate::effects::{DraftReviewComment, GitHubEffect, ReviewVerdict};
use crate::types::IssueNumber;
use crate::webhooks::events::{PrAction, PullRequestEvent};

use super::HandlerResult;

/// Handles a pull request event.
///
/// The caller has already resolved the curriculum context for the sender.
pub fn handle_pull_request(event: &PullRequestEvent, context: &CurriculumContext) -> HandlerResult {
    let Some(issue) = context.issue_number else {
        return HandlerResult::empty();
    };

    match event.action {
        PrAction::Opened | PrAction::Reopened => handle_opened(event, issue),
        PrAction::Edited => handle_edited(event, issue),
        PrAction::Synchronize => handle_synchronize(event),
        PrAction::Closed => handle_closed(event),
    }
}

/// Asks the user to link the new PR to their training issue.
fn handle_opened(event: &PullRequestEvent, issue: IssueNumber) -> HandlerResult {
    HandlerResult::with_effects(vec![GitHubEffect::CreatePullRequestComment {
        pr: event.pr_number,
        body: steps::render_link_pull_request(issue),
    }])
}

/// Submits the Step 6 change-request review once the body links the issue.
///
/// The check is for the literal text `Resolves #<issue>`; an edit that doesn't
/// add it (fixing a typo in the title, say) is ignored so the user can edit
/// freely until the link is in place.
fn handle_edited(event: &PullRequestEvent, issue: IssueNumber) -> HandlerResult {
    if !event.body.contains(&format!("Resolves #{}", issue.0)) {
        info!(
            pr = %event.pr_number,
            "Dropping pr edited event because it doesn't contain issue link"
        );
        return HandlerResult::empty();
    }

    HandlerResult::with_effects(vec![GitHubEffect::CreateReview {
        pr: event.pr_number,
        verdict: ReviewVerdict::RequestChanges,
        body: steps::render_respond_to_review(
            &event.repo.owner,
            &event.repo.repo,
            event.pr_number,
        ),
        comments: vec![DraftReviewComment {
            path: format!("users/{}.md", event.sender_login),
            position: 1,
            body: steps::REVIEW_FILE_PROMPT.to_string(),
        }],
    }])
}

/// Submits the Step 7 approving review once a second commit lands.
fn handle_synchronize(event: &PullRequestEvent) -> HandlerResult {
    if event.commits <= 1 {
        info!(
            pr = %event.pr_number,
            commits = event.commits,
            "Dropping pr sync event because it doesn't contain multiple commits"
        );
        return HandlerResult::empty();
    }

    HandlerResult::with_effects(vec![GitHubEffect::CreateReview {
        pr: event.pr_number,
        verdict: ReviewVerdict::Approve,
        body: steps::render_merge_pull_request(&event.sender_login),
        comments: Vec::new(),
    }])
}

/// Congratulates the user once their PR is merged.
fn handle_closed(event: &PullRequestEvent) -> HandlerResult {
    if !event.merged {
        info!(
            pr = %event.pr_number,
            "Dropping pr closed event because the pull request wasn't merged"
        );
        return HandlerResult::empty();
    }

    HandlerResult::with_effects(vec![GitHubEffect::CreatePullRequestComment {
        pr: event.pr_number,
        body: steps::render_course_complete(&event.sender_login),
    }])
}
