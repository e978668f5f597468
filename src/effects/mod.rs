//! Effects-as-data for outbound GitHub operations.
//!
//! This module defines effect types that describe API writes without executing
//! them. Handlers return effects as data, which keeps the routing logic pure
//! and testable without I/O; the interpreter in `crate::github` executes them
//! against the real API.

use serde::{Deserialize, Serialize};

use crate::types::{IssueNumber, PrNumber};

pub mod interpreter;

pub use interpreter::GitHubInterpreter;

/// The verdict submitted with a pull request review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewVerdict {
    /// Request changes on the PR.
    RequestChanges,
    /// Approve the PR.
    Approve,
}

impl ReviewVerdict {
    /// Returns the GitHub API event string for this verdict.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            ReviewVerdict::RequestChanges => "REQUEST_CHANGES",
            ReviewVerdict::Approve => "APPROVE",
        }
    }
}

/// An inline comment attached to a file position as part of a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftReviewComment {
    /// The path of the file to comment on.
    pub path: String,
    /// The position in the diff to attach the comment to.
    pub position: u64,
    /// The comment text.
    pub body: String,
}

/// A GitHub API effect.
///
/// Each variant describes an outbound write. Effects are repo-scoped: the
/// interpreter is constructed with a `RepoId`, so effects don't include it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GitHubEffect {
    /// Post a comment on an issue.
    CreateIssueComment { issue: IssueNumber, body: String },

    /// Post a comment on a pull request's conversation tab.
    ///
    /// GitHub delivers these through the issue-comment API (a PR's
    /// conversation is its issue), but the distinction is kept here because
    /// the curriculum targets issues and PRs at different steps.
    CreatePullRequestComment { pr: PrNumber, body: String },

    /// Submit a review on a pull request, optionally with inline draft
    /// comments.
    CreateReview {
        pr: PrNumber,
        verdict: ReviewVerdict,
        body: String,
        comments: Vec<DraftReviewComment>,
    },
}
