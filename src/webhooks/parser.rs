//! GitHub webhook payload parser.
//!
//! This module parses raw webhook JSON payloads into typed [`TrainingEvent`]
//! values. The parser is designed to be robust against unknown fields and
//! event types.
//!
//! # Parsing Strategy
//!
//! 1. The event type is determined from the `X-GitHub-Event` header
//! 2. The payload is parsed according to the event type
//! 3. Unknown event types return `Ok(None)` (ignored, not error)
//! 4. Known event types with actions the curriculum never reacts to also
//!    return `Ok(None)`
//! 5. Malformed payloads return `Err` with details
//!
//! Only structural parseability is checked here; business validation (e.g.
//! "does this actor have an open issue") happens downstream.

use serde::Deserialize;
use thiserror::Error;

use crate::types::{IssueNumber, PrNumber, RepoId};

use super::events::{
    CommentAction, CreateEvent, IssueAction, IssueCommentEvent, IssuesEvent, PrAction,
    PullRequestEvent, PushEvent, RefType, TrainingEvent,
};

/// Error type for webhook parsing failures.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON deserialization failed (includes missing required fields).
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Field has invalid value (e.g., unknown ref type).
    #[error("invalid field value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },
}

/// Parses a webhook payload into a typed event.
///
/// # Arguments
///
/// * `event_type` - The value of the `X-GitHub-Event` header
/// * `payload` - The raw JSON payload bytes
///
/// # Returns
///
/// * `Ok(Some(event))` - Successfully parsed a known event type
/// * `Ok(None)` - Unknown event type or unhandled action (ignored, not an error)
/// * `Err(e)` - Malformed payload or missing required fields
pub fn parse_webhook(event_type: &str, payload: &[u8]) -> Result<Option<TrainingEvent>, ParseError> {
    match event_type {
        "issues" => parse_issues(payload).map(|opt| opt.map(TrainingEvent::Issues)),
        "issue_comment" => {
            parse_issue_comment(payload).map(|e| Some(TrainingEvent::IssueComment(e)))
        }
        "create" => parse_create(payload).map(|e| Some(TrainingEvent::Create(e))),
        "push" => parse_push(payload).map(|e| Some(TrainingEvent::Push(e))),
        "pull_request" => parse_pull_request(payload).map(|opt| opt.map(TrainingEvent::PullRequest)),
        // Unknown event types are ignored (not an error)
        _ => Ok(None),
    }
}

// ============================================================================
// Raw payload structures for deserialization
//
// These match GitHub's webhook JSON structure. We use Option<T> liberally to
// handle missing fields gracefully, then validate required fields explicitly.
// ============================================================================

/// Minimal repository info present in most webhook payloads.
#[derive(Debug, Deserialize)]
struct RawRepository {
    owner: RawOwner,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawOwner {
    login: String,
}

/// Minimal user info.
#[derive(Debug, Deserialize)]
struct RawUser {
    login: String,
}

// ============================================================================
// issues event
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawIssuesPayload {
    action: String,
    issue: RawIssue,
    repository: RawRepository,
}

#[derive(Debug, Deserialize)]
struct RawIssue {
    number: u64,
    user: RawUser,
    assignee: Option<RawUser>,
}

fn parse_issues(payload: &[u8]) -> Result<Option<IssuesEvent>, ParseError> {
    let raw: RawIssuesPayload = serde_json::from_slice(payload)?;

    let action = match raw.action.as_str() {
        "opened" => IssueAction::Opened,
        "assigned" => IssueAction::Assigned,
        // Other actions (closed, labeled, etc.) are not relevant to us
        _ => return Ok(None),
    };

    Ok(Some(IssuesEvent {
        repo: RepoId::new(raw.repository.owner.login, raw.repository.name),
        action,
        issue_number: IssueNumber(raw.issue.number),
        author_login: raw.issue.user.login,
        assignee_login: raw.issue.assignee.map(|a| a.login),
    }))
}

// ============================================================================
// issue_comment event
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawIssueCommentPayload {
    action: String,
    comment: RawComment,
    issue: RawCommentIssue,
    repository: RawRepository,
}

#[derive(Debug, Deserialize)]
struct RawComment {
    user: RawUser,
}

#[derive(Debug, Deserialize)]
struct RawCommentIssue {
    number: u64,
}

fn parse_issue_comment(payload: &[u8]) -> Result<IssueCommentEvent, ParseError> {
    let raw: RawIssueCommentPayload = serde_json::from_slice(payload)?;

    let action = match raw.action.as_str() {
        "created" => CommentAction::Created,
        "edited" => CommentAction::Edited,
        "deleted" => CommentAction::Deleted,
        other => {
            return Err(ParseError::InvalidField {
                field: "action",
                value: other.to_string(),
            });
        }
    };

    Ok(IssueCommentEvent {
        repo: RepoId::new(raw.repository.owner.login, raw.repository.name),
        action,
        issue_number: IssueNumber(raw.issue.number),
        author_login: raw.comment.user.login,
    })
}

// ============================================================================
// create event
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawCreatePayload {
    #[serde(rename = "ref")]
    ref_name: String,
    ref_type: String,
    sender: RawUser,
    repository: RawRepository,
}

fn parse_create(payload: &[u8]) -> Result<CreateEvent, ParseError> {
    let raw: RawCreatePayload = serde_json::from_slice(payload)?;

    let ref_type = match raw.ref_type.as_str() {
        "branch" => RefType::Branch,
        "tag" => RefType::Tag,
        other => {
            return Err(ParseError::InvalidField {
                field: "ref_type",
                value: other.to_string(),
            });
        }
    };

    Ok(CreateEvent {
        repo: RepoId::new(raw.repository.owner.login, raw.repository.name),
        ref_type,
        ref_name: raw.ref_name,
        sender_login: raw.sender.login,
    })
}

// ============================================================================
// push event
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawPushPayload {
    #[serde(rename = "ref")]
    ref_name: String,
    created: Option<bool>,
    deleted: Option<bool>,
    head_commit: Option<RawHeadCommit>,
    sender: RawUser,
    repository: RawPushRepository,
}

/// Push payloads use the commit-oriented repository shape, where `owner` has
/// a `name` field (and often, but not always, a `login` field too).
#[derive(Debug, Deserialize)]
struct RawPushRepository {
    owner: RawPushOwner,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawPushOwner {
    name: Option<String>,
    login: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawHeadCommit {
    #[serde(default)]
    added: Vec<String>,
}

fn parse_push(payload: &[u8]) -> Result<PushEvent, ParseError> {
    let raw: RawPushPayload = serde_json::from_slice(payload)?;

    let owner = raw
        .repository
        .owner
        .name
        .or(raw.repository.owner.login)
        .ok_or(ParseError::InvalidField {
            field: "repository.owner",
            value: "missing both name and login".to_string(),
        })?;

    Ok(PushEvent {
        repo: RepoId::new(owner, raw.repository.name),
        ref_name: raw.ref_name,
        created: raw.created.unwrap_or(false),
        deleted: raw.deleted.unwrap_or(false),
        sender_login: raw.sender.login,
        head_commit_added: raw.head_commit.map(|c| c.added).unwrap_or_default(),
    })
}

// ============================================================================
// pull_request event
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawPullRequestPayload {
    action: String,
    pull_request: RawPullRequest,
    sender: RawUser,
    repository: RawRepository,
}

#[derive(Debug, Deserialize)]
struct RawPullRequest {
    number: u64,
    body: Option<String>,
    commits: Option<u64>,
    merged: Option<bool>,
}

fn parse_pull_request(payload: &[u8]) -> Result<Option<PullRequestEvent>, ParseError> {
    let raw: RawPullRequestPayload = serde_json::from_slice(payload)?;

    let action = match raw.action.as_str() {
        "opened" => PrAction::Opened,
        "reopened" => PrAction::Reopened,
        "edited" => PrAction::Edited,
        "synchronize" => PrAction::Synchronize,
        "closed" => PrAction::Closed,
        // Other actions (assigned, labeled, etc.) are not relevant to us
        _ => return Ok(None),
    };

    Ok(Some(PullRequestEvent {
        repo: RepoId::new(raw.repository.owner.login, raw.repository.name),
        action,
        pr_number: PrNumber(raw.pull_request.number),
        body: raw.pull_request.body.unwrap_or_default(),
        commits: raw.pull_request.commits.unwrap_or(0),
        merged: raw.pull_request.merged.unwrap_or(false),
        sender_login: raw.sender.login,
    }))
}
