//! GitHub webhook event types.
//!
//! This module defines typed representations of the GitHub webhook events the
//! training bot handles. Each record carries only the fields the curriculum
//! needs for routing and rendering.
//!
//! # Event Types
//!
//! - `issues` - Issue lifecycle (opened, assigned)
//! - `issue_comment` - Comment activity (decoded but no step is attached)
//! - `create` - Branch/tag creation
//! - `push` - Commits pushed to a branch
//! - `pull_request` - PR lifecycle (opened, reopened, edited, synchronize, closed)

use crate::types::{IssueNumber, PrNumber, RepoId};

/// A parsed GitHub webhook event.
///
/// This enum contains only the event kinds the bot cares about. Unknown or
/// irrelevant events are represented by returning `None` from the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainingEvent {
    /// An issue was opened or assigned.
    Issues(IssuesEvent),

    /// An issue or PR comment was created, edited, or deleted.
    ///
    /// The bot decodes these but attaches no curriculum step to them.
    IssueComment(IssueCommentEvent),

    /// A branch or tag was created.
    Create(CreateEvent),

    /// Commits were pushed to a ref.
    Push(PushEvent),

    /// A pull request was opened, reopened, edited, synchronized, or closed.
    PullRequest(PullRequestEvent),
}

impl TrainingEvent {
    /// Returns the repository this event belongs to.
    pub fn repo(&self) -> &RepoId {
        match self {
            TrainingEvent::Issues(e) => &e.repo,
            TrainingEvent::IssueComment(e) => &e.repo,
            TrainingEvent::Create(e) => &e.repo,
            TrainingEvent::Push(e) => &e.repo,
            TrainingEvent::PullRequest(e) => &e.repo,
        }
    }
}

/// Action performed on an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueAction {
    /// Issue was opened.
    Opened,
    /// Issue was assigned to someone.
    Assigned,
}

/// An issue event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuesEvent {
    /// The repository.
    pub repo: RepoId,

    /// The action that triggered this event.
    pub action: IssueAction,

    /// The issue number.
    pub issue_number: IssueNumber,

    /// The login of the user who opened the issue.
    pub author_login: String,

    /// The login of the issue's current assignee, if any.
    ///
    /// Set from the issue's `assignee` field, which is how the self-assignment
    /// check compares against the author.
    pub assignee_login: Option<String>,
}

/// Action performed on an issue comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentAction {
    /// Comment was created.
    Created,
    /// Comment was edited.
    Edited,
    /// Comment was deleted.
    Deleted,
}

/// An issue/PR comment event.
///
/// In GitHub's model, comments on the PR conversation tab are "issue comments"
/// even when they're on a PR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueCommentEvent {
    /// The repository.
    pub repo: RepoId,

    /// The action that triggered this event.
    pub action: CommentAction,

    /// The issue (or PR) number the comment is on.
    pub issue_number: IssueNumber,

    /// The comment author's login name.
    pub author_login: String,
}

/// The kind of ref a `create` event is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefType {
    /// A branch was created.
    Branch,
    /// A tag was created.
    Tag,
}

/// A branch/tag creation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    /// The repository.
    pub repo: RepoId,

    /// Whether a branch or a tag was created.
    pub ref_type: RefType,

    /// The name of the created ref (bare branch/tag name, e.g. "feat/bob-1").
    pub ref_name: String,

    /// The login of the user who created the ref.
    pub sender_login: String,
}

/// A push event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushEvent {
    /// The repository.
    pub repo: RepoId,

    /// The full ref that was pushed to (e.g. "refs/heads/feat/bob-1").
    pub ref_name: String,

    /// Whether this push created the ref.
    pub created: bool,

    /// Whether this push deleted the ref.
    pub deleted: bool,

    /// The login of the user who pushed.
    pub sender_login: String,

    /// Paths added by the head commit of the push.
    pub head_commit_added: Vec<String>,
}

/// Action performed on a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrAction {
    /// PR was opened.
    Opened,
    /// PR was reopened.
    Reopened,
    /// PR was edited (title, body, or base branch changed).
    Edited,
    /// PR head was updated (new commits pushed).
    Synchronize,
    /// PR was closed (merged or not).
    Closed,
}

/// A pull request event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestEvent {
    /// The repository.
    pub repo: RepoId,

    /// The action that triggered this event.
    pub action: PrAction,

    /// The PR number.
    pub pr_number: PrNumber,

    /// The PR body text (empty when GitHub sends null).
    pub body: String,

    /// The number of commits on the PR.
    pub commits: u64,

    /// Whether the PR was merged (only meaningful for `closed` action).
    pub merged: bool,

    /// The login of the user who triggered the event.
    pub sender_login: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_is_consistent_across_kinds() {
        let repo = RepoId::new("octocat", "training");

        let event = TrainingEvent::Create(CreateEvent {
            repo: repo.clone(),
            ref_type: RefType::Branch,
            ref_name: "feat/octocat-1".to_string(),
            sender_login: "octocat".to_string(),
        });
        assert_eq!(event.repo(), &repo);

        let event = TrainingEvent::Push(PushEvent {
            repo: repo.clone(),
            ref_name: "refs/heads/feat/octocat-1".to_string(),
            created: false,
            deleted: false,
            sender_login: "octocat".to_string(),
            head_commit_added: vec!["users/octocat.md".to_string()],
        });
        assert_eq!(event.repo(), &repo);
    }
}
