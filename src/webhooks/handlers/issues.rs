//! Handler for `issues` webhook events.
//!
//! This is the entry track of the curriculum:
//! - `opened` - greet the user and ask them to assign themselves
//! - `assigned` - introduce the GitHub flow and ask for a branch, but only
//!   when the issue author assigned themselves

use tracing::debug;

use crate::curriculum::steps;
use crate::effects::GitHubEffect;
use crate::webhooks::events::{IssueAction, IssuesEvent};

use super::HandlerResult;

/// Handles an issue event.
///
/// No active-issue gate applies here: the event's own issue is where the
/// comments land, and for `opened` there is nothing assigned yet.
pub fn handle_issues(event: &IssuesEvent) -> HandlerResult {
    match event.action {
        IssueAction::Opened => handle_opened(event),
        IssueAction::Assigned => handle_assigned(event),
    }
}

/// Greets the user on their new training issue.
///
/// Two comments, always in this order: the welcome text, then the Step 1
/// instructions.
fn handle_opened(event: &IssuesEvent) -> HandlerResult {
    HandlerResult::with_effects(vec![
        GitHubEffect::CreateIssueComment {
            issue: event.issue_number,
            body: steps::render_welcome(&event.author_login),
        },
        GitHubEffect::CreateIssueComment {
            issue: event.issue_number,
            body: steps::render_assign_yourself(),
        },
    ])
}

/// Advances to Step 2 when the author assigns themselves.
///
/// Assignment by or to anyone else is silently ignored: the course belongs to
/// the person who opened the issue.
fn handle_assigned(event: &IssuesEvent) -> HandlerResult {
    if event.assignee_login.as_deref() != Some(event.author_login.as_str()) {
        debug!(
            issue = %event.issue_number,
            author = %event.author_login,
            assignee = ?event.assignee_login,
            "Ignoring assignment that is not a self-assignment by the author"
        );
        return HandlerResult::empty();
    }

    HandlerResult::with_effects(vec![
        GitHubEffect::CreateIssueComment {
            issue: event.issue_number,
            body: steps::render_workflow_intro(),
        },
        GitHubEffect::CreateIssueComment {
            issue: event.issue_number,
            body: steps::render_create_branch(&event.repo.owner, &event.repo.repo),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IssueNumber, RepoId};

    fn event(action: IssueAction, author: &str, assignee: Option<&str>) -> IssuesEvent {
        IssuesEvent {
            repo: RepoId::new("myorg", "training"),
            action,
            issue_number: IssueNumber(12),
            author_login: author.to_string(),
            assignee_login: assignee.map(|s| s.to_string()),
        }
    }

    #[test]
    fn opened_posts_welcome_then_assign_yourself() {
        let result = handle_issues(&event(IssueAction::Opened, "alice", None));

        assert_eq!(result.effects.len(), 2);
        match (&result.effects[0], &result.effects[1]) {
            (
                GitHubEffect::CreateIssueComment {
                    issue: first_issue,
                    body: first,
                },
                GitHubEffect::CreateIssueComment {
                    issue: second_issue,
                    body: second,
                },
            ) => {
                assert_eq!(*first_issue, IssueNumber(12));
                assert_eq!(*second_issue, IssueNumber(12));
                assert!(first.contains("Welcome to GitHub Training, @alice!"));
                assert!(second.starts_with("## Step 1: Assign yourself"));
            }
            other => panic!("unexpected effects: {:?}", other),
        }
    }

    #[test]
    fn self_assignment_posts_intro_then_create_branch() {
        let result = handle_issues(&event(IssueAction::Assigned, "alice", Some("alice")));

        assert_eq!(result.effects.len(), 2);
        match (&result.effects[0], &result.effects[1]) {
            (
                GitHubEffect::CreateIssueComment { body: first, .. },
                GitHubEffect::CreateIssueComment { body: second, .. },
            ) => {
                assert!(first.starts_with("## Introduction to a typical workflow"));
                assert!(second.starts_with("## Step 2: Create a branch"));
                assert!(second.contains("myorg/training"));
            }
            other => panic!("unexpected effects: {:?}", other),
        }
    }

    #[test]
    fn assignment_to_someone_else_is_ignored() {
        let result = handle_issues(&event(IssueAction::Assigned, "alice", Some("mentor")));
        assert!(result.is_empty());
    }

    #[test]
    fn assignment_with_no_assignee_is_ignored() {
        let result = handle_issues(&event(IssueAction::Assigned, "alice", None));
        assert!(result.is_empty());
    }
}
