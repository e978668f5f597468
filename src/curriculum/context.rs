//! The activity gate for the curriculum.
//!
//! Every step past the initial issue track is gated on one repository fact:
//! does an open issue assigned to this actor exist? That issue is where the
//! bot posts instructions, and its absence means the actor never started the
//! course (or already finished it), so events from them are ignored.
//!
//! The context is recomputed from the live repository on every event; it is
//! never cached or persisted.

use std::future::Future;

use tracing::info;

use crate::types::IssueNumber;

/// Lists open issues assigned to an actor, in the API's native order.
///
/// This is the seam between the curriculum gate and the GitHub API.
/// The production implementation lives on `crate::github::OctocrabClient`;
/// tests substitute an in-memory directory.
pub trait IssueDirectory {
    /// The error type returned by the underlying query.
    type Error;

    /// Returns the numbers of open issues assigned to `assignee` in the
    /// repository this directory is scoped to, in the order the API returned
    /// them.
    fn list_assigned_issues(
        &self,
        assignee: &str,
    ) -> impl Future<Output = Result<Vec<IssueNumber>, Self::Error>> + Send;
}

/// Whether the curriculum is active for an actor, and on which issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurriculumContext {
    /// The issue tracking the actor's progress, if any.
    pub issue_number: Option<IssueNumber>,
}

impl CurriculumContext {
    /// Returns true if an active issue exists for the actor.
    pub fn applicable(&self) -> bool {
        self.issue_number.is_some()
    }
}

/// Finds the active issue for an actor.
///
/// Queries open issues assigned to `assignee` and takes the **first** item in
/// the API's native order. No sort is imposed; with multiple assigned issues
/// the first listed wins, matching the behavior users have come to rely on.
///
/// An empty result is the expected "curriculum not active" case, not a fault:
/// it is logged at info level and reported through the returned context.
/// Transport errors propagate unmodified.
pub async fn find_active_issue<D: IssueDirectory>(
    directory: &D,
    assignee: &str,
) -> Result<CurriculumContext, D::Error> {
    let issues = directory.list_assigned_issues(assignee).await?;

    match issues.first() {
        None => {
            info!(
                assignee,
                "Dropping event because no issues in repo assigned to actor"
            );
            Ok(CurriculumContext { issue_number: None })
        }
        Some(&issue_number) => Ok(CurriculumContext {
            issue_number: Some(issue_number),
        }),
    }
}
