//! The active-issue query behind the curriculum gate.
//!
//! Implements [`IssueDirectory`] for [`OctocrabClient`] by listing open issues
//! in the scoped repository filtered by assignee. The result is returned in
//! the API's native order; the gate in `crate::curriculum` takes the first
//! item.

use octocrab::params;

use crate::curriculum::IssueDirectory;
use crate::types::IssueNumber;

use super::client::OctocrabClient;
use super::error::GitHubApiError;

impl IssueDirectory for OctocrabClient {
    type Error = GitHubApiError;

    async fn list_assigned_issues(
        &self,
        assignee: &str,
    ) -> Result<Vec<IssueNumber>, GitHubApiError> {
        let page = self
            .inner()
            .issues(self.owner(), self.repo_name())
            .list()
            .assignee(assignee)
            .state(params::State::Open)
            .send()
            .await
            .map_err(|e| GitHubApiError::new("listing issues by assignee", e))?;

        Ok(page
            .items
            .into_iter()
            .map(|issue| IssueNumber(issue.number))
            .collect())
    }
}
