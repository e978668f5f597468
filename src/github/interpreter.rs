//! GitHub effect interpreter using octocrab.
//!
//! Executes [`GitHubEffect`] values against the real GitHub API:
//! - comments (on issues and on PR conversations, which share the
//!   issue-comment endpoint)
//! - reviews, via a direct `POST /repos/{owner}/{repo}/pulls/{pr}/reviews`
//!   since octocrab's typed surface doesn't cover review submission with
//!   draft comments

use serde::Serialize;

use crate::effects::{DraftReviewComment, GitHubEffect, GitHubInterpreter, ReviewVerdict};
use crate::types::PrNumber;

use super::client::OctocrabClient;
use super::error::GitHubApiError;

/// Request body for the create-review endpoint.
#[derive(Debug, Serialize)]
struct ReviewRequest<'a> {
    body: &'a str,
    event: &'static str,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    comments: &'a [DraftReviewComment],
}

impl GitHubInterpreter for OctocrabClient {
    type Error = GitHubApiError;

    async fn interpret(&self, effect: GitHubEffect) -> Result<(), Self::Error> {
        match effect {
            GitHubEffect::CreateIssueComment { issue, body } => {
                create_comment(self, issue.0, &body).await
            }
            // A PR's conversation is its issue, so the same endpoint applies.
            GitHubEffect::CreatePullRequestComment { pr, body } => {
                create_comment(self, pr.0, &body).await
            }
            GitHubEffect::CreateReview {
                pr,
                verdict,
                body,
                comments,
            } => create_review(self, pr, verdict, &body, &comments).await,
        }
    }
}

async fn create_comment(
    client: &OctocrabClient,
    number: u64,
    body: &str,
) -> Result<(), GitHubApiError> {
    client
        .inner()
        .issues(client.owner(), client.repo_name())
        .create_comment(number, body)
        .await
        .map_err(|e| GitHubApiError::new("creating comment", e))?;
    Ok(())
}

async fn create_review(
    client: &OctocrabClient,
    pr: PrNumber,
    verdict: ReviewVerdict,
    body: &str,
    comments: &[DraftReviewComment],
) -> Result<(), GitHubApiError> {
    let route = format!(
        "/repos/{}/{}/pulls/{}/reviews",
        client.owner(),
        client.repo_name(),
        pr.0
    );
    let request = ReviewRequest {
        body,
        event: verdict.as_api_str(),
        comments,
    };

    let _review: octocrab::models::pulls::Review = client
        .inner()
        .post(route, Some(&request))
        .await
        .map_err(|e| GitHubApiError::new("creating review", e))?;
    Ok(())
}
