//! Git Training Bot - A GitHub bot that walks new users through the GitHub flow.
//!
//! The bot listens for repository webhooks (issues, branch creation, pushes,
//! pull requests) and responds with templated instructional comments that guide
//! a user through a fixed sequence of onboarding steps, from assigning
//! themselves an issue to merging their first pull request.
//!
//! No progress counter is stored anywhere: each step is triggered by observable
//! repository facts (an open issue assigned to the actor, a file in a commit,
//! a phrase in a PR body), so redelivered or reordered webhooks converge on the
//! same outcome.

pub mod config;
pub mod curriculum;
pub mod effects;
pub mod github;
pub mod server;
pub mod types;
pub mod webhooks;
