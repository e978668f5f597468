//! GitHub API client and effect interpreter.
//!
//! This module provides the octocrab-backed implementations of the two seams
//! the core logic depends on:
//! - `IssueDirectory` (the active-issue query behind the curriculum gate)
//! - `GitHubInterpreter` (execution of outbound comment/review effects)
//!
//! plus the best-effort dispatcher that runs a batch of effects and swallows
//! write failures.

mod client;
mod dispatcher;
mod error;
mod interpreter;
mod issues;

pub use client::OctocrabClient;
pub use dispatcher::dispatch_effects;
pub use error::GitHubApiError;
