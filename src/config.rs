//! Environment-driven configuration.

use anyhow::{Context, Result};
use std::env;

/// Runtime configuration, read from the environment at startup.
#[derive(Clone)]
pub struct Config {
    /// Token used to authenticate against the GitHub API.
    ///
    /// Installation-token minting belongs to the deployment environment; the
    /// bot accepts any pre-provisioned token here.
    pub github_token: String,

    /// Shared secret for webhook signature verification.
    pub github_webhook_secret: String,

    /// Port to listen on.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_token =
            env::var("GITHUB_TOKEN").context("GITHUB_TOKEN environment variable is required")?;

        let github_webhook_secret = env::var("GITHUB_WEBHOOK_SECRET")
            .context("GITHUB_WEBHOOK_SECRET environment variable is required")?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid number")?;

        Ok(Config {
            github_token,
            github_webhook_secret,
            port,
        })
    }
}
