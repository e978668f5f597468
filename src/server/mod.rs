//! HTTP server for the training bot.
//!
//! This module implements the HTTP server that accepts webhooks from GitHub,
//! validates signatures, and handles each delivery inline.
//!
//! # Endpoints
//!
//! - `POST /webhook` - Accepts GitHub webhook deliveries
//! - `GET /health` - Returns 200 if server is running

use std::sync::Arc;

use octocrab::Octocrab;

pub mod health;
pub mod webhook;

pub use health::health_handler;
pub use webhook::webhook_handler;

/// Shared application state.
///
/// This is passed to all handlers via Axum's `State` extractor. It contains
/// the authenticated octocrab instance (repo-scoped clients are derived from
/// it per delivery) and the webhook secret.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// The authenticated GitHub API client.
    octocrab: Octocrab,

    /// Webhook secret for HMAC-SHA256 signature verification.
    webhook_secret: Vec<u8>,
}

impl AppState {
    /// Creates a new `AppState` with the given configuration.
    pub fn new(octocrab: Octocrab, webhook_secret: impl Into<Vec<u8>>) -> Self {
        AppState {
            inner: Arc::new(AppStateInner {
                octocrab,
                webhook_secret: webhook_secret.into(),
            }),
        }
    }

    /// Returns the shared octocrab instance.
    pub fn octocrab(&self) -> &Octocrab {
        &self.inner.octocrab
    }

    /// Returns the webhook secret.
    pub fn webhook_secret(&self) -> &[u8] {
        &self.inner.webhook_secret
    }
}

/// Builds the axum Router with all endpoints.
pub fn build_router(app_state: AppState) -> axum::Router {
    use axum::routing::{get, post};

    axum::Router::new()
        .route("/webhook", post(webhook_handler))
        .route("/health", get(health_handler))
        .with_state(app_state)
}
