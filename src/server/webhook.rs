//! Webhook endpoint handler.
//!
//! Accepts GitHub webhook deliveries, validates signatures, and handles each
//! delivery inline: decode, route, and dispatch the resulting effects
//! best-effort. A delivery is only reported as failed (non-2xx) when the
//! payload is malformed or the active-issue query fails; write failures are
//! swallowed by the dispatcher so that GitHub's redelivery doesn't double-post
//! the comments that did go through.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::AppState;
use crate::github::{GitHubApiError, OctocrabClient, dispatch_effects};
use crate::types::DeliveryId;
use crate::webhooks::{ParseError, parse_webhook, process_event, verify_signature};

/// Header name for GitHub event type.
const HEADER_EVENT: &str = "x-github-event";
/// Header name for GitHub delivery ID.
const HEADER_DELIVERY: &str = "x-github-delivery";
/// Header name for GitHub signature.
const HEADER_SIGNATURE: &str = "x-hub-signature-256";

/// Errors that can occur when processing a webhook.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Missing required header.
    #[error("missing required header: {0}")]
    MissingHeader(&'static str),

    /// Invalid signature.
    #[error("invalid signature")]
    InvalidSignature,

    /// The payload doesn't parse as its declared event kind.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] ParseError),

    /// The active-issue query failed; the delivery should be redelivered.
    #[error("upstream query failed: {0}")]
    UpstreamQuery(#[from] GitHubApiError),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebhookError::MissingHeader(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            WebhookError::InvalidSignature => (StatusCode::UNAUTHORIZED, self.to_string()),
            WebhookError::MalformedPayload(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            WebhookError::UpstreamQuery(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (status, message).into_response()
    }
}

/// Webhook handler.
///
/// # Request
///
/// - Method: POST
/// - Required headers:
///   - `X-GitHub-Event`: Event type (e.g., "issues", "push")
///   - `X-GitHub-Delivery`: Unique delivery ID (UUID format)
///   - `X-Hub-Signature-256`: HMAC-SHA256 signature of the payload
/// - Body: JSON webhook payload
///
/// # Response
///
/// - 200 OK: Delivery handled (including no-op deliveries)
/// - 400 Bad Request: Missing header or malformed payload
/// - 401 Unauthorized: Invalid signature
/// - 500 Internal Server Error: Active-issue query failed (retryable)
pub async fn webhook_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, &'static str), WebhookError> {
    // Extract required headers
    let event_type = get_header(&headers, HEADER_EVENT)?;
    let delivery_id = DeliveryId::new(get_header(&headers, HEADER_DELIVERY)?);
    let signature_header = get_header(&headers, HEADER_SIGNATURE)?;

    debug!(
        delivery_id = %delivery_id,
        event_type = %event_type,
        "Received webhook"
    );

    // Verify signature BEFORE any parsing or I/O.
    if !verify_signature(&body, &signature_header, app_state.webhook_secret()) {
        warn!(delivery_id = %delivery_id, "Invalid webhook signature");
        return Err(WebhookError::InvalidSignature);
    }

    // Decode the payload into a typed event. Unknown event kinds and
    // irrelevant actions are acknowledged and dropped.
    let Some(event) = parse_webhook(&event_type, &body)? else {
        debug!(
            delivery_id = %delivery_id,
            event_type = %event_type,
            "No handler for this event, ignoring"
        );
        return Ok((StatusCode::OK, "OK"));
    };

    // Scope a client to the repository this delivery is about. The same
    // client serves as the active-issue directory and the effect interpreter.
    let client = OctocrabClient::from_octocrab(app_state.octocrab().clone(), event.repo().clone());

    let result = process_event(&event, &client).await?;

    if result.is_empty() {
        debug!(delivery_id = %delivery_id, "Event handled with no outbound effects");
        return Ok((StatusCode::OK, "OK"));
    }

    info!(
        delivery_id = %delivery_id,
        repo = %event.repo(),
        effects = result.effects.len(),
        "Dispatching effects"
    );
    dispatch_effects(&client, result.effects).await;

    Ok((StatusCode::OK, "OK"))
}

/// Extracts a required header value as a string.
fn get_header(headers: &HeaderMap, name: &'static str) -> Result<String, WebhookError> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .ok_or(WebhookError::MissingHeader(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_header_present() {
        let mut headers = HeaderMap::new();
        headers.insert("x-github-event", "issues".parse().unwrap());

        let result = get_header(&headers, "x-github-event").unwrap();
        assert_eq!(result, "issues");
    }

    #[test]
    fn get_header_missing() {
        let headers = HeaderMap::new();

        let result = get_header(&headers, "x-github-event");
        assert!(matches!(result, Err(WebhookError::MissingHeader(_))));
    }
}
