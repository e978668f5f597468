//! Webhook handling for GitHub events.
//!
//! This module provides:
//! - Signature verification for webhook payloads (HMAC-SHA256)
//! - Typed event records for the five event kinds the bot reacts to
//! - Payload parsing from raw webhook JSON
//! - Pure per-kind handlers that map events to outbound effects

pub mod events;
pub mod handlers;
pub mod parser;
pub mod signature;

pub use events::TrainingEvent;
pub use handlers::{HandlerResult, process_event};
pub use parser::{ParseError, parse_webhook};
pub use signature::{
    compute_signature, format_signature_header, parse_signature_header, verify_signature,
};
