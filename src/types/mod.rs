//! Core domain types for the training bot.

mod ids;

pub use ids::{DeliveryId, IssueNumber, PrNumber, RepoId};
