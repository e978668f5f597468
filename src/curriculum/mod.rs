//! The training curriculum: step templates and the activity gate.
//!
//! The curriculum is a fixed sequence of instructional steps. Which step fires
//! is decided entirely from observable repository facts, never from a stored
//! position:
//!
//! - `context` - determines whether the curriculum is active for an actor (an
//!   open issue assigned to them exists) and which issue tracks their progress
//! - `steps` - pure template renderers, one per step of the sequence

pub mod context;
pub mod steps;

pub use context::{CurriculumContext, IssueDirectory, find_active_issue};
