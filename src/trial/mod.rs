//! Trial Schema
//!
//! Data structures for one step of a participant's experiment timeline.
//!
//! ## Schema Overview
//!
//! ```text
//! Session (1) ──< Trial (N, ordered)
//!                   │
//!                   └── exactly one outcome sub-record by TrialType:
//!                         Solution | WrittenStrategy | PostSurvey | AdvisorInfo
//! ```
//!
//! A [`Trial`] is created empty when the session timeline is built and
//! transitions to finished exactly once, through
//! [`crate::record_trial_outcome`]. The outcome sub-record is immutable once
//! set; only the `selected_by_children` back-reference list keeps growing as
//! later learners pick the trial as a demonstration.

mod outcome;
mod payload;
mod record;
mod trial_type;

pub use outcome::{AdvisorInfo, AdvisorInfoBuilder, PostSurvey, Solution, SolutionBuilder, WrittenStrategy};
pub use payload::TrialPayload;
pub use record::{Trial, TrialBuilder};
pub use trial_type::TrialType;

/// Shared task-graph description a trial is played on.
///
/// The recording core never inspects its structure; it is copied between
/// trials during propagation and handed to the scorer as-is.
pub type Network = serde_json::Value;
