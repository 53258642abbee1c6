//! Error types for trial-track
//!
//! Two classes of failure share the enum: trial errors that an endpoint
//! reports back to the participant's client (`ResultsMissing`,
//! `AdvisorSessionNotFound`), and defect-class errors that indicate an
//! inconsistent experiment configuration and should never occur for a
//! well-formed session timeline.

use thiserror::Error;

use crate::trial::TrialType;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Trial-track error types
#[derive(Error, Debug)]
pub enum Error {
    /// The submitted payload does not match the shape the trial type expects.
    #[error("Trial results are missing")]
    ResultsMissing,

    /// The advisor session id did not resolve in the session store.
    #[error("Advisor session is not found")]
    AdvisorSessionNotFound,

    /// The social-learning run does not hold exactly three trials per
    /// advisor demonstration. The run is rejected rather than truncated.
    #[error("Social learning run holds {candidates} trials for {demonstrations} advisor demonstrations (expected 3 per demonstration)")]
    TripletMismatch {
        /// Number of candidate trials in the filtered run
        candidates: usize,
        /// Number of demonstration trials in the advisor's session
        demonstrations: usize,
    },

    /// The advisor session has no finished written-strategy trial to copy
    /// strategy text from.
    #[error("Advisor session has no finished written strategy trial")]
    MissingWrittenStrategy,

    /// A completion request targeted a trial that has already finished.
    /// Each trial finishes exactly once; the outcome sub-record is
    /// immutable once set.
    #[error("Trial {0} is already finished")]
    TrialAlreadyFinished(u32),

    /// The simple recorder was handed a type that requires cross-session
    /// propagation.
    #[error("Trial type {0:?} is not handled by the simple recorder")]
    UnsupportedTrialType(TrialType),

    /// The session cursor points outside the trial sequence.
    #[error("Current trial index {index} is out of range for {len} trials")]
    CursorOutOfRange {
        /// Cursor position
        index: usize,
        /// Length of the session's trial sequence
        len: usize,
    },
}
