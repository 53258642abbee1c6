//! Request-side outcome payloads

use serde::{Deserialize, Serialize};

/// Ephemeral outcome payload submitted when a trial is completed.
///
/// The payload arrives with the completion request and is matched against
/// the trial's declared [`super::TrialType`] by the recorder; it is never
/// stored as-is. A shape mismatch is the participant-facing
/// [`crate::Error::ResultsMissing`] error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrialPayload {
    /// Move sequence for solution-shaped trials.
    Solution {
        /// Submitted move sequence
        moves: Vec<u32>,
    },
    /// Strategy text for a `written_strategy` trial.
    WrittenStrategy {
        /// Free-text strategy write-up
        strategy: String,
    },
    /// Questionnaire answers for a `post_survey` trial.
    PostSurvey {
        /// Opaque answers document
        answers: serde_json::Value,
    },
    /// Chosen advisor for a `social_learning_selection` trial.
    Advisor {
        /// Session id of the chosen advisor
        advisor_session_id: String,
    },
    /// Administrative steps submit no results.
    Empty,
}
