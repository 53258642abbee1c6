//! Outcome sub-records stored on a finished trial

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Network;

/// Scored move sequence submitted for a solution-shaped trial.
///
/// The score is computed by the external scoring collaborator at recording
/// time; this record never recomputes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Solution {
    moves: Vec<u32>,
    score: i64,
    category: Option<String>,
    trial_id: u32,
    finished_at: DateTime<Utc>,
}

impl Solution {
    /// Create a new solution record with the current timestamp.
    ///
    /// # Arguments
    ///
    /// * `trial_id` - Sequence position of the owning trial
    /// * `moves` - Submitted move sequence
    /// * `score` - Score computed by the external scorer
    #[must_use]
    pub fn new(trial_id: u32, moves: Vec<u32>, score: i64) -> Self {
        Self {
            moves,
            score,
            category: None,
            trial_id,
            finished_at: Utc::now(),
        }
    }

    /// Create a builder for constructing a solution record with optional fields.
    #[must_use]
    pub fn builder(trial_id: u32, moves: Vec<u32>, score: i64) -> SolutionBuilder {
        SolutionBuilder::new(trial_id, moves, score)
    }

    /// Get the submitted move sequence.
    #[must_use]
    pub fn moves(&self) -> &[u32] {
        &self.moves
    }

    /// Get the score.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Get the solution category used for comment-override lookup, if any.
    ///
    /// Set on seeded advisor demonstrations (e.g. `"myopic"`, `"loss"`).
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Get the owning trial's sequence position.
    #[must_use]
    pub const fn trial_id(&self) -> u32 {
        self.trial_id
    }

    /// Get the completion timestamp.
    #[must_use]
    pub const fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }
}

/// Builder for [`Solution`].
#[derive(Debug)]
pub struct SolutionBuilder {
    moves: Vec<u32>,
    score: i64,
    category: Option<String>,
    trial_id: u32,
    finished_at: DateTime<Utc>,
}

impl SolutionBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(trial_id: u32, moves: Vec<u32>, score: i64) -> Self {
        Self {
            moves,
            score,
            category: None,
            trial_id,
            finished_at: Utc::now(),
        }
    }

    /// Set the solution category (e.g. `"myopic"`, `"loss"`).
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set a custom completion timestamp (useful for deserialization/testing).
    #[must_use]
    pub const fn finished_at(mut self, finished_at: DateTime<Utc>) -> Self {
        self.finished_at = finished_at;
        self
    }

    /// Build the [`Solution`].
    #[must_use]
    pub fn build(self) -> Solution {
        Solution {
            moves: self.moves,
            score: self.score,
            category: self.category,
            trial_id: self.trial_id,
            finished_at: self.finished_at,
        }
    }
}

/// Free-text strategy write-up recorded for a `written_strategy` trial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WrittenStrategy {
    strategy: String,
    trial_id: u32,
    finished_at: DateTime<Utc>,
}

impl WrittenStrategy {
    /// Create a new written-strategy record with the current timestamp.
    #[must_use]
    pub fn new(trial_id: u32, strategy: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            trial_id,
            finished_at: Utc::now(),
        }
    }

    /// Get the strategy text.
    #[must_use]
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Get the owning trial's sequence position.
    #[must_use]
    pub const fn trial_id(&self) -> u32 {
        self.trial_id
    }

    /// Get the completion timestamp.
    #[must_use]
    pub const fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }
}

/// Questionnaire answers recorded for a `post_survey` trial.
///
/// Answers are stored as an opaque JSON document; the questionnaire layout
/// belongs to the study configuration, not to this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostSurvey {
    answers: serde_json::Value,
    trial_id: u32,
    finished_at: DateTime<Utc>,
}

impl PostSurvey {
    /// Create a new post-survey record with the current timestamp.
    #[must_use]
    pub fn new(trial_id: u32, answers: serde_json::Value) -> Self {
        Self {
            answers,
            trial_id,
            finished_at: Utc::now(),
        }
    }

    /// Get the survey answers.
    #[must_use]
    pub const fn answers(&self) -> &serde_json::Value {
        &self.answers
    }

    /// Get the owning trial's sequence position.
    #[must_use]
    pub const fn trial_id(&self) -> u32 {
        self.trial_id
    }

    /// Get the completion timestamp.
    #[must_use]
    pub const fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }
}

/// Advisor data attached to a trial during social-learning propagation.
///
/// The selection trial carries only the advisor's session id and literal
/// written strategy; observation/repeat/try-yourself trials additionally
/// carry a copy of the demonstrated solution and the strategy comment shown
/// alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisorInfo {
    advisor_session_id: String,
    solution: Option<Solution>,
    written_strategy: Option<String>,
    network: Option<Network>,
}

impl AdvisorInfo {
    /// Create an advisor record carrying only the advisor's session id.
    #[must_use]
    pub fn new(advisor_session_id: impl Into<String>) -> Self {
        Self {
            advisor_session_id: advisor_session_id.into(),
            solution: None,
            written_strategy: None,
            network: None,
        }
    }

    /// Create a builder for constructing an advisor record with optional fields.
    #[must_use]
    pub fn builder(advisor_session_id: impl Into<String>) -> AdvisorInfoBuilder {
        AdvisorInfoBuilder::new(advisor_session_id)
    }

    /// Get the advisor's session id.
    #[must_use]
    pub fn advisor_session_id(&self) -> &str {
        &self.advisor_session_id
    }

    /// Get the copied demonstration solution, if any.
    #[must_use]
    pub const fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Get the strategy text or comment shown to the learner, if any.
    #[must_use]
    pub fn written_strategy(&self) -> Option<&str> {
        self.written_strategy.as_deref()
    }

    /// Get the copied network, if any.
    #[must_use]
    pub const fn network(&self) -> Option<&Network> {
        self.network.as_ref()
    }
}

/// Builder for [`AdvisorInfo`].
#[derive(Debug)]
pub struct AdvisorInfoBuilder {
    advisor_session_id: String,
    solution: Option<Solution>,
    written_strategy: Option<String>,
    network: Option<Network>,
}

impl AdvisorInfoBuilder {
    /// Create a new builder with the required advisor session id.
    #[must_use]
    pub fn new(advisor_session_id: impl Into<String>) -> Self {
        Self {
            advisor_session_id: advisor_session_id.into(),
            solution: None,
            written_strategy: None,
            network: None,
        }
    }

    /// Attach a copy of the demonstrated solution.
    #[must_use]
    pub fn solution(mut self, solution: Solution) -> Self {
        self.solution = Some(solution);
        self
    }

    /// Attach a copy of the demonstrated solution, if one exists.
    #[must_use]
    pub fn maybe_solution(mut self, solution: Option<Solution>) -> Self {
        self.solution = solution;
        self
    }

    /// Attach the strategy text or comment shown to the learner.
    #[must_use]
    pub fn written_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.written_strategy = Some(strategy.into());
        self
    }

    /// Attach a copy of the demonstration's network.
    #[must_use]
    pub fn network(mut self, network: Network) -> Self {
        self.network = Some(network);
        self
    }

    /// Build the [`AdvisorInfo`].
    #[must_use]
    pub fn build(self) -> AdvisorInfo {
        AdvisorInfo {
            advisor_session_id: self.advisor_session_id,
            solution: self.solution,
            written_strategy: self.written_strategy,
            network: self.network,
        }
    }
}
