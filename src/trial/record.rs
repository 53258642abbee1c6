//! Trial Record - one step of a participant's session timeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AdvisorInfo, Network, PostSurvey, Solution, TrialType, WrittenStrategy};
use crate::{Error, Result};

/// One step in a participant's experiment session.
///
/// A trial is created empty when the session timeline is built and finishes
/// exactly once. `id` is the trial's sequence position and is stable within
/// its session; cross-session references (advisor demonstrations) use it
/// together with the owning session's id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trial {
    id: u32,
    trial_type: TrialType,
    finished: bool,
    finished_at: Option<DateTime<Utc>>,
    network: Option<Network>,
    selected_by_children: Vec<String>,
    solution: Option<Solution>,
    written_strategy: Option<WrittenStrategy>,
    post_survey: Option<PostSurvey>,
    advisor: Option<AdvisorInfo>,
}

impl Trial {
    /// Create a new empty, unfinished trial.
    ///
    /// # Arguments
    ///
    /// * `id` - Sequence position within the session
    /// * `trial_type` - Declared type of the step
    #[must_use]
    pub const fn new(id: u32, trial_type: TrialType) -> Self {
        Self {
            id,
            trial_type,
            finished: false,
            finished_at: None,
            network: None,
            selected_by_children: Vec::new(),
            solution: None,
            written_strategy: None,
            post_survey: None,
            advisor: None,
        }
    }

    /// Create a builder for reconstructing a trial with pre-existing state
    /// (stored sessions, test fixtures).
    #[must_use]
    pub fn builder(id: u32, trial_type: TrialType) -> TrialBuilder {
        TrialBuilder::new(id, trial_type)
    }

    /// Get the trial's sequence position.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Get the declared trial type.
    #[must_use]
    pub const fn trial_type(&self) -> TrialType {
        self.trial_type
    }

    /// Whether the trial has been completed.
    #[must_use]
    pub const fn finished(&self) -> bool {
        self.finished
    }

    /// Get the completion timestamp, if the trial has finished.
    #[must_use]
    pub const fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Get the network the trial is played on, if assigned.
    #[must_use]
    pub const fn network(&self) -> Option<&Network> {
        self.network.as_ref()
    }

    /// Subject ids of learners who selected this trial as a demonstration.
    ///
    /// Append-only; keeps growing after the trial is finished.
    #[must_use]
    pub fn selected_by_children(&self) -> &[String] {
        &self.selected_by_children
    }

    /// Get the solution outcome, if recorded.
    #[must_use]
    pub const fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Get the written-strategy outcome, if recorded.
    #[must_use]
    pub const fn written_strategy(&self) -> Option<&WrittenStrategy> {
        self.written_strategy.as_ref()
    }

    /// Get the post-survey outcome, if recorded.
    #[must_use]
    pub const fn post_survey(&self) -> Option<&PostSurvey> {
        self.post_survey.as_ref()
    }

    /// Get the attached advisor data, if any.
    #[must_use]
    pub const fn advisor(&self) -> Option<&AdvisorInfo> {
        self.advisor.as_ref()
    }

    /// A trial finishes exactly once; every transition goes through here.
    fn finish(&mut self) -> Result<()> {
        if self.finished {
            return Err(Error::TrialAlreadyFinished(self.id));
        }
        self.finished_at = Some(Utc::now());
        self.finished = true;
        Ok(())
    }

    /// Record a scored solution and finish the trial.
    ///
    /// # Errors
    ///
    /// [`Error::TrialAlreadyFinished`] if the trial has already finished;
    /// the existing outcome is left untouched.
    pub(crate) fn record_solution(&mut self, moves: Vec<u32>, score: i64) -> Result<()> {
        self.finish()?;
        self.solution = Some(Solution::new(self.id, moves, score));
        Ok(())
    }

    /// Record the strategy write-up and finish the trial.
    ///
    /// # Errors
    ///
    /// [`Error::TrialAlreadyFinished`] if the trial has already finished.
    pub(crate) fn record_written_strategy(&mut self, strategy: String) -> Result<()> {
        self.finish()?;
        self.written_strategy = Some(WrittenStrategy::new(self.id, strategy));
        Ok(())
    }

    /// Record the survey answers and finish the trial.
    ///
    /// # Errors
    ///
    /// [`Error::TrialAlreadyFinished`] if the trial has already finished.
    pub(crate) fn record_post_survey(&mut self, answers: serde_json::Value) -> Result<()> {
        self.finish()?;
        self.post_survey = Some(PostSurvey::new(self.id, answers));
        Ok(())
    }

    /// Finish the trial without an outcome sub-record (administrative steps,
    /// and the selection trial after its advisor data is attached).
    ///
    /// # Errors
    ///
    /// [`Error::TrialAlreadyFinished`] if the trial has already finished.
    pub(crate) fn mark_finished(&mut self) -> Result<()> {
        self.finish()
    }

    /// Attach advisor data (propagation only).
    pub(crate) fn set_advisor(&mut self, advisor: AdvisorInfo) {
        self.advisor = Some(advisor);
    }

    /// Assign the network the trial is played on (propagation only).
    pub(crate) fn set_network(&mut self, network: Network) {
        self.network = Some(network);
    }

    /// Append a learner's subject id to the demonstration back-reference list.
    pub(crate) fn note_selected_by(&mut self, subject_id: &str) {
        self.selected_by_children.push(subject_id.to_string());
    }
}

/// Builder for [`Trial`].
///
/// Supplying an outcome sub-record marks the trial finished with that
/// record's timestamp, matching the invariant that `finished` implies a
/// populated outcome.
#[derive(Debug)]
pub struct TrialBuilder {
    trial: Trial,
}

impl TrialBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(id: u32, trial_type: TrialType) -> Self {
        Self {
            trial: Trial::new(id, trial_type),
        }
    }

    /// Assign the network the trial is played on.
    #[must_use]
    pub fn network(mut self, network: Network) -> Self {
        self.trial.network = Some(network);
        self
    }

    /// Attach a recorded solution and mark the trial finished.
    #[must_use]
    pub fn solution(mut self, solution: Solution) -> Self {
        self.trial.finished_at = Some(solution.finished_at());
        self.trial.finished = true;
        self.trial.solution = Some(solution);
        self
    }

    /// Attach a recorded strategy write-up and mark the trial finished.
    #[must_use]
    pub fn written_strategy(mut self, written_strategy: WrittenStrategy) -> Self {
        self.trial.finished_at = Some(written_strategy.finished_at());
        self.trial.finished = true;
        self.trial.written_strategy = Some(written_strategy);
        self
    }

    /// Attach recorded survey answers and mark the trial finished.
    #[must_use]
    pub fn post_survey(mut self, post_survey: PostSurvey) -> Self {
        self.trial.finished_at = Some(post_survey.finished_at());
        self.trial.finished = true;
        self.trial.post_survey = Some(post_survey);
        self
    }

    /// Seed the demonstration back-reference list.
    #[must_use]
    pub fn selected_by_children(mut self, subject_ids: Vec<String>) -> Self {
        self.trial.selected_by_children = subject_ids;
        self
    }

    /// Build the [`Trial`].
    #[must_use]
    pub fn build(self) -> Trial {
        self.trial
    }
}
