//! Social-learning propagation
//!
//! When a learner completes the advisor-selection trial, this module
//! attaches the chosen advisor's demonstration history to the learner's
//! upcoming observation/repeat/try-yourself trials and marks the selection
//! trial finished.
//!
//! The update spans two sessions: the learner's session (borrowed mutably
//! for the call) and the advisor's session (fetched from the
//! [`SessionStore`], mutated for the demonstration back-references, and
//! written back). Concurrent propagations against the same advisor session
//! are not synchronized; the back-reference write is last-write-wins. That
//! gap is inherited from the enclosing service's one-session-per-request
//! model.

use std::collections::HashMap;

use tracing::debug;

use crate::session::{Session, SessionStore};
use crate::trial::{AdvisorInfo, Network, Solution, Trial, TrialPayload, TrialType};
use crate::{Error, Result};

/// Per-study comment overrides for social-learning triplets.
///
/// Keyed by `(selection trial id, demonstration solution category)`. When a
/// key matches, the override text replaces the advisor's literal written
/// strategy on the triplet trials derived from that demonstration. The
/// selection trial itself always carries the literal strategy. Override
/// tables are study configuration, loaded by the enclosing service.
#[derive(Debug, Clone, Default)]
pub struct CommentOverrides {
    table: HashMap<(u32, String), String>,
}

impl CommentOverrides {
    /// Create an empty override table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override, builder style.
    #[must_use]
    pub fn with(
        mut self,
        selection_trial_id: u32,
        category: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        self.insert(selection_trial_id, category, comment);
        self
    }

    /// Add an override.
    pub fn insert(
        &mut self,
        selection_trial_id: u32,
        category: impl Into<String>,
        comment: impl Into<String>,
    ) {
        self.table
            .insert((selection_trial_id, category.into()), comment.into());
    }

    /// Look up the override for a selection trial and solution category.
    ///
    /// Returns `None` when no override applies (including uncategorized
    /// solutions), in which case the caller falls back to the advisor's
    /// literal written strategy.
    #[must_use]
    pub fn lookup(&self, selection_trial_id: u32, category: Option<&str>) -> Option<&str> {
        category.and_then(|c| {
            self.table
                .get(&(selection_trial_id, c.to_string()))
                .map(String::as_str)
        })
    }

    /// Get the number of overrides in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// End (exclusive) of the social-learning run starting at `start`.
///
/// The run begins with the selection trial and extends until the next
/// `social_learning_selection` or `individual` trial, or the end of the
/// timeline.
fn run_end(trials: &[Trial], start: usize) -> usize {
    let mut end = start + 1;
    while let Some(trial) = trials.get(end) {
        if matches!(
            trial.trial_type(),
            TrialType::SocialLearningSelection | TrialType::Individual
        ) {
            break;
        }
        end += 1;
    }
    end
}

/// Propagate the chosen advisor's demonstrations into the learner's
/// social-learning run and finish the selection trial.
///
/// The run is the selection trial under the session cursor plus the
/// following trials up to the next selection/individual trial, with
/// `instruction` trials filtered out (they stay in the timeline untouched).
/// The filtered run must hold exactly three trials per advisor
/// demonstration, one `{observation, repeat, try_yourself}` triplet each,
/// in demonstration order.
///
/// All validation completes before the first write: on any error, both the
/// learner's session and the stored advisor session are unchanged.
///
/// # Errors
///
/// * [`Error::ResultsMissing`] when the payload is not an advisor choice.
/// * [`Error::AdvisorSessionNotFound`] when the advisor session id does not
///   resolve in the store.
/// * [`Error::TripletMismatch`], [`Error::MissingWrittenStrategy`],
///   [`Error::CursorOutOfRange`] on inconsistent experiment configuration.
/// * Any store error from the advisor fetch or write-back.
pub async fn propagate<S: SessionStore>(
    store: &S,
    overrides: &CommentOverrides,
    session: &mut Session,
    payload: &TrialPayload,
) -> Result<()> {
    let TrialPayload::Advisor { advisor_session_id } = payload else {
        return Err(Error::ResultsMissing);
    };

    let start = session.current_trial_index();
    let mut selection = session
        .trials()
        .get(start)
        .cloned()
        .ok_or(Error::CursorOutOfRange {
            index: start,
            len: session.trials().len(),
        })?;
    let end = run_end(session.trials(), start);

    // Owned working copies with their timeline positions, so the write-back
    // is explicit and the scan never aliases the stored sequence.
    let mut candidates: Vec<(usize, Trial)> = session.trials()[start + 1..end]
        .iter()
        .enumerate()
        .filter(|(_, trial)| trial.trial_type() != TrialType::Instruction)
        .map(|(offset, trial)| (start + 1 + offset, trial.clone()))
        .collect();

    let mut advisor_session = store
        .get(advisor_session_id)
        .await?
        .ok_or(Error::AdvisorSessionNotFound)?;

    let demonstrations = advisor_session
        .trials()
        .iter()
        .filter(|trial| trial.trial_type() == TrialType::Demonstration)
        .count();
    if candidates.len() != demonstrations * 3 {
        return Err(Error::TripletMismatch {
            candidates: candidates.len(),
            demonstrations,
        });
    }

    let advisor_strategy = advisor_session
        .trials()
        .iter()
        .filter(|trial| trial.trial_type() == TrialType::WrittenStrategy)
        .find_map(Trial::written_strategy)
        .map(|ws| ws.strategy().to_string())
        .ok_or(Error::MissingWrittenStrategy)?;

    debug!(
        session = %session.session_id(),
        advisor = %advisor_session_id,
        demonstrations,
        candidates = candidates.len(),
        "propagating advisor demonstrations"
    );

    // One pass over the advisor's timeline: append the learner's
    // back-reference and copy out each demonstration's solution and network.
    let subject_id = session.subject_id().to_string();
    let mut demos: Vec<(Option<Solution>, Option<Network>)> = Vec::with_capacity(demonstrations);
    for trial in advisor_session.trials_mut() {
        if trial.trial_type() == TrialType::Demonstration {
            trial.note_selected_by(&subject_id);
            demos.push((trial.solution().cloned(), trial.network().cloned()));
        }
    }

    for (n, (demo_solution, demo_network)) in demos.into_iter().enumerate() {
        let comment = overrides
            .lookup(
                selection.id(),
                demo_solution.as_ref().and_then(Solution::category),
            )
            .unwrap_or(&advisor_strategy)
            .to_string();

        // Demonstration n feeds the learner's n-th triplet.
        for (_, trial) in &mut candidates[n * 3..n * 3 + 3] {
            trial.set_advisor(
                AdvisorInfo::builder(advisor_session_id.clone())
                    .maybe_solution(demo_solution.clone())
                    .written_strategy(comment.clone())
                    .build(),
            );
            if let Some(network) = demo_network.clone() {
                trial.set_network(network);
            }
        }
    }

    selection.set_advisor(
        AdvisorInfo::builder(advisor_session_id.clone())
            .written_strategy(advisor_strategy)
            .build(),
    );
    selection.mark_finished()?;

    // Advisor back-references first, then the learner's run. The caller
    // persists the learner session after the dispatcher returns.
    store.update(advisor_session).await?;

    session.put_trial(start, selection);
    for (index, trial) in candidates {
        session.put_trial(index, trial);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn trials_of(types: &[TrialType]) -> Vec<Trial> {
        types
            .iter()
            .enumerate()
            .map(|(i, &t)| Trial::new(u32::try_from(i).unwrap(), t))
            .collect()
    }

    #[test]
    fn test_run_end_stops_at_individual() {
        let trials = trials_of(&[
            TrialType::SocialLearningSelection,
            TrialType::Observation,
            TrialType::Repeat,
            TrialType::TryYourself,
            TrialType::Individual,
            TrialType::Observation,
        ]);
        assert_eq!(run_end(&trials, 0), 4);
    }

    #[test]
    fn test_run_end_stops_at_next_selection() {
        let trials = trials_of(&[
            TrialType::SocialLearningSelection,
            TrialType::Observation,
            TrialType::SocialLearningSelection,
        ]);
        assert_eq!(run_end(&trials, 0), 2);
    }

    #[test]
    fn test_run_end_runs_to_session_end() {
        let trials = trials_of(&[
            TrialType::SocialLearningSelection,
            TrialType::Observation,
            TrialType::Repeat,
        ]);
        assert_eq!(run_end(&trials, 0), 3);
    }

    #[test]
    fn test_overrides_lookup_fallback() {
        let overrides = CommentOverrides::new()
            .with(8, "myopic", "Always follow the green arrows")
            .with(16, "myopic", "Try to maximize green, especially dark green");

        assert_eq!(
            overrides.lookup(8, Some("myopic")),
            Some("Always follow the green arrows")
        );
        assert_eq!(overrides.lookup(8, Some("loss")), None);
        assert_eq!(overrides.lookup(12, Some("myopic")), None);
        assert_eq!(overrides.lookup(8, None), None);
        assert_eq!(overrides.len(), 2);
    }

    fn arb_non_boundary_type() -> impl Strategy<Value = TrialType> {
        prop::sample::select(vec![
            TrialType::Observation,
            TrialType::Repeat,
            TrialType::TryYourself,
            TrialType::Instruction,
            TrialType::Demonstration,
            TrialType::WrittenStrategy,
            TrialType::PostSurvey,
            TrialType::Consent,
            TrialType::Practice,
            TrialType::Debriefing,
        ])
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The collected run is the selection trial plus every following
        /// trial up to the next boundary: length k+1.
        #[test]
        fn prop_run_length_is_k_plus_one(
            middle in prop::collection::vec(arb_non_boundary_type(), 0..12),
            boundary in prop::sample::select(vec![
                Some(TrialType::SocialLearningSelection),
                Some(TrialType::Individual),
                None,
            ]),
            tail in prop::collection::vec(arb_non_boundary_type(), 0..4),
        ) {
            let mut types = vec![TrialType::SocialLearningSelection];
            types.extend(middle.iter().copied());
            if let Some(b) = boundary {
                types.push(b);
                types.extend(tail.iter().copied());
            }
            let trials = trials_of(&types);
            prop_assert_eq!(run_end(&trials, 0), middle.len() + 1);
        }
    }
}
