//! Simple trial recorder
//!
//! Stamps a single trial's outcome given its declared type and a submitted
//! payload. Pure and synchronous: no cross-session access, no I/O. The only
//! validation is the payload-shape check against the declared type; the
//! trial is untouched when it fails.

use crate::scoring::ScoreEstimator;
use crate::trial::{Trial, TrialPayload, TrialType};
use crate::{Error, Result};

/// Record the outcome of a simple (non-selection) trial.
///
/// Solution-shaped types (`individual`, `observation`, `repeat`,
/// `try_yourself`, `demonstration`) require a [`TrialPayload::Solution`];
/// the score is computed by `scorer` from the trial's network and the
/// submitted moves. `written_strategy` and `post_survey` require their
/// matching payload shapes. Administrative types finish unconditionally
/// with no outcome sub-record.
///
/// # Errors
///
/// * [`Error::ResultsMissing`] when the payload shape does not match the
///   declared type. The trial is left exactly as it was.
/// * [`Error::TrialAlreadyFinished`] when the trial has finished before;
///   the recorded outcome is immutable and stays untouched.
/// * [`Error::UnsupportedTrialType`] when handed
///   [`TrialType::SocialLearningSelection`], which needs cross-session
///   propagation and is routed elsewhere by the dispatcher.
pub fn record_simple<E: ScoreEstimator>(
    trial: &mut Trial,
    trial_type: TrialType,
    payload: &TrialPayload,
    scorer: &E,
) -> Result<()> {
    match trial_type {
        TrialType::Individual
        | TrialType::Observation
        | TrialType::Repeat
        | TrialType::TryYourself
        | TrialType::Demonstration => {
            let TrialPayload::Solution { moves } = payload else {
                return Err(Error::ResultsMissing);
            };
            let score = scorer.estimate(trial.network(), moves);
            trial.record_solution(moves.clone(), score)
        }
        TrialType::WrittenStrategy => {
            let TrialPayload::WrittenStrategy { strategy } = payload else {
                return Err(Error::ResultsMissing);
            };
            trial.record_written_strategy(strategy.clone())
        }
        TrialType::PostSurvey => {
            let TrialPayload::PostSurvey { answers } = payload else {
                return Err(Error::ResultsMissing);
            };
            trial.record_post_survey(answers.clone())
        }
        TrialType::Consent | TrialType::Practice | TrialType::Debriefing | TrialType::Instruction => {
            trial.mark_finished()
        }
        TrialType::SocialLearningSelection => Err(Error::UnsupportedTrialType(trial_type)),
    }
}
