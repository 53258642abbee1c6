//! Trial-completion dispatcher
//!
//! Single entry point for recording a trial outcome: routes simple types to
//! the recorder and the advisor-selection type to the propagator, then
//! writes the updated trial (or run) back into the session's timeline. The
//! caller persists the session afterward.

use tracing::debug;

use crate::propagate::{propagate, CommentOverrides};
use crate::recorder::record_simple;
use crate::scoring::ScoreEstimator;
use crate::session::{Session, SessionStore};
use crate::trial::{TrialPayload, TrialType};
use crate::{Error, Result};

/// Record the outcome of the trial under the session cursor.
///
/// `trial_type` is the type declared by the completion request; it decides
/// the dispatch and the payload shape the recorder accepts. On success, the
/// trial at `session.current_trial_index()` (and, for the selection type,
/// the rest of its social-learning run) is finished and updated in place.
/// On any error the session is unchanged.
///
/// # Errors
///
/// Whatever error the delegated component produced; see
/// [`record_simple`](crate::recorder::record_simple) and
/// [`propagate`](crate::propagate::propagate).
pub async fn record_trial_outcome<S, E>(
    store: &S,
    scorer: &E,
    overrides: &CommentOverrides,
    session: &mut Session,
    trial_type: TrialType,
    payload: &TrialPayload,
) -> Result<()>
where
    S: SessionStore,
    E: ScoreEstimator,
{
    debug!(
        session = %session.session_id(),
        ?trial_type,
        index = session.current_trial_index(),
        "recording trial outcome"
    );

    if trial_type == TrialType::SocialLearningSelection {
        return propagate(store, overrides, session, payload).await;
    }

    let index = session.current_trial_index();
    let mut trial = session
        .trials()
        .get(index)
        .cloned()
        .ok_or(Error::CursorOutOfRange {
            index,
            len: session.trials().len(),
        })?;
    record_simple(&mut trial, trial_type, payload, scorer)?;
    session.put_trial(index, trial);
    Ok(())
}
