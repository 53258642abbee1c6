//! Session Module
//!
//! A session is one participant's full ordered trial timeline plus identity
//! and cursor state. The recording core borrows one session per call; the
//! enclosing service loads it before the call and persists it afterward.
//!
//! The [`SessionStore`] trait is the seam to that service: the propagator
//! uses it to resolve an advisor's session by id and to write back the
//! advisor-side demonstration back-references.

mod memory;

pub use memory::MemorySessionStore;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::trial::Trial;
use crate::Result;

/// One participant's ordered experiment timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    session_id: String,
    subject_id: String,
    current_trial_index: usize,
    trials: Vec<Trial>,
}

impl Session {
    /// Create a new session with the cursor at the first trial.
    ///
    /// # Arguments
    ///
    /// * `session_id` - Unique identifier for the session
    /// * `subject_id` - Identifier of the participant
    /// * `trials` - The pre-built trial timeline
    #[must_use]
    pub const fn new(session_id: String, subject_id: String, trials: Vec<Trial>) -> Self {
        Self {
            session_id,
            subject_id,
            current_trial_index: 0,
            trials,
        }
    }

    /// Create a builder for constructing a session trial by trial.
    #[must_use]
    pub fn builder(session_id: impl Into<String>, subject_id: impl Into<String>) -> SessionBuilder {
        SessionBuilder::new(session_id, subject_id)
    }

    /// Get the session id.
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Get the participant's subject id.
    #[must_use]
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    /// Get the cursor position within the trial timeline.
    #[must_use]
    pub const fn current_trial_index(&self) -> usize {
        self.current_trial_index
    }

    /// Get the ordered trial timeline.
    #[must_use]
    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    /// Get the trial under the cursor, if the cursor is in range.
    #[must_use]
    pub fn current_trial(&self) -> Option<&Trial> {
        self.trials.get(self.current_trial_index)
    }

    /// Move the cursor to the next trial.
    ///
    /// Called by the enclosing service between completion requests; the
    /// recording core itself never advances the cursor.
    pub fn advance(&mut self) {
        self.current_trial_index += 1;
    }

    /// Replace the trial at `index` (write-back after recording).
    pub(crate) fn put_trial(&mut self, index: usize, trial: Trial) {
        self.trials[index] = trial;
    }

    /// Mutable access to the trial timeline (propagation only).
    pub(crate) fn trials_mut(&mut self) -> &mut [Trial] {
        &mut self.trials
    }
}

/// Builder for [`Session`].
#[derive(Debug)]
pub struct SessionBuilder {
    session_id: String,
    subject_id: String,
    current_trial_index: usize,
    trials: Vec<Trial>,
}

impl SessionBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(session_id: impl Into<String>, subject_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            subject_id: subject_id.into(),
            current_trial_index: 0,
            trials: Vec::new(),
        }
    }

    /// Append one trial to the timeline.
    #[must_use]
    pub fn trial(mut self, trial: Trial) -> Self {
        self.trials.push(trial);
        self
    }

    /// Append several trials to the timeline.
    #[must_use]
    pub fn trials(mut self, trials: impl IntoIterator<Item = Trial>) -> Self {
        self.trials.extend(trials);
        self
    }

    /// Position the cursor (defaults to the first trial).
    #[must_use]
    pub const fn current_trial_index(mut self, index: usize) -> Self {
        self.current_trial_index = index;
        self
    }

    /// Build the [`Session`].
    #[must_use]
    pub fn build(self) -> Session {
        Session {
            session_id: self.session_id,
            subject_id: self.subject_id,
            current_trial_index: self.current_trial_index,
            trials: self.trials,
        }
    }
}

/// Session store trait for resolving and writing back sessions by id.
///
/// The enclosing service implements this against its document store;
/// [`MemorySessionStore`] is the in-memory implementation used by tests and
/// demos. The propagator performs exactly one `get` (advisor resolution)
/// and one `update` (advisor back-reference write) per call.
pub trait SessionStore: Send + Sync {
    /// Get a session by id.
    ///
    /// Returns `None` if no session with that id exists.
    fn get(&self, session_id: &str) -> impl Future<Output = Result<Option<Session>>> + Send;

    /// Write a session back to the store, replacing any stored version.
    ///
    /// Concurrent updates of the same session are last-write-wins; the
    /// advisor-side back-reference append is not synchronized across
    /// learners (see the propagator's documentation).
    fn update(&self, session: Session) -> impl Future<Output = Result<()>> + Send;
}
