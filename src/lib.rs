//! # Trial-Track: Behavioral Experiment Trial Recording
//!
//! Trial-track is the recording core of a multi-step behavioral experiment
//! service. It stamps the outcome of one step ("trial") in a participant's
//! session and, for the social-learning selection step, fans a prior
//! participant's ("advisor") demonstrations out into the current
//! participant's ("learner") upcoming observation/repeat/try-yourself trials.
//!
//! The enclosing service owns the HTTP layer, request parsing, and durable
//! persistence; this crate operates on one in-memory [`session::Session`]
//! per call and leaves persisting it to the caller. The only external
//! touchpoint is the [`session::SessionStore`] lookup that resolves an
//! advisor's session.
//!
//! ## Example Usage
//!
//! ```rust
//! use trial_track::session::{MemorySessionStore, Session};
//! use trial_track::trial::{Trial, TrialPayload, TrialType};
//! use trial_track::scoring::FixedScore;
//! use trial_track::propagate::CommentOverrides;
//! use trial_track::record_trial_outcome;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> trial_track::Result<()> {
//! let store = MemorySessionStore::new();
//! let mut session = Session::builder("sess-01", "subject-01")
//!     .trial(Trial::new(0, TrialType::Individual))
//!     .build();
//!
//! let payload = TrialPayload::Solution { moves: vec![0, 3, 5, 2] };
//! record_trial_outcome(
//!     &store,
//!     &FixedScore(120),
//!     &CommentOverrides::new(),
//!     &mut session,
//!     TrialType::Individual,
//!     &payload,
//! )
//! .await?;
//!
//! assert!(session.trials()[0].finished());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod dispatch;
pub mod error;
pub mod propagate;
pub mod recorder;
pub mod scoring;
pub mod session;
pub mod trial;

pub use dispatch::record_trial_outcome;
pub use error::{Error, Result};
