//! Session Walkthrough
//!
//! Demonstrates the trial-recording core end to end: an advisor finishes
//! demonstration trials and a written strategy, then a learner selects that
//! advisor and the demonstrations fan out into the learner's
//! observation/repeat/try-yourself triplets.
//!
//! Run with: cargo run --example session_walkthrough

use trial_track::propagate::CommentOverrides;
use trial_track::record_trial_outcome;
use trial_track::scoring::ScoreEstimator;
use trial_track::session::{MemorySessionStore, Session, SessionStore};
use trial_track::trial::{Network, Trial, TrialPayload, TrialType};

/// Toy scorer: one point per move.
struct PointPerMove;

impl ScoreEstimator for PointPerMove {
    fn estimate(&self, _network: Option<&Network>, moves: &[u32]) -> i64 {
        moves.len() as i64
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> trial_track::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    println!("=== Trial-Track Session Walkthrough ===\n");

    let store = MemorySessionStore::new();
    let scorer = PointPerMove;
    let overrides = CommentOverrides::new();

    // -------------------------------------------------------------------------
    // 1. The advisor plays through their session
    // -------------------------------------------------------------------------
    println!("1. Recording the advisor's session...");

    let mut advisor = Session::builder("sess-advisor", "subject-advisor")
        .trial(
            Trial::builder(0, TrialType::Demonstration)
                .network(serde_json::json!({"network_id": "net-a"}))
                .build(),
        )
        .trial(
            Trial::builder(1, TrialType::Demonstration)
                .network(serde_json::json!({"network_id": "net-b"}))
                .build(),
        )
        .trial(Trial::new(2, TrialType::WrittenStrategy))
        .build();

    for moves in [vec![0, 3, 5], vec![2, 2, 4, 1]] {
        record_trial_outcome(
            &store,
            &scorer,
            &overrides,
            &mut advisor,
            TrialType::Demonstration,
            &TrialPayload::Solution { moves },
        )
        .await?;
        advisor.advance();
    }
    record_trial_outcome(
        &store,
        &scorer,
        &overrides,
        &mut advisor,
        TrialType::WrittenStrategy,
        &TrialPayload::WrittenStrategy {
            strategy: "take the long arcs early, short hops late".to_string(),
        },
    )
    .await?;
    store.update(advisor).await?;

    println!("   2 demonstrations + 1 written strategy stored\n");

    // -------------------------------------------------------------------------
    // 2. The learner reaches the advisor-selection trial
    // -------------------------------------------------------------------------
    println!("2. Learner selects the advisor...");

    let mut learner = Session::builder("sess-learner", "subject-learner")
        .trial(Trial::new(0, TrialType::SocialLearningSelection))
        .trial(Trial::new(1, TrialType::Observation))
        .trial(Trial::new(2, TrialType::Repeat))
        .trial(Trial::new(3, TrialType::TryYourself))
        .trial(Trial::new(4, TrialType::Observation))
        .trial(Trial::new(5, TrialType::Repeat))
        .trial(Trial::new(6, TrialType::TryYourself))
        .build();

    record_trial_outcome(
        &store,
        &scorer,
        &overrides,
        &mut learner,
        TrialType::SocialLearningSelection,
        &TrialPayload::Advisor {
            advisor_session_id: "sess-advisor".to_string(),
        },
    )
    .await?;

    // -------------------------------------------------------------------------
    // 3. Inspect the propagated run
    // -------------------------------------------------------------------------
    println!("3. Propagated social-learning run:");
    for trial in &learner.trials()[1..] {
        let info = trial.advisor().expect("advisor attached");
        println!(
            "   trial {} ({:?}): demo moves {:?}, comment {:?}",
            trial.id(),
            trial.trial_type(),
            info.solution().map(trial_track::trial::Solution::moves),
            info.written_strategy(),
        );
    }

    let stored_advisor = store.get("sess-advisor").await?.expect("advisor stored");
    println!(
        "\n   advisor demo 0 selected by: {:?}",
        stored_advisor.trials()[0].selected_by_children()
    );

    Ok(())
}
