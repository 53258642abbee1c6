//! Simple recorder tests
//!
//! Covers every simple trial type: matching payloads finish the trial with
//! the correct outcome sub-record, mismatched payloads are a no-op error.

use trial_track::recorder::record_simple;
use trial_track::scoring::{FixedScore, ScoreEstimator};
use trial_track::trial::{Network, Trial, TrialPayload, TrialType};
use trial_track::Error;

/// Scorer that counts moves, for checking the recorder forwards the
/// trial's network and the submitted moves untouched.
struct MoveCount;

impl ScoreEstimator for MoveCount {
    fn estimate(&self, network: Option<&Network>, moves: &[u32]) -> i64 {
        let base = network
            .and_then(|n| n.get("base"))
            .and_then(serde_json::Value::as_i64)
            .unwrap_or(0);
        base + i64::try_from(moves.len()).unwrap()
    }
}

#[test]
fn test_all_solution_types_record_solution() {
    for trial_type in [
        TrialType::Individual,
        TrialType::Observation,
        TrialType::Repeat,
        TrialType::TryYourself,
        TrialType::Demonstration,
    ] {
        let mut trial = Trial::new(4, trial_type);
        let payload = TrialPayload::Solution {
            moves: vec![0, 1, 2],
        };

        record_simple(&mut trial, trial_type, &payload, &FixedScore(10)).unwrap();

        assert!(trial.finished(), "{trial_type:?} should finish");
        assert!(trial.finished_at().is_some());
        let solution = trial.solution().expect("solution sub-record");
        assert_eq!(solution.trial_id(), 4);
        assert_eq!(solution.moves(), &[0, 1, 2]);
        assert!(trial.written_strategy().is_none());
        assert!(trial.post_survey().is_none());
    }
}

#[test]
fn test_score_comes_from_the_estimator() {
    let mut trial = Trial::builder(0, TrialType::Individual)
        .network(serde_json::json!({"base": 100}))
        .build();
    let payload = TrialPayload::Solution {
        moves: vec![5, 5, 5],
    };

    record_simple(&mut trial, TrialType::Individual, &payload, &MoveCount).unwrap();

    assert_eq!(trial.solution().unwrap().score(), 103);
}

#[test]
fn test_written_strategy_recorded() {
    let mut trial = Trial::new(9, TrialType::WrittenStrategy);
    let payload = TrialPayload::WrittenStrategy {
        strategy: "take three violet arrows first".to_string(),
    };

    record_simple(&mut trial, TrialType::WrittenStrategy, &payload, &FixedScore(0)).unwrap();

    assert!(trial.finished());
    let ws = trial.written_strategy().expect("written strategy sub-record");
    assert_eq!(ws.strategy(), "take three violet arrows first");
    assert_eq!(ws.trial_id(), 9);
    assert!(trial.solution().is_none());
}

#[test]
fn test_post_survey_recorded() {
    let mut trial = Trial::new(20, TrialType::PostSurvey);
    let answers = serde_json::json!({"difficulty": 4, "engagement": 5});
    let payload = TrialPayload::PostSurvey {
        answers: answers.clone(),
    };

    record_simple(&mut trial, TrialType::PostSurvey, &payload, &FixedScore(0)).unwrap();

    assert!(trial.finished());
    assert_eq!(trial.post_survey().unwrap().answers(), &answers);
}

#[test]
fn test_administrative_types_finish_without_outcome() {
    for trial_type in [
        TrialType::Consent,
        TrialType::Practice,
        TrialType::Debriefing,
        TrialType::Instruction,
    ] {
        let mut trial = Trial::new(0, trial_type);

        record_simple(&mut trial, trial_type, &TrialPayload::Empty, &FixedScore(0)).unwrap();

        assert!(trial.finished(), "{trial_type:?} should finish");
        assert!(trial.finished_at().is_some());
        assert!(trial.solution().is_none());
        assert!(trial.written_strategy().is_none());
        assert!(trial.post_survey().is_none());
    }
}

#[test]
fn test_mismatched_payload_is_a_no_op_error() {
    let cases = [
        (
            TrialType::Individual,
            TrialPayload::WrittenStrategy {
                strategy: "not moves".to_string(),
            },
        ),
        (TrialType::Observation, TrialPayload::Empty),
        (
            TrialType::WrittenStrategy,
            TrialPayload::Solution { moves: vec![1] },
        ),
        (
            TrialType::PostSurvey,
            TrialPayload::Advisor {
                advisor_session_id: "sess-x".to_string(),
            },
        ),
    ];

    for (trial_type, payload) in cases {
        let mut trial = Trial::new(0, trial_type);
        let before = trial.clone();

        let err = record_simple(&mut trial, trial_type, &payload, &FixedScore(0)).unwrap_err();

        assert!(matches!(err, Error::ResultsMissing), "{trial_type:?}");
        assert_eq!(trial, before, "{trial_type:?} must be untouched");
    }
}

#[test]
fn test_second_recording_rejected_outcome_kept() {
    let mut trial = Trial::new(0, TrialType::Individual);
    record_simple(
        &mut trial,
        TrialType::Individual,
        &TrialPayload::Solution { moves: vec![1, 2] },
        &FixedScore(100),
    )
    .unwrap();
    let before = trial.clone();

    let err = record_simple(
        &mut trial,
        TrialType::Individual,
        &TrialPayload::Solution { moves: vec![9] },
        &FixedScore(999),
    )
    .unwrap_err();

    assert!(matches!(err, Error::TrialAlreadyFinished(0)));
    assert_eq!(trial, before);
    assert_eq!(trial.solution().unwrap().moves(), &[1, 2]);
    assert_eq!(trial.solution().unwrap().score(), 100);
}

#[test]
fn test_refinishing_administrative_trial_rejected() {
    let mut trial = Trial::new(0, TrialType::Consent);
    record_simple(&mut trial, TrialType::Consent, &TrialPayload::Empty, &FixedScore(0)).unwrap();
    let first_finished_at = trial.finished_at();

    let err =
        record_simple(&mut trial, TrialType::Consent, &TrialPayload::Empty, &FixedScore(0))
            .unwrap_err();

    assert!(matches!(err, Error::TrialAlreadyFinished(0)));
    assert_eq!(trial.finished_at(), first_finished_at);
}

#[test]
fn test_mismatch_error_message() {
    let mut trial = Trial::new(0, TrialType::Individual);
    let err = record_simple(&mut trial, TrialType::Individual, &TrialPayload::Empty, &FixedScore(0))
        .unwrap_err();
    assert_eq!(format!("{err}"), "Trial results are missing");
}
