//! Scoring seam for submitted move sequences
//!
//! Scoring a move sequence against a task network is owned by the
//! experiment engine, not by this crate. The recorder calls through
//! [`ScoreEstimator`] and stores whatever score comes back; no scoring
//! logic is duplicated here.

use crate::trial::Network;

/// External scoring function for move sequences.
///
/// Pure and deterministic from the recording core's perspective: the same
/// `(network, moves)` pair always yields the same score.
pub trait ScoreEstimator: Send + Sync {
    /// Score a move sequence on the given network.
    fn estimate(&self, network: Option<&Network>, moves: &[u32]) -> i64;
}

/// Scorer that returns the same score for every submission.
///
/// Stand-in for tests and demos where the real engine is absent.
#[derive(Debug, Clone, Copy)]
pub struct FixedScore(pub i64);

impl ScoreEstimator for FixedScore {
    fn estimate(&self, _network: Option<&Network>, _moves: &[u32]) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_score_ignores_input() {
        let scorer = FixedScore(-50);
        assert_eq!(scorer.estimate(None, &[]), -50);
        assert_eq!(
            scorer.estimate(Some(&serde_json::json!({"nodes": 4})), &[1, 2, 3]),
            -50
        );
    }
}
