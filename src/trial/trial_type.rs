//! Trial type tags for the experiment timeline

use serde::{Deserialize, Serialize};

/// Enumerated tag for one step in the experiment timeline.
///
/// The tag decides which payload shape a trial accepts and which outcome
/// sub-record it stores. Adding a variant is a compile-time-checked
/// exercise: the recorder and propagator dispatch by exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialType {
    /// Solo attempt at a network, scored on submission.
    Individual,
    /// Advisor choice step; the chosen advisor's demonstrations are fanned
    /// out into the learner's following social-learning trials.
    SocialLearningSelection,
    /// Watch the advisor's demonstrated solution.
    Observation,
    /// Reproduce the advisor's demonstrated solution.
    Repeat,
    /// Attempt the advisor's network without the demonstration replay.
    TryYourself,
    /// Attempt whose solution becomes available to later learners.
    Demonstration,
    /// Free-text strategy write-up.
    WrittenStrategy,
    /// Final questionnaire.
    PostSurvey,
    /// Consent form.
    Consent,
    /// Practice round.
    Practice,
    /// Debriefing screen.
    Debriefing,
    /// Instruction screen.
    Instruction,
}

impl TrialType {
    /// Types whose outcome is a scored move sequence.
    #[must_use]
    pub const fn expects_solution(self) -> bool {
        matches!(
            self,
            Self::Individual
                | Self::Observation
                | Self::Repeat
                | Self::TryYourself
                | Self::Demonstration
        )
    }

    /// Administrative steps that finish without an outcome sub-record.
    #[must_use]
    pub const fn is_administrative(self) -> bool {
        matches!(
            self,
            Self::Consent | Self::Practice | Self::Debriefing | Self::Instruction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_tags() {
        let json = serde_json::to_string(&TrialType::SocialLearningSelection).unwrap();
        assert_eq!(json, "\"social_learning_selection\"");

        let parsed: TrialType = serde_json::from_str("\"try_yourself\"").unwrap();
        assert_eq!(parsed, TrialType::TryYourself);
    }

    #[test]
    fn test_expects_solution() {
        assert!(TrialType::Individual.expects_solution());
        assert!(TrialType::Observation.expects_solution());
        assert!(TrialType::Repeat.expects_solution());
        assert!(TrialType::TryYourself.expects_solution());
        assert!(TrialType::Demonstration.expects_solution());

        assert!(!TrialType::WrittenStrategy.expects_solution());
        assert!(!TrialType::SocialLearningSelection.expects_solution());
    }

    #[test]
    fn test_is_administrative() {
        assert!(TrialType::Consent.is_administrative());
        assert!(TrialType::Practice.is_administrative());
        assert!(TrialType::Debriefing.is_administrative());
        assert!(TrialType::Instruction.is_administrative());

        assert!(!TrialType::Individual.is_administrative());
        assert!(!TrialType::PostSurvey.is_administrative());
    }
}
