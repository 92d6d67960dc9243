//! Scoring error types.
//!
//! Every failure the classification and quiz engines can produce is a local
//! validation failure on the caller's input. Nothing here is retried; the
//! call is rejected and the caller decides what to do.

use thiserror::Error;

/// Errors raised when an input to the scoring engine is out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// More questions were requested than the catalog holds.
    #[error("requested {requested} questions but the catalog only has {available}")]
    QuizTooLarge { requested: usize, available: usize },

    /// The submitted answers do not line up with the questions asked.
    #[error("expected {expected} answers, got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },

    /// A quiz with zero questions cannot be graded.
    #[error("quiz has no questions")]
    EmptyQuiz,

    /// More correct answers than questions.
    #[error("score {score} exceeds total {total}")]
    ScoreExceedsTotal { score: usize, total: usize },

    /// A percentage outside 0..=100.
    #[error("percentage {0} is outside 0..=100")]
    PercentageOutOfRange(u32),

    /// A quiz score outside 0..=100.
    #[error("quiz score {0} is outside 0..=100")]
    QuizScoreOutOfRange(u32),

    /// Login frequency is counted over a 7-day window.
    #[error("login frequency {0} is outside 0..=7")]
    LoginFrequencyOutOfRange(u32),

    /// The chosen option does not exist on the current question.
    #[error("option {index} is out of range for question {question_id} ({options} options)")]
    OptionOutOfRange {
        question_id: u32,
        index: usize,
        options: usize,
    },

    /// Every question has already been answered.
    #[error("quiz is already complete")]
    QuizAlreadyComplete,
}

impl ScoringError {
    /// Returns `true` if the error is a rejected argument.
    ///
    /// All scoring errors currently are; the method exists so callers can
    /// branch on the class instead of matching every variant.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ScoringError::QuizTooLarge { .. }
                | ScoringError::AnswerCountMismatch { .. }
                | ScoringError::EmptyQuiz
                | ScoringError::ScoreExceedsTotal { .. }
                | ScoringError::PercentageOutOfRange(_)
                | ScoringError::QuizScoreOutOfRange(_)
                | ScoringError::LoginFrequencyOutOfRange(_)
                | ScoringError::OptionOutOfRange { .. }
                | ScoringError::QuizAlreadyComplete
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = ScoringError::QuizTooLarge {
            requested: 25,
            available: 20,
        };
        assert_eq!(
            err.to_string(),
            "requested 25 questions but the catalog only has 20"
        );
        assert!(ScoringError::LoginFrequencyOutOfRange(9)
            .to_string()
            .contains('9'));
    }

    #[test]
    fn every_variant_is_invalid_argument() {
        assert!(ScoringError::EmptyQuiz.is_invalid_argument());
        assert!(ScoringError::PercentageOutOfRange(101).is_invalid_argument());
        assert!(ScoringError::QuizAlreadyComplete.is_invalid_argument());
    }
}
