//! Quiz generation and grading.
//!
//! A quiz is a uniformly random, ordered subset of a catalog. Grading compares
//! submitted option indices position by position against the questions asked.

use rand::Rng;

use crate::classify::classify_learning_level;
use crate::error::ScoringError;
use crate::model::{QuizQuestion, QuizResult};

/// Draw `k` distinct questions from `catalog` in random order.
///
/// Runs a Fisher-Yates shuffle over a copy of the whole catalog and keeps the
/// first `k`, so every ordered subset is equally likely. The catalog itself is
/// left untouched.
pub fn shuffle_and_take<R: Rng + ?Sized>(
    catalog: &[QuizQuestion],
    k: usize,
    rng: &mut R,
) -> Result<Vec<QuizQuestion>, ScoringError> {
    if k > catalog.len() {
        return Err(ScoringError::QuizTooLarge {
            requested: k,
            available: catalog.len(),
        });
    }

    let mut shuffled = catalog.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled.truncate(k);

    tracing::info!(
        requested = k,
        catalog_size = catalog.len(),
        "generated quiz"
    );
    Ok(shuffled)
}

/// Round `100 * score / total` to the nearest integer, ties to even.
///
/// Integer arithmetic only, so boundary cases such as 81/200 (40.5%) land
/// deterministically on 40.
pub fn percentage(score: usize, total: usize) -> Result<u32, ScoringError> {
    if total == 0 {
        return Err(ScoringError::EmptyQuiz);
    }
    if score > total {
        return Err(ScoringError::ScoreExceedsTotal { score, total });
    }

    let numerator = score as u64 * 100;
    let total = total as u64;
    let mut quotient = numerator / total;
    let twice_remainder = (numerator % total) * 2;
    if twice_remainder > total || (twice_remainder == total && quotient % 2 == 1) {
        quotient += 1;
    }
    // score <= total keeps the quotient within 0..=100
    Ok(quotient as u32)
}

/// Grade a completed quiz.
pub fn grade(questions: &[QuizQuestion], answers: &[usize]) -> Result<QuizResult, ScoringError> {
    if questions.is_empty() {
        return Err(ScoringError::EmptyQuiz);
    }
    if questions.len() != answers.len() {
        return Err(ScoringError::AnswerCountMismatch {
            expected: questions.len(),
            actual: answers.len(),
        });
    }

    let score = questions
        .iter()
        .zip(answers)
        .filter(|(q, a)| q.is_correct(**a))
        .count();
    let percent = percentage(score, questions.len())?;
    let level = classify_learning_level(percent)?;

    tracing::debug!(score, total = questions.len(), percent, %level, "graded quiz");
    Ok(QuizResult::new(
        score,
        questions.len(),
        percent,
        level,
        answers.to_vec(),
    ))
}

/// An in-progress quiz.
///
/// Holds the drawn questions and the answers submitted so far. Only
/// [`QuizSession::finish`] turns it into a [`QuizResult`], and only once every
/// question has an answer.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: Vec<usize>,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            answers: Vec::with_capacity(questions.len()),
            questions,
        }
    }

    /// Draw a fresh quiz of `k` questions from `catalog`.
    pub fn generate<R: Rng + ?Sized>(
        catalog: &[QuizQuestion],
        k: usize,
        rng: &mut R,
    ) -> Result<Self, ScoringError> {
        Ok(Self::new(shuffle_and_take(catalog, k, rng)?))
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// The next unanswered question, if any.
    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.answers.len())
    }

    /// Submit an option index for the current question.
    pub fn answer(&mut self, option: usize) -> Result<(), ScoringError> {
        let question = self.current().ok_or(ScoringError::QuizAlreadyComplete)?;
        if option >= question.options.len() {
            return Err(ScoringError::OptionOutOfRange {
                question_id: question.id,
                index: option,
                options: question.options.len(),
            });
        }
        self.answers.push(option);
        Ok(())
    }

    /// (answered, total)
    pub fn progress(&self) -> (usize, usize) {
        (self.answers.len(), self.questions.len())
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    /// Grade the session. Fails if any question is still unanswered.
    pub fn finish(self) -> Result<QuizResult, ScoringError> {
        grade(&self.questions, &self.answers)
    }
}
