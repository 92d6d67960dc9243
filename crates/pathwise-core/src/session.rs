//! Per-student session state.
//!
//! A [`StudentSession`] is owned by exactly one active student flow. All
//! counter changes go through its methods, and the engagement level is read
//! back from the counters after every change.

use std::collections::BTreeSet;

use serde::Serialize;
use uuid::Uuid;

use crate::content::{LessonSection, LESSON_SECTIONS};
use crate::model::{EngagementData, EngagementLevel, LearningLevel, QuizResult};

/// Minutes credited for finishing a quiz.
pub const QUIZ_TIME_CREDIT_MINUTES: u32 = 5;

#[derive(Debug, Clone, Serialize)]
pub struct StudentSession {
    id: Uuid,
    engagement: EngagementData,
    quiz_result: Option<QuizResult>,
    completed_sections: BTreeSet<LessonSection>,
}

impl Default for StudentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            engagement: EngagementData::default(),
            quiz_result: None,
            completed_sections: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn engagement(&self) -> &EngagementData {
        &self.engagement
    }

    /// Current engagement level, recomputed from the counters.
    pub fn engagement_level(&self) -> EngagementLevel {
        self.engagement.level()
    }

    /// The latest graded quiz, if the student has taken one.
    pub fn quiz_result(&self) -> Option<&QuizResult> {
        self.quiz_result.as_ref()
    }

    pub fn learning_level(&self) -> Option<LearningLevel> {
        self.quiz_result.as_ref().map(QuizResult::learning_level)
    }

    /// One more minute of activity.
    pub fn record_minute(&mut self) -> EngagementLevel {
        self.engagement.add_minutes(1);
        self.updated("minute")
    }

    /// A finished quiz: counts an attempt, credits quiz time and keeps the result.
    pub fn record_quiz(&mut self, result: QuizResult) -> EngagementLevel {
        self.engagement.add_quiz_attempt();
        self.engagement.add_minutes(QUIZ_TIME_CREDIT_MINUTES);
        self.quiz_result = Some(result);
        self.updated("quiz")
    }

    /// One tracked click on learning content.
    pub fn record_interaction(&mut self) -> EngagementLevel {
        self.engagement.add_click();
        self.updated("interaction")
    }

    /// Mark a lesson section done. Repeats are ignored.
    ///
    /// Returns `true` the first time a section is completed.
    pub fn complete_section(&mut self, section: LessonSection) -> bool {
        if !self.completed_sections.insert(section) {
            return false;
        }
        self.engagement.add_lesson();
        self.updated("section");
        true
    }

    pub fn completed_sections(&self) -> impl Iterator<Item = LessonSection> + '_ {
        self.completed_sections.iter().copied()
    }

    /// Share of lesson sections completed, 0..=100.
    pub fn lesson_progress(&self) -> u32 {
        (self.completed_sections.len() * 100 / LESSON_SECTIONS) as u32
    }

    fn updated(&self, event: &str) -> EngagementLevel {
        let level = self.engagement.level();
        tracing::debug!(
            session = %self.id,
            event,
            points = self.engagement.points(),
            %level,
            "session updated"
        );
        level
    }
}
