//! Rule-based classification of learning, engagement and risk levels.
//!
//! Each classifier is a pure function of its inputs. Engagement and risk
//! accumulate points from independent, non-overlapping buckets per signal and
//! then map the sum onto a level.

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::model::{EngagementData, EngagementLevel, LearningLevel, RiskLevel};

/// Upper bound of the beginner band (inclusive).
pub const BEGINNER_MAX_PERCENT: u32 = 40;
/// Upper bound of the intermediate band (inclusive).
pub const INTERMEDIATE_MAX_PERCENT: u32 = 70;

/// Engagement points at or above which engagement is high.
pub const HIGH_ENGAGEMENT_POINTS: u32 = 70;
/// Engagement points at or above which engagement is medium.
pub const MEDIUM_ENGAGEMENT_POINTS: u32 = 40;

/// Risk points at or above which risk is high.
pub const HIGH_RISK_POINTS: u32 = 5;
/// Risk points at or above which risk is moderate.
pub const MODERATE_RISK_POINTS: u32 = 3;

/// Days in the login-frequency window.
pub const LOGIN_WINDOW_DAYS: u32 = 7;

/// Classify a quiz percentage into a learning level.
///
/// `0..=40` is beginner, `41..=70` intermediate and `71..=100` advanced.
pub fn classify_learning_level(percentage: u32) -> Result<LearningLevel, ScoringError> {
    if percentage > 100 {
        return Err(ScoringError::PercentageOutOfRange(percentage));
    }
    let level = if percentage <= BEGINNER_MAX_PERCENT {
        LearningLevel::Beginner
    } else if percentage <= INTERMEDIATE_MAX_PERCENT {
        LearningLevel::Intermediate
    } else {
        LearningLevel::Advanced
    };
    tracing::debug!(percentage, %level, "classified learning level");
    Ok(level)
}

fn time_points(minutes: u32) -> u32 {
    match minutes {
        60.. => 30,
        30..=59 => 20,
        15..=29 => 10,
        _ => 0,
    }
}

fn quiz_attempt_points(attempts: u32) -> u32 {
    match attempts {
        4.. => 25,
        2..=3 => 15,
        1 => 5,
        _ => 0,
    }
}

fn click_points(clicks: u32) -> u32 {
    match clicks {
        100.. => 25,
        50..=99 => 15,
        20..=49 => 5,
        _ => 0,
    }
}

fn lesson_points(lessons: u32) -> u32 {
    match lessons {
        8.. => 20,
        4..=7 => 12,
        2..=3 => 5,
        _ => 0,
    }
}

/// Weighted engagement points, 0..=100.
pub fn engagement_points(data: &EngagementData) -> u32 {
    time_points(data.time_spent())
        + quiz_attempt_points(data.quiz_attempts())
        + click_points(data.interaction_clicks())
        + lesson_points(data.lessons_completed())
}

/// Classify the usage counters into an engagement level.
pub fn score_engagement(data: &EngagementData) -> EngagementLevel {
    let points = engagement_points(data);
    let level = if points >= HIGH_ENGAGEMENT_POINTS {
        EngagementLevel::High
    } else if points >= MEDIUM_ENGAGEMENT_POINTS {
        EngagementLevel::Medium
    } else {
        EngagementLevel::Low
    };
    tracing::debug!(points, %level, "scored engagement");
    level
}

/// The three signals the risk scorer looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSignals {
    quiz_score: u32,
    assignment_completion: bool,
    login_frequency: u32,
}

impl RiskSignals {
    /// Build a validated signal set.
    ///
    /// `quiz_score` must be in `0..=100` and `login_frequency` in `0..=7`.
    pub fn new(
        quiz_score: u32,
        assignment_completion: bool,
        login_frequency: u32,
    ) -> Result<Self, ScoringError> {
        if quiz_score > 100 {
            return Err(ScoringError::QuizScoreOutOfRange(quiz_score));
        }
        if login_frequency > LOGIN_WINDOW_DAYS {
            return Err(ScoringError::LoginFrequencyOutOfRange(login_frequency));
        }
        Ok(Self {
            quiz_score,
            assignment_completion,
            login_frequency,
        })
    }

    pub fn quiz_score(&self) -> u32 {
        self.quiz_score
    }

    pub fn assignment_completion(&self) -> bool {
        self.assignment_completion
    }

    pub fn login_frequency(&self) -> u32 {
        self.login_frequency
    }
}

fn quiz_score_risk(score: u32) -> u32 {
    match score {
        0..=39 => 3,
        40..=59 => 2,
        60..=69 => 1,
        _ => 0,
    }
}

fn login_risk(days: u32) -> u32 {
    match days {
        0..=1 => 3,
        2..=3 => 1,
        _ => 0,
    }
}

/// Risk points for a validated signal set, 0..=8.
pub fn risk_points(signals: &RiskSignals) -> u32 {
    let assignment = if signals.assignment_completion { 0 } else { 2 };
    quiz_score_risk(signals.quiz_score) + assignment + login_risk(signals.login_frequency)
}

/// Classify a signal set into a risk level.
pub fn score_risk(signals: &RiskSignals) -> RiskLevel {
    let points = risk_points(signals);
    let level = if points >= HIGH_RISK_POINTS {
        RiskLevel::High
    } else if points >= MODERATE_RISK_POINTS {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };
    tracing::debug!(points, %level, "scored risk");
    level
}
