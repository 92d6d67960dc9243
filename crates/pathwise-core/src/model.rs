//! Core data model types for pathwise.
//!
//! Levels, quiz questions and results, engagement counters, student records
//! and teacher alerts. Derived labels (engagement level, risk level) are
//! never stored; they are computed from the raw signals on every read.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::classify::{self, RiskSignals};
use crate::error::ScoringError;

/// Learning level from the diagnostic quiz percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl LearningLevel {
    pub const ALL: [LearningLevel; 3] = [
        LearningLevel::Beginner,
        LearningLevel::Intermediate,
        LearningLevel::Advanced,
    ];
}

impl fmt::Display for LearningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearningLevel::Beginner => write!(f, "beginner"),
            LearningLevel::Intermediate => write!(f, "intermediate"),
            LearningLevel::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for LearningLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(LearningLevel::Beginner),
            "intermediate" => Ok(LearningLevel::Intermediate),
            "advanced" => Ok(LearningLevel::Advanced),
            other => Err(format!("unknown learning level: {other}")),
        }
    }
}

/// Engagement level from the weighted usage counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngagementLevel::Low => write!(f, "low"),
            EngagementLevel::Medium => write!(f, "medium"),
            EngagementLevel::High => write!(f, "high"),
        }
    }
}

impl FromStr for EngagementLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(EngagementLevel::Low),
            "medium" => Ok(EngagementLevel::Medium),
            "high" => Ok(EngagementLevel::High),
            other => Err(format!("unknown engagement level: {other}")),
        }
    }
}

/// Risk level from quiz score, assignment completion and login frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High];
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Moderate => write!(f, "moderate"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "moderate" => Ok(RiskLevel::Moderate),
            "high" => Ok(RiskLevel::High),
            other => Err(format!("unknown risk level: {other}")),
        }
    }
}

/// A single multiple-choice question from a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Identifier, unique within its catalog.
    pub id: u32,
    /// The question text.
    pub question: String,
    /// Answer options in presentation order.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_answer: usize,
    /// How hard the question is.
    pub difficulty: LearningLevel,
}

impl QuizQuestion {
    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct_answer
    }
}

/// A named collection of questions a quiz is drawn from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionCatalog {
    /// Unique identifier for this catalog.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// What the catalog covers.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

/// The graded outcome of one completed quiz attempt.
///
/// Only grading creates these, so `percentage` and `learning_level` always
/// agree with `score` and `total_questions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    score: usize,
    total_questions: usize,
    percentage: u32,
    learning_level: LearningLevel,
    answers: Vec<usize>,
}

impl QuizResult {
    pub(crate) fn new(
        score: usize,
        total_questions: usize,
        percentage: u32,
        learning_level: LearningLevel,
        answers: Vec<usize>,
    ) -> Self {
        Self {
            score,
            total_questions,
            percentage,
            learning_level,
            answers,
        }
    }

    /// Number of correct answers.
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    /// Rounded percentage in 0..=100.
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    pub fn learning_level(&self) -> LearningLevel {
        self.learning_level
    }

    /// Submitted option indices, one per question.
    pub fn answers(&self) -> &[usize] {
        &self.answers
    }
}

/// Usage counters for one student.
///
/// There is no stored engagement label. [`EngagementData::level`] recomputes
/// it from the counters, and serialization emits that computed label as
/// `engagement_score` for display. A label supplied on input is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngagementData {
    time_spent: u32,
    quiz_attempts: u32,
    interaction_clicks: u32,
    lessons_completed: u32,
}

impl EngagementData {
    pub fn new(
        time_spent: u32,
        quiz_attempts: u32,
        interaction_clicks: u32,
        lessons_completed: u32,
    ) -> Self {
        Self {
            time_spent,
            quiz_attempts,
            interaction_clicks,
            lessons_completed,
        }
    }

    /// Minutes spent in the current session.
    pub fn time_spent(&self) -> u32 {
        self.time_spent
    }

    pub fn quiz_attempts(&self) -> u32 {
        self.quiz_attempts
    }

    pub fn interaction_clicks(&self) -> u32 {
        self.interaction_clicks
    }

    pub fn lessons_completed(&self) -> u32 {
        self.lessons_completed
    }

    pub fn add_minutes(&mut self, minutes: u32) {
        self.time_spent = self.time_spent.saturating_add(minutes);
    }

    pub fn add_quiz_attempt(&mut self) {
        self.quiz_attempts = self.quiz_attempts.saturating_add(1);
    }

    pub fn add_click(&mut self) {
        self.interaction_clicks = self.interaction_clicks.saturating_add(1);
    }

    pub fn add_lesson(&mut self) {
        self.lessons_completed = self.lessons_completed.saturating_add(1);
    }

    /// Weighted engagement points, 0..=100.
    pub fn points(&self) -> u32 {
        classify::engagement_points(self)
    }

    /// Engagement level derived from the current counters.
    pub fn level(&self) -> EngagementLevel {
        classify::score_engagement(self)
    }
}

impl Serialize for EngagementData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("EngagementData", 5)?;
        state.serialize_field("time_spent", &self.time_spent)?;
        state.serialize_field("quiz_attempts", &self.quiz_attempts)?;
        state.serialize_field("interaction_clicks", &self.interaction_clicks)?;
        state.serialize_field("lessons_completed", &self.lessons_completed)?;
        state.serialize_field("engagement_score", &self.level())?;
        state.end()
    }
}

/// A teacher-facing record of one student on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Level assigned by the student's diagnostic quiz.
    pub learning_level: LearningLevel,
    /// Latest quiz score, 0..=100.
    pub quiz_score: u32,
    pub assignment_completion: bool,
    /// Days active in the last 7.
    pub login_frequency: u32,
    #[serde(default)]
    pub engagement: EngagementData,
    /// Display string, e.g. "3 days ago".
    #[serde(default)]
    pub last_active: String,
}

impl StudentRecord {
    pub fn risk_signals(&self) -> Result<RiskSignals, ScoringError> {
        RiskSignals::new(
            self.quiz_score,
            self.assignment_completion,
            self.login_frequency,
        )
    }

    pub fn risk_points(&self) -> Result<u32, ScoringError> {
        Ok(classify::risk_points(&self.risk_signals()?))
    }

    /// Risk level derived from the record's current signals.
    pub fn risk_level(&self) -> Result<RiskLevel, ScoringError> {
        Ok(classify::score_risk(&self.risk_signals()?))
    }

    pub fn engagement_level(&self) -> EngagementLevel {
        self.engagement.level()
    }

    /// Initials for compact display ("Emma Johnson" -> "EJ").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// What an alert is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Risk,
    Engagement,
    Achievement,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::Risk => write!(f, "risk"),
            AlertKind::Engagement => write!(f, "engagement"),
            AlertKind::Achievement => write!(f, "achievement"),
        }
    }
}

/// How urgently a teacher should look at an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// A notification surfaced on the teacher dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: Severity,
    pub student_id: String,
    pub student_name: String,
    pub message: String,
    /// Display string, e.g. "2 hours ago".
    pub timestamp: String,
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// Static lesson content for one learning level.
#[derive(Debug, Clone, Serialize)]
pub struct LearningContent {
    pub level: LearningLevel,
    pub title: &'static str,
    pub explanation: &'static str,
    pub practice_questions: &'static [&'static str],
    pub tips: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_display_and_parse() {
        assert_eq!(LearningLevel::Intermediate.to_string(), "intermediate");
        assert_eq!(
            "Advanced".parse::<LearningLevel>().unwrap(),
            LearningLevel::Advanced
        );
        assert_eq!("moderate".parse::<RiskLevel>().unwrap(), RiskLevel::Moderate);
        assert_eq!(
            "HIGH".parse::<EngagementLevel>().unwrap(),
            EngagementLevel::High
        );
        assert!("expert".parse::<LearningLevel>().is_err());
        assert!("medium".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn levels_are_ordered_low_to_high() {
        assert!(LearningLevel::Beginner < LearningLevel::Intermediate);
        assert!(LearningLevel::Intermediate < LearningLevel::Advanced);
        assert!(EngagementLevel::Low < EngagementLevel::Medium);
        assert!(RiskLevel::Moderate < RiskLevel::High);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn engagement_label_follows_counters() {
        let mut data = EngagementData::default();
        assert_eq!(data.level(), EngagementLevel::Low);

        data.add_minutes(60);
        data.add_quiz_attempt();
        data.add_quiz_attempt();
        assert_eq!(data.points(), 45);
        assert_eq!(data.level(), EngagementLevel::Medium);
    }

    #[test]
    fn engagement_serializes_derived_label() {
        let data = EngagementData::new(60, 4, 100, 8);
        let json = serde_json::to_value(data).unwrap();
        assert_eq!(json["engagement_score"], "high");
        assert_eq!(json["time_spent"], 60);
    }

    #[test]
    fn engagement_ignores_supplied_label() {
        let json = r#"{"time_spent": 0, "quiz_attempts": 0, "interaction_clicks": 0,
                       "lessons_completed": 0, "engagement_score": "high"}"#;
        let data: EngagementData = serde_json::from_str(json).unwrap();
        assert_eq!(data.level(), EngagementLevel::Low);
    }

    #[test]
    fn student_risk_is_derived() {
        let student = StudentRecord {
            id: "1".into(),
            name: "Emma Johnson".into(),
            email: "emma.j@school.edu".into(),
            learning_level: LearningLevel::Beginner,
            quiz_score: 35,
            assignment_completion: false,
            login_frequency: 1,
            engagement: EngagementData::new(15, 1, 12, 1),
            last_active: "3 days ago".into(),
        };
        assert_eq!(student.risk_points().unwrap(), 8);
        assert_eq!(student.risk_level().unwrap(), RiskLevel::High);
        assert_eq!(student.engagement_level(), EngagementLevel::Low);
        assert_eq!(student.initials(), "EJ");
    }

    #[test]
    fn student_with_bad_signals_is_rejected() {
        let student = StudentRecord {
            id: "x".into(),
            name: "X".into(),
            email: "x@school.edu".into(),
            learning_level: LearningLevel::Beginner,
            quiz_score: 50,
            assignment_completion: true,
            login_frequency: 9,
            engagement: EngagementData::default(),
            last_active: String::new(),
        };
        assert_eq!(
            student.risk_level(),
            Err(ScoringError::LoginFrequencyOutOfRange(9))
        );
    }

    #[test]
    fn alert_kind_serializes_as_type() {
        let alert = Alert {
            id: "1".into(),
            kind: AlertKind::Risk,
            severity: Severity::High,
            student_id: "1".into(),
            student_name: "Emma Johnson".into(),
            message: "m".into(),
            timestamp: "now".into(),
            suggestion: None,
        };
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["type"], "risk");
        assert_eq!(json["severity"], "high");
    }
}
