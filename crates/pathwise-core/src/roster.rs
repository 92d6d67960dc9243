//! Teacher roster and class-level summary statistics.

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::model::{Alert, EngagementLevel, RiskLevel, Severity, StudentRecord};

/// A class of students as seen by a teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    /// Unique identifier for this roster.
    pub id: String,
    /// Human-readable name (e.g. the course title).
    pub name: String,
    #[serde(default)]
    pub students: Vec<StudentRecord>,
}

impl Roster {
    /// Look a student up by id.
    pub fn find(&self, id: &str) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Students at a given derived risk level, in roster order.
    pub fn at_risk_level(&self, level: RiskLevel) -> Result<Vec<&StudentRecord>, ScoringError> {
        let mut matching = Vec::new();
        for student in &self.students {
            if student.risk_level()? == level {
                matching.push(student);
            }
        }
        Ok(matching)
    }
}

/// Number of students per risk level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub low: usize,
    pub moderate: usize,
    pub high: usize,
}

impl RiskBreakdown {
    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Moderate => self.moderate,
            RiskLevel::High => self.high,
        }
    }

    fn bump(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Moderate => self.moderate += 1,
            RiskLevel::High => self.high += 1,
        }
    }
}

/// Class-level figures shown at the top of the teacher dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSummary {
    pub total_students: usize,
    pub risk: RiskBreakdown,
    pub low_engagement: usize,
    pub high_severity_alerts: usize,
    /// Mean quiz score across the roster, 0.0 when empty.
    pub average_quiz_score: f64,
}

impl RosterSummary {
    /// Summarize a roster together with the alerts raised for it.
    pub fn compute(roster: &Roster, alerts: &[Alert]) -> Result<Self, ScoringError> {
        let mut risk = RiskBreakdown::default();
        let mut low_engagement = 0;
        let mut score_total = 0u64;

        for student in &roster.students {
            risk.bump(student.risk_level()?);
            if student.engagement_level() == EngagementLevel::Low {
                low_engagement += 1;
            }
            score_total += u64::from(student.quiz_score);
        }

        let total_students = roster.students.len();
        let average_quiz_score = if total_students == 0 {
            0.0
        } else {
            score_total as f64 / total_students as f64
        };

        Ok(Self {
            total_students,
            risk,
            low_engagement,
            high_severity_alerts: alerts
                .iter()
                .filter(|a| a.severity == Severity::High)
                .count(),
            average_quiz_score,
        })
    }

    /// Fraction of the roster at `level`, 0.0..=1.0.
    pub fn risk_share(&self, level: RiskLevel) -> f64 {
        if self.total_students == 0 {
            0.0
        } else {
            self.risk.count(level) as f64 / self.total_students as f64
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::{AlertKind, EngagementData, LearningLevel};

    pub(crate) fn student(
        id: &str,
        name: &str,
        level: LearningLevel,
        quiz_score: u32,
        assignment_completion: bool,
        login_frequency: u32,
        engagement: EngagementData,
    ) -> StudentRecord {
        StudentRecord {
            id: id.into(),
            name: name.into(),
            email: format!("{}@school.edu", name.to_lowercase().replace(' ', ".")),
            learning_level: level,
            quiz_score,
            assignment_completion,
            login_frequency,
            engagement,
            last_active: "1 day ago".into(),
        }
    }

    pub(crate) fn sample_roster() -> Roster {
        Roster {
            id: "networks-101".into(),
            name: "Computer Networks 101".into(),
            students: vec![
                // 3 + 2 + 3 = 8 high; engagement 10 + 5 + 0 + 0 = 15 low
                student(
                    "1",
                    "Emma Johnson",
                    LearningLevel::Beginner,
                    35,
                    false,
                    1,
                    EngagementData::new(15, 1, 12, 1),
                ),
                // 1 + 0 + 0 = 1 low; engagement 20 + 15 + 15 + 12 = 62 medium
                student(
                    "2",
                    "Liam Smith",
                    LearningLevel::Intermediate,
                    65,
                    true,
                    4,
                    EngagementData::new(45, 3, 78, 5),
                ),
                student(
                    "3",
                    "Olivia Brown",
                    LearningLevel::Advanced,
                    92,
                    true,
                    7,
                    EngagementData::new(120, 5, 245, 12),
                ),
                // 2 + 0 + 1 = 3 moderate; engagement 20 + 15 + 5 + 12 = 52 medium
                student(
                    "6",
                    "Mason Taylor",
                    LearningLevel::Beginner,
                    45,
                    true,
                    3,
                    EngagementData::new(35, 2, 45, 4),
                ),
            ],
        }
    }

    #[test]
    fn find_by_id() {
        let roster = sample_roster();
        assert_eq!(roster.find("3").map(|s| s.name.as_str()), Some("Olivia Brown"));
        assert!(roster.find("99").is_none());
    }

    #[test]
    fn filter_by_risk() {
        let roster = sample_roster();
        let high = roster.at_risk_level(RiskLevel::High).unwrap();
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].id, "1");
        assert_eq!(roster.at_risk_level(RiskLevel::Moderate).unwrap()[0].id, "6");
    }

    #[test]
    fn summary_counts() {
        let roster = sample_roster();
        let alerts = vec![Alert {
            id: "1".into(),
            kind: AlertKind::Risk,
            severity: Severity::High,
            student_id: "1".into(),
            student_name: "Emma Johnson".into(),
            message: "m".into(),
            timestamp: "now".into(),
            suggestion: None,
        }];
        let summary = RosterSummary::compute(&roster, &alerts).unwrap();
        assert_eq!(summary.total_students, 4);
        assert_eq!(
            summary.risk,
            RiskBreakdown {
                low: 2,
                moderate: 1,
                high: 1
            }
        );
        assert_eq!(summary.low_engagement, 1);
        assert_eq!(summary.high_severity_alerts, 1);
        assert!((summary.average_quiz_score - 59.25).abs() < 1e-9);
        assert!((summary.risk_share(RiskLevel::Low) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn empty_roster_summary() {
        let roster = Roster {
            id: "empty".into(),
            name: "Empty".into(),
            students: vec![],
        };
        let summary = RosterSummary::compute(&roster, &[]).unwrap();
        assert_eq!(summary.total_students, 0);
        assert_eq!(summary.average_quiz_score, 0.0);
        assert_eq!(summary.risk_share(RiskLevel::High), 0.0);
    }
}
