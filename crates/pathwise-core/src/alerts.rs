//! Alert derivation for the teacher dashboard.
//!
//! Alerts are recomputed from the roster on every call: a risk alert for each
//! high-risk student, an engagement alert for each low-engagement student, and
//! an achievement alert for top advanced performers.

use crate::error::ScoringError;
use crate::model::{
    Alert, AlertKind, EngagementLevel, LearningLevel, RiskLevel, Severity, StudentRecord,
};
use crate::roster::Roster;

/// Quiz score at or above which an advanced student earns an achievement alert.
pub const ACHIEVEMENT_QUIZ_SCORE: u32 = 90;

struct Raised {
    kind: AlertKind,
    severity: Severity,
    message: String,
    suggestion: String,
}

fn risk_alert(student: &StudentRecord, points: u32) -> Raised {
    let mut message = format!(
        "Risk score {points}: quiz score {}% with {} active day(s) this week",
        student.quiz_score, student.login_frequency
    );
    if !student.assignment_completion {
        message.push_str(" and a missed assignment");
    }
    let suggestion = if student.quiz_score < 40 {
        "Consider reaching out personally. Offer a one-on-one tutoring session and simpler practice exercises."
    } else {
        "Recommend foundational review materials. Consider pairing with a peer mentor from the advanced group."
    };
    Raised {
        kind: AlertKind::Risk,
        severity: Severity::High,
        message,
        suggestion: suggestion.to_string(),
    }
}

fn engagement_alert(student: &StudentRecord, risk: RiskLevel) -> Raised {
    let severity = if risk == RiskLevel::High {
        Severity::High
    } else {
        Severity::Medium
    };
    let message = format!(
        "Low engagement: {} points, {} interaction clicks and {} lesson(s) completed",
        student.engagement.points(),
        student.engagement.interaction_clicks(),
        student.engagement.lessons_completed()
    );
    Raised {
        kind: AlertKind::Engagement,
        severity,
        message,
        suggestion: "Try interactive challenges instead of reading materials. Schedule a check-in to understand any blockers."
            .to_string(),
    }
}

fn achievement_alert(student: &StudentRecord) -> Raised {
    Raised {
        kind: AlertKind::Achievement,
        severity: Severity::Low,
        message: format!("Scored {}% at the advanced level", student.quiz_score),
        suggestion: "Excellent candidate for the peer tutoring program. Consider recommending additional challenge projects."
            .to_string(),
    }
}

/// Derive every alert for a roster.
///
/// Ordered by severity (high first); ties keep roster order, risk before
/// engagement before achievement. Ids are assigned sequentially from "1"
/// after ordering.
pub fn derive_alerts(roster: &Roster) -> Result<Vec<Alert>, ScoringError> {
    let mut raised: Vec<(&StudentRecord, Raised)> = Vec::new();

    for student in &roster.students {
        let points = student.risk_points()?;
        let risk = student.risk_level()?;

        if risk == RiskLevel::High {
            raised.push((student, risk_alert(student, points)));
        }
        if student.engagement_level() == EngagementLevel::Low {
            raised.push((student, engagement_alert(student, risk)));
        }
        if student.learning_level == LearningLevel::Advanced
            && student.quiz_score >= ACHIEVEMENT_QUIZ_SCORE
        {
            raised.push((student, achievement_alert(student)));
        }
    }

    // stable: equal severities keep insertion order
    raised.sort_by_key(|(_, r)| std::cmp::Reverse(r.severity));

    let alerts: Vec<Alert> = raised
        .into_iter()
        .enumerate()
        .map(|(i, (student, r))| Alert {
            id: (i + 1).to_string(),
            kind: r.kind,
            severity: r.severity,
            student_id: student.id.clone(),
            student_name: student.name.clone(),
            message: r.message,
            timestamp: student.last_active.clone(),
            suggestion: Some(r.suggestion),
        })
        .collect();

    tracing::debug!(count = alerts.len(), roster = %roster.id, "derived alerts");
    Ok(alerts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EngagementData;
    use crate::roster::tests::{sample_roster, student};

    #[test]
    fn sample_roster_alerts() {
        let alerts = derive_alerts(&sample_roster()).unwrap();
        let summary: Vec<(&str, AlertKind, Severity)> = alerts
            .iter()
            .map(|a| (a.student_id.as_str(), a.kind, a.severity))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("1", AlertKind::Risk, Severity::High),
                ("1", AlertKind::Engagement, Severity::High),
                ("3", AlertKind::Achievement, Severity::Low),
            ]
        );
        assert_eq!(
            alerts.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "2", "3"]
        );
    }

    #[test]
    fn risk_alert_describes_signals() {
        let alerts = derive_alerts(&sample_roster()).unwrap();
        let risk = &alerts[0];
        assert_eq!(risk.student_name, "Emma Johnson");
        assert!(risk.message.contains("Risk score 8"));
        assert!(risk.message.contains("35%"));
        assert!(risk.message.contains("missed assignment"));
        assert!(risk
            .suggestion
            .as_deref()
            .unwrap()
            .contains("one-on-one tutoring"));
        assert_eq!(risk.timestamp, "1 day ago");
    }

    #[test]
    fn low_engagement_without_risk_is_medium() {
        let roster = Roster {
            id: "r".into(),
            name: "R".into(),
            students: vec![student(
                "9",
                "Quiet Learner",
                LearningLevel::Intermediate,
                80,
                true,
                6,
                EngagementData::new(5, 1, 3, 0),
            )],
        };
        let alerts = derive_alerts(&roster).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::Engagement);
        assert_eq!(alerts[0].severity, Severity::Medium);
    }

    #[test]
    fn medium_alerts_sort_between_high_and_low() {
        let mut roster = sample_roster();
        roster.students.push(student(
            "10",
            "Late Joiner",
            LearningLevel::Intermediate,
            75,
            true,
            5,
            EngagementData::default(),
        ));
        let alerts = derive_alerts(&roster).unwrap();
        let severities: Vec<Severity> = alerts.iter().map(|a| a.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::High, Severity::High, Severity::Medium, Severity::Low]
        );
    }

    #[test]
    fn equal_severity_keeps_roster_order_not_id_order() {
        let roster = Roster {
            id: "r".into(),
            name: "R".into(),
            students: vec![
                student(
                    "2",
                    "Noah Davis",
                    LearningLevel::Beginner,
                    28,
                    false,
                    2,
                    EngagementData::new(20, 1, 18, 2),
                ),
                student(
                    "1",
                    "Emma Johnson",
                    LearningLevel::Beginner,
                    35,
                    false,
                    1,
                    EngagementData::new(15, 1, 12, 1),
                ),
            ],
        };
        let alerts = derive_alerts(&roster).unwrap();
        let order: Vec<(&str, AlertKind)> = alerts
            .iter()
            .map(|a| (a.student_id.as_str(), a.kind))
            .collect();
        assert_eq!(
            order,
            vec![
                ("2", AlertKind::Risk),
                ("2", AlertKind::Engagement),
                ("1", AlertKind::Risk),
                ("1", AlertKind::Engagement),
            ]
        );
    }

    #[test]
    fn quiet_roster_has_no_alerts() {
        let roster = Roster {
            id: "r".into(),
            name: "R".into(),
            students: vec![student(
                "5",
                "Ava Wilson",
                LearningLevel::Intermediate,
                72,
                true,
                5,
                EngagementData::new(65, 4, 112, 7),
            )],
        };
        assert!(derive_alerts(&roster).unwrap().is_empty());
    }
}
