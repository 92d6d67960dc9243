//! Roster report types with JSON persistence and markdown rendering.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::alerts::derive_alerts;
use crate::error::ScoringError;
use crate::model::{Alert, EngagementLevel, LearningLevel, RiskLevel, StudentRecord};
use crate::roster::{Roster, RosterSummary};

/// A snapshot of a roster with every derived label resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Which roster this report covers.
    pub roster: RosterInfo,
    pub summary: RosterSummary,
    /// One row per student, in roster order.
    pub students: Vec<StudentRow>,
    pub alerts: Vec<Alert>,
}

/// Summary of a roster (without the full student records).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterInfo {
    pub id: String,
    pub name: String,
    pub student_count: usize,
}

/// A student record flattened together with its derived labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub learning_level: LearningLevel,
    pub quiz_score: u32,
    pub assignment_completion: bool,
    pub login_frequency: u32,
    pub engagement_points: u32,
    pub engagement_level: EngagementLevel,
    pub risk_points: u32,
    pub risk_level: RiskLevel,
    pub last_active: String,
}

impl StudentRow {
    pub fn from_record(student: &StudentRecord) -> Result<Self, ScoringError> {
        Ok(Self {
            id: student.id.clone(),
            name: student.name.clone(),
            email: student.email.clone(),
            learning_level: student.learning_level,
            quiz_score: student.quiz_score,
            assignment_completion: student.assignment_completion,
            login_frequency: student.login_frequency,
            engagement_points: student.engagement.points(),
            engagement_level: student.engagement_level(),
            risk_points: student.risk_points()?,
            risk_level: student.risk_level()?,
            last_active: student.last_active.clone(),
        })
    }
}

impl RosterReport {
    /// Build a report for the roster as it stands now.
    pub fn build(roster: &Roster) -> Result<Self, ScoringError> {
        let alerts = derive_alerts(roster)?;
        let summary = RosterSummary::compute(roster, &alerts)?;
        let students = roster
            .students
            .iter()
            .map(StudentRow::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            roster: RosterInfo {
                id: roster.id.clone(),
                name: roster.name.clone(),
                student_count: roster.students.len(),
            },
            summary,
            students,
            alerts,
        })
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: RosterReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        let summary = &self.summary;

        md.push_str(&format!("# {}\n\n", self.roster.name));
        md.push_str(&format!(
            "**Summary:** {} students, {} high risk, {} moderate risk, {} low engagement, average quiz score {:.1}%\n\n",
            summary.total_students,
            summary.risk.high,
            summary.risk.moderate,
            summary.low_engagement,
            summary.average_quiz_score
        ));

        if !self.students.is_empty() {
            md.push_str("## Students\n\n");
            md.push_str("| Name | Level | Quiz | Engagement | Risk | Last active |\n");
            md.push_str("|------|-------|------|------------|------|-------------|\n");
            for s in &self.students {
                md.push_str(&format!(
                    "| {} | {} | {}% | {} ({}) | {} ({}) | {} |\n",
                    s.name,
                    s.learning_level,
                    s.quiz_score,
                    s.engagement_level,
                    s.engagement_points,
                    s.risk_level,
                    s.risk_points,
                    s.last_active
                ));
            }
            md.push('\n');
        }

        if !self.alerts.is_empty() {
            md.push_str("## Alerts\n\n");
            for a in &self.alerts {
                md.push_str(&format!(
                    "- **[{}] {}** ({}): {}\n",
                    a.severity, a.student_name, a.kind, a.message
                ));
                if let Some(suggestion) = &a.suggestion {
                    md.push_str(&format!("  - {suggestion}\n"));
                }
            }
        }

        md
    }
}
