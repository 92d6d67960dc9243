//! The `pathwise roster` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use pathwise_core::model::RiskLevel;
use pathwise_core::report::RosterReport;

use super::load_roster;

pub fn execute(
    roster_path: Option<PathBuf>,
    format: String,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let roster = load_roster(roster_path, config_path.as_deref())?;
    let report = RosterReport::build(&roster)?;

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", report.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => print_text(&report),
        other => anyhow::bail!("unknown format: {other} (expected text, json, or markdown)"),
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Report saved to {}", path.display());
    }

    Ok(())
}

fn print_text(report: &RosterReport) {
    let summary = &report.summary;

    println!("{} ({} students)", report.roster.name, summary.total_students);
    for level in RiskLevel::ALL.iter().rev() {
        println!(
            "  {level} risk: {} ({:.0}%)",
            summary.risk.count(*level),
            summary.risk_share(*level) * 100.0
        );
    }
    println!("  low engagement: {}", summary.low_engagement);
    println!("  average quiz score: {:.1}%", summary.average_quiz_score);

    let mut table = Table::new();
    table.set_header(vec![
        "ID",
        "Name",
        "Level",
        "Quiz",
        "Engagement",
        "Risk",
        "Last active",
    ]);

    for s in &report.students {
        table.add_row(vec![
            Cell::new(&s.id),
            Cell::new(&s.name),
            Cell::new(s.learning_level),
            Cell::new(format!("{}%", s.quiz_score)),
            Cell::new(format!("{} ({})", s.engagement_level, s.engagement_points)),
            Cell::new(format!("{} ({})", s.risk_level, s.risk_points)),
            Cell::new(&s.last_active),
        ]);
    }

    println!("\n{table}");

    if report.alerts.is_empty() {
        println!("\nNo alerts.");
        return;
    }

    println!("\nAlerts ({}, {} high):", report.alerts.len(), summary.high_severity_alerts);
    for a in &report.alerts {
        println!("  [{}] {} ({}): {}", a.severity, a.student_name, a.kind, a.message);
        if let Some(suggestion) = &a.suggestion {
            println!("      {suggestion}");
        }
    }
}
