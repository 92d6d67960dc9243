//! The `pathwise insight` command.

use std::path::PathBuf;

use anyhow::Result;

use pathwise_core::feedback::student_insight;
use pathwise_core::report::StudentRow;

use super::load_roster;

pub fn execute(
    student_id: String,
    roster_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let roster = load_roster(roster_path, config_path.as_deref())?;
    let student = roster
        .find(&student_id)
        .ok_or_else(|| anyhow::anyhow!("no student with id {student_id} in {}", roster.name))?;
    let row = StudentRow::from_record(student)?;

    println!("{} [{}] <{}>", row.name, student.initials(), row.email);
    println!("  Learning level: {}", row.learning_level);
    println!("  Quiz score: {}%", row.quiz_score);
    println!(
        "  Assignment: {}",
        if row.assignment_completion {
            "completed"
        } else {
            "missing"
        }
    );
    println!("  Active days this week: {}/7", row.login_frequency);
    println!(
        "  Engagement: {} ({} points, {} min, {} clicks, {} lessons)",
        row.engagement_level,
        row.engagement_points,
        student.engagement.time_spent(),
        student.engagement.interaction_clicks(),
        student.engagement.lessons_completed()
    );
    println!("  Risk: {} ({} points)", row.risk_level, row.risk_points);
    if !row.last_active.is_empty() {
        println!("  Last active: {}", row.last_active);
    }

    println!("\n{}", student_insight(student)?);

    Ok(())
}
