//! The `pathwise engagement` command.

use anyhow::Result;

use pathwise_core::feedback::engagement_suggestions;
use pathwise_core::model::EngagementData;

pub fn execute(time_spent: u32, quiz_attempts: u32, clicks: u32, lessons: u32) -> Result<()> {
    let data = EngagementData::new(time_spent, quiz_attempts, clicks, lessons);
    let level = data.level();

    println!("Engagement points: {}/100", data.points());
    println!("Engagement level: {level}");
    println!("\nSuggestions:");
    for suggestion in engagement_suggestions(level) {
        println!("  - {suggestion}");
    }

    Ok(())
}
