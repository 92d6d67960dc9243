//! The `pathwise risk` command.

use anyhow::Result;

use pathwise_core::classify::{risk_points, score_risk, RiskSignals};

pub fn execute(quiz_score: u32, login_frequency: u32, assignment_missing: bool) -> Result<()> {
    let signals = RiskSignals::new(quiz_score, !assignment_missing, login_frequency)?;

    println!("Risk points: {}", risk_points(&signals));
    println!("Risk level: {}", score_risk(&signals));

    Ok(())
}
