//! Templated feedback for students and insights for teachers.

use rand::Rng;

use crate::error::ScoringError;
use crate::model::{EngagementLevel, LearningLevel, RiskLevel, StudentRecord};

const BEGINNER_FEEDBACK: [&str; 3] = [
    "Great start! You're building a foundation in networking concepts. Let's strengthen your basics step by step.",
    "Every expert was once a beginner! Focus on understanding core concepts like LAN, WAN, and basic protocols.",
    "Don't worry about the score, what matters is your willingness to learn. Let's master the fundamentals together!",
];

const INTERMEDIATE_FEEDBACK: [&str; 3] = [
    "Good progress! You have a solid grasp of networking basics. Now let's dive deeper into protocols and architecture.",
    "You're on the right track! Focus on understanding how different network layers work together.",
    "Nice work! Let's strengthen your understanding of TCP/IP and network security concepts.",
];

const ADVANCED_FEEDBACK: [&str; 3] = [
    "Excellent performance! You have strong networking knowledge. Ready for advanced topics and real-world applications!",
    "Outstanding! Your understanding of network concepts is impressive. Let's explore complex scenarios and optimizations.",
    "Amazing results! You're well-prepared for advanced networking challenges and certifications.",
];

const LOW_ENGAGEMENT: [&str; 5] = [
    "Try our interactive network simulation to visualize concepts!",
    "Watch a 5-minute video on how the Internet works",
    "Complete today's mini-challenge on network devices!",
    "Join a study group session on OSI model basics",
    "Set a reminder to practice for just 10 minutes tomorrow",
];

const MEDIUM_ENGAGEMENT: [&str; 4] = [
    "You're doing well! Try the TCP/IP protocol challenge",
    "Focus on understanding subnetting for 15 minutes",
    "Explore the network security bonus content",
    "Review the OSI model layers to reinforce learning",
];

const HIGH_ENGAGEMENT: [&str; 4] = [
    "Amazing progress! Ready for advanced routing challenges?",
    "You've earned a networking streak badge!",
    "Explore CCNA-level materials",
    "Consider helping peers with basic networking concepts",
];

/// The fixed feedback pool for a learning level.
pub fn feedback_pool(level: LearningLevel) -> &'static [&'static str] {
    match level {
        LearningLevel::Beginner => &BEGINNER_FEEDBACK,
        LearningLevel::Intermediate => &INTERMEDIATE_FEEDBACK,
        LearningLevel::Advanced => &ADVANCED_FEEDBACK,
    }
}

/// Pick one feedback message for `level`, uniformly at random.
pub fn random_feedback<R: Rng + ?Sized>(level: LearningLevel, rng: &mut R) -> &'static str {
    let pool = feedback_pool(level);
    pool[rng.gen_range(0..pool.len())]
}

/// Suggestions shown to a student at a given engagement level.
pub fn engagement_suggestions(level: EngagementLevel) -> &'static [&'static str] {
    match level {
        EngagementLevel::Low => &LOW_ENGAGEMENT,
        EngagementLevel::Medium => &MEDIUM_ENGAGEMENT,
        EngagementLevel::High => &HIGH_ENGAGEMENT,
    }
}

/// Build the teacher-facing insight for a student.
///
/// Deterministic: sentences are chosen by risk level, then refined by quiz
/// score, engagement and learning level, and joined with single spaces.
pub fn insight_for(
    name: &str,
    risk: RiskLevel,
    quiz_score: u32,
    engagement: EngagementLevel,
    learning_level: LearningLevel,
) -> String {
    let mut sentences: Vec<String> = Vec::new();

    match risk {
        RiskLevel::High => {
            sentences.push(format!("{name} needs immediate attention."));
            if quiz_score < 40 {
                sentences.push(
                    "Consider scheduling a one-on-one session to review fundamentals.".into(),
                );
            }
            if engagement == EngagementLevel::Low {
                sentences.push(
                    "Try alternative learning formats like videos or interactive exercises."
                        .into(),
                );
            }
        }
        RiskLevel::Moderate => {
            sentences.push(format!("{name} is showing some concerning patterns."));
            sentences
                .push("A brief check-in conversation might help identify any blockers.".into());
        }
        RiskLevel::Low => {
            sentences.push(format!("{name} is performing well."));
            if learning_level == LearningLevel::Advanced {
                sentences.push(
                    "Consider offering mentorship opportunities or advanced projects.".into(),
                );
            }
        }
    }

    sentences.join(" ")
}

/// Insight for a roster record, using its derived risk and engagement levels.
pub fn student_insight(student: &StudentRecord) -> Result<String, ScoringError> {
    Ok(insight_for(
        &student.name,
        student.risk_level()?,
        student.quiz_score,
        student.engagement_level(),
        student.learning_level,
    ))
}
