//! TOML catalog and roster parser.
//!
//! Loads question catalogs and class rosters from TOML files and directories,
//! and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::classify::LOGIN_WINDOW_DAYS;
use crate::model::{EngagementData, LearningLevel, QuestionCatalog, QuizQuestion, StudentRecord};
use crate::roster::Roster;

/// Intermediate TOML structure for catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: u32,
    question: String,
    options: Vec<String>,
    correct_answer: usize,
    #[serde(default = "default_difficulty")]
    difficulty: String,
}

fn default_difficulty() -> String {
    "beginner".to_string()
}

/// Intermediate TOML structure for roster files.
#[derive(Debug, Deserialize)]
struct TomlRosterFile {
    roster: TomlRosterHeader,
    #[serde(default)]
    students: Vec<TomlStudent>,
}

#[derive(Debug, Deserialize)]
struct TomlRosterHeader {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct TomlStudent {
    id: String,
    name: String,
    #[serde(default)]
    email: String,
    learning_level: String,
    quiz_score: u32,
    #[serde(default)]
    assignment_completion: bool,
    login_frequency: u32,
    #[serde(default)]
    last_active: String,
    #[serde(default)]
    engagement: Option<TomlEngagement>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlEngagement {
    #[serde(default)]
    time_spent: u32,
    #[serde(default)]
    quiz_attempts: u32,
    #[serde(default)]
    interaction_clicks: u32,
    #[serde(default)]
    lessons_completed: u32,
}

fn parse_level(s: &str) -> Result<LearningLevel> {
    s.parse().map_err(|e: String| anyhow::anyhow!("{}", e))
}

/// Parse a single TOML file into a `QuestionCatalog`.
pub fn parse_catalog(path: &Path) -> Result<QuestionCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `QuestionCatalog` (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<QuestionCatalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let difficulty = parse_level(&q.difficulty)
                .with_context(|| format!("question {}", q.id))?;
            Ok(QuizQuestion {
                id: q.id,
                question: q.question,
                options: q.options,
                correct_answer: q.correct_answer,
                difficulty,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionCatalog {
        id: parsed.catalog.id,
        name: parsed.catalog.name,
        description: parsed.catalog.description,
        questions,
    })
}

/// Recursively load all `.toml` catalog files from a directory.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<QuestionCatalog>> {
    let mut catalogs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            catalogs.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(catalogs)
}

/// Parse a single TOML file into a `Roster`.
pub fn parse_roster(path: &Path) -> Result<Roster> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file: {}", path.display()))?;

    parse_roster_str(&content, path)
}

/// Parse a TOML string into a `Roster`.
pub fn parse_roster_str(content: &str, source_path: &Path) -> Result<Roster> {
    let parsed: TomlRosterFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let students = parsed
        .students
        .into_iter()
        .map(|s| {
            let learning_level =
                parse_level(&s.learning_level).with_context(|| format!("student {}", s.id))?;
            let engagement = s.engagement.unwrap_or_default();

            Ok(StudentRecord {
                id: s.id,
                name: s.name,
                email: s.email,
                learning_level,
                quiz_score: s.quiz_score,
                assignment_completion: s.assignment_completion,
                login_frequency: s.login_frequency,
                engagement: EngagementData::new(
                    engagement.time_spent,
                    engagement.quiz_attempts,
                    engagement.interaction_clicks,
                    engagement.lessons_completed,
                ),
                last_active: s.last_active,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Roster {
        id: parsed.roster.id,
        name: parsed.roster.name,
        students,
    })
}

/// A warning from catalog or roster validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question or student id (if applicable).
    pub item_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for common issues.
pub fn validate_catalog(catalog: &QuestionCatalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if catalog.questions.is_empty() {
        warnings.push(ValidationWarning {
            item_id: None,
            message: "catalog has no questions".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for q in &catalog.questions {
        if !seen_ids.insert(q.id) {
            warnings.push(ValidationWarning {
                item_id: Some(q.id.to_string()),
                message: format!("duplicate question ID: {}", q.id),
            });
        }
    }

    for q in &catalog.questions {
        if q.question.trim().is_empty() {
            warnings.push(ValidationWarning {
                item_id: Some(q.id.to_string()),
                message: "question text is empty".into(),
            });
        }
        if q.options.len() < 2 {
            warnings.push(ValidationWarning {
                item_id: Some(q.id.to_string()),
                message: format!("only {} option(s), need at least 2", q.options.len()),
            });
        }
        if q.correct_answer >= q.options.len() {
            warnings.push(ValidationWarning {
                item_id: Some(q.id.to_string()),
                message: format!(
                    "correct_answer {} is out of range for {} options",
                    q.correct_answer,
                    q.options.len()
                ),
            });
        }
    }

    warnings
}

/// Validate a roster for common issues.
pub fn validate_roster(roster: &Roster) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = HashSet::new();
    for s in &roster.students {
        if !seen_ids.insert(s.id.as_str()) {
            warnings.push(ValidationWarning {
                item_id: Some(s.id.clone()),
                message: format!("duplicate student ID: {}", s.id),
            });
        }
    }

    for s in &roster.students {
        if s.quiz_score > 100 {
            warnings.push(ValidationWarning {
                item_id: Some(s.id.clone()),
                message: format!("quiz_score {} is above 100", s.quiz_score),
            });
        }
        if s.login_frequency > LOGIN_WINDOW_DAYS {
            warnings.push(ValidationWarning {
                item_id: Some(s.id.clone()),
                message: format!(
                    "login_frequency {} is above {LOGIN_WINDOW_DAYS} days",
                    s.login_frequency
                ),
            });
        }
        if !s.email.is_empty() && !s.email.contains('@') {
            warnings.push(ValidationWarning {
                item_id: Some(s.id.clone()),
                message: format!("email '{}' looks malformed", s.email),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_CATALOG: &str = r#"
[catalog]
id = "networks"
name = "Computer Networks"
description = "Diagnostic questions on networking basics"

[[questions]]
id = 1
question = "What does LAN stand for?"
options = ["Large Area Network", "Local Area Network", "Logical Area Network"]
correct_answer = 1
difficulty = "beginner"

[[questions]]
id = 2
question = "Which layer of the OSI model is responsible for routing?"
options = ["Transport", "Network", "Data Link", "Physical"]
correct_answer = 1
difficulty = "intermediate"
"#;

    const VALID_ROSTER: &str = r#"
[roster]
id = "networks-101"
name = "Computer Networks 101"

[[students]]
id = "1"
name = "Emma Johnson"
email = "emma.j@school.edu"
learning_level = "beginner"
quiz_score = 35
assignment_completion = false
login_frequency = 1
last_active = "3 days ago"

[students.engagement]
time_spent = 15
quiz_attempts = 1
interaction_clicks = 12
lessons_completed = 1

[[students]]
id = "3"
name = "Olivia Brown"
email = "olivia.b@school.edu"
learning_level = "advanced"
quiz_score = 92
assignment_completion = true
login_frequency = 7
"#;

    #[test]
    fn parse_valid_catalog() {
        let catalog = parse_catalog_str(VALID_CATALOG, &PathBuf::from("c.toml")).unwrap();
        assert_eq!(catalog.id, "networks");
        assert_eq!(catalog.questions.len(), 2);
        assert_eq!(catalog.questions[1].difficulty, LearningLevel::Intermediate);
        assert_eq!(catalog.questions[0].correct_answer, 1);
        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn difficulty_defaults_to_beginner() {
        let toml = r#"
[catalog]
id = "minimal"
name = "Minimal"

[[questions]]
id = 1
question = "Pick one"
options = ["a", "b"]
correct_answer = 0
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("c.toml")).unwrap();
        assert_eq!(catalog.questions[0].difficulty, LearningLevel::Beginner);
        assert!(catalog.description.is_empty());
    }

    #[test]
    fn unknown_difficulty_is_an_error() {
        let toml = r#"
[catalog]
id = "bad"
name = "Bad"

[[questions]]
id = 7
question = "Pick one"
options = ["a", "b"]
correct_answer = 0
difficulty = "expert"
"#;
        let err = parse_catalog_str(toml, &PathBuf::from("c.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("question 7"));
    }

    #[test]
    fn validate_catalog_problems() {
        let toml = r#"
[catalog]
id = "broken"
name = "Broken"

[[questions]]
id = 1
question = " "
options = ["only"]
correct_answer = 3

[[questions]]
id = 1
question = "Duplicate"
options = ["a", "b"]
correct_answer = 0
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("c.toml")).unwrap();
        let warnings = validate_catalog(&catalog);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
        assert!(warnings.iter().any(|w| w.message.contains("empty")));
        assert!(warnings.iter().any(|w| w.message.contains("at least 2")));
        assert!(warnings.iter().any(|w| w.message.contains("out of range")));
    }

    #[test]
    fn parse_valid_roster() {
        let roster = parse_roster_str(VALID_ROSTER, &PathBuf::from("r.toml")).unwrap();
        assert_eq!(roster.name, "Computer Networks 101");
        assert_eq!(roster.students.len(), 2);
        let emma = roster.find("1").unwrap();
        assert_eq!(emma.engagement.interaction_clicks(), 12);
        assert!(!emma.assignment_completion);
        let olivia = roster.find("3").unwrap();
        assert_eq!(olivia.engagement, EngagementData::default());
        assert!(olivia.last_active.is_empty());
        assert!(validate_roster(&roster).is_empty());
    }

    #[test]
    fn validate_roster_problems() {
        let toml = r#"
[roster]
id = "r"
name = "R"

[[students]]
id = "1"
name = "A"
email = "not-an-email"
learning_level = "beginner"
quiz_score = 130
login_frequency = 9

[[students]]
id = "1"
name = "B"
learning_level = "advanced"
quiz_score = 90
login_frequency = 5
"#;
        let roster = parse_roster_str(toml, &PathBuf::from("r.toml")).unwrap();
        let warnings = validate_roster(&roster);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
        assert!(warnings.iter().any(|w| w.message.contains("above 100")));
        assert!(warnings.iter().any(|w| w.message.contains("above 7")));
        assert!(warnings.iter().any(|w| w.message.contains("malformed")));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_catalog_str(bad, &PathBuf::from("bad.toml")).is_err());
        assert!(parse_roster_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn load_directory_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.toml"), VALID_CATALOG).unwrap();
        std::fs::write(dir.path().join("bad.toml"), "not toml {").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let catalogs = load_catalog_directory(dir.path()).unwrap();
        assert_eq!(catalogs.len(), 1);
        assert_eq!(catalogs[0].id, "networks");
    }

    #[test]
    fn parse_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(&path, VALID_ROSTER).unwrap();
        let roster = parse_roster(&path).unwrap();
        assert_eq!(roster.id, "networks-101");
        assert!(parse_roster(&dir.path().join("missing.toml")).is_err());
    }
}
