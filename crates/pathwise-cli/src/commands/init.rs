//! The `pathwise init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("pathwise.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("data").context("failed to create data directory")?;
    write_if_missing(Path::new("data/networks.toml"), SAMPLE_CATALOG)?;
    write_if_missing(Path::new("data/roster.toml"), SAMPLE_ROSTER)?;

    println!("\nNext steps:");
    println!("  1. Run: pathwise validate --catalog data/networks.toml --roster data/roster.toml");
    println!("  2. Run: pathwise quiz");
    println!("  3. Run: pathwise roster");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# pathwise configuration

# Questions drawn per diagnostic quiz
quiz_size = 10

# Fixed shuffle seed (omit for a fresh quiz every run; PATHWISE_SEED overrides)
# seed = 42

# Paths may reference environment variables, e.g. "${HOME}/pathwise/networks.toml"
catalog = "data/networks.toml"
roster = "data/roster.toml"
"#;

const SAMPLE_CATALOG: &str = include_str!("../../../../data/networks.toml");

const SAMPLE_ROSTER: &str = include_str!("../../../../data/roster.toml");
