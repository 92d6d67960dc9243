//! The `pathwise validate` command.

use std::path::PathBuf;

use anyhow::Result;

use pathwise_core::parser::{self, ValidationWarning};

pub fn execute(catalog_path: Option<PathBuf>, roster_path: Option<PathBuf>) -> Result<()> {
    if catalog_path.is_none() && roster_path.is_none() {
        anyhow::bail!("nothing to validate; pass --catalog and/or --roster");
    }

    let mut total_warnings = 0;

    if let Some(path) = catalog_path {
        let catalogs = if path.is_dir() {
            parser::load_catalog_directory(&path)?
        } else {
            vec![parser::parse_catalog(&path)?]
        };

        for catalog in &catalogs {
            println!(
                "Catalog: {} ({} questions)",
                catalog.name,
                catalog.questions.len()
            );
            let warnings = parser::validate_catalog(catalog);
            print_warnings(&warnings);
            total_warnings += warnings.len();
        }
    }

    if let Some(path) = roster_path {
        let roster = parser::parse_roster(&path)?;
        println!("Roster: {} ({} students)", roster.name, roster.students.len());
        let warnings = parser::validate_roster(&roster);
        print_warnings(&warnings);
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All files valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

fn print_warnings(warnings: &[ValidationWarning]) {
    for w in warnings {
        let prefix = w
            .item_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }
}
