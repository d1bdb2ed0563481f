//! Non-TUI utility commands: `check` and `export`.

use anyhow::Result;
use owo_colors::OwoColorize;

use folio_common::catalog;

/// Validate the content catalog and print a per-table report.
///
/// Returns the process exit code.
pub fn check() -> i32 {
    println!("{}", "retrofolio catalog check".bold());
    println!();

    let tables = [
        ("screens", catalog::SCREENS.len()),
        ("experiences", catalog::EXPERIENCES.len()),
        ("skill categories", catalog::SKILL_CATEGORIES.len()),
        ("projects", catalog::PROJECTS.len()),
        ("education", catalog::EDUCATION.len()),
        ("certifications", catalog::CERTIFICATIONS.len()),
    ];
    for (name, count) in tables {
        println!("  {:<18} {} entries", name, count);
    }
    println!();

    match catalog::validate() {
        Ok(()) => {
            println!("{} catalog is valid", "✓".green().bold());
            crate::errors::EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            crate::errors::EXIT_INVALID_CATALOG
        }
    }
}

/// Dump the whole catalog as pretty JSON on stdout.
pub fn export() -> Result<()> {
    let json = serde_json::to_string_pretty(&catalog::catalog())?;
    println!("{}", json);
    Ok(())
}
