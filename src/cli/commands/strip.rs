use anyhow::{Context, Result};
use colored::Colorize;
use logscrub::FileOutcome;
use std::path::Path;

use super::open;
use crate::cli::Selection;

pub fn handle(root: &Path, selection: &Selection, dry_run: bool) -> Result<()> {
    let logscrub = open(root, selection.strategy)?;
    let target = logscrub.stripper().markers().target().to_string();
    let targets = logscrub
        .targets(&selection.source())
        .context("Failed to resolve target files")?;

    let verb = if dry_run { "Would remove" } else { "Removed" };
    println!(
        "{}\n",
        format!("Removing {} statements ({} rule)...", target, logscrub.stripper().strategy())
            .bright_blue()
    );

    let report = logscrub.run(&targets, dry_run, |path, outcome| {
        println!("{}", path.display());
        match outcome {
            FileOutcome::Modified { removed, .. } => println!(
                "  {} - {} {} {} line(s)",
                "OK".bright_green(),
                verb,
                removed,
                target
            ),
            FileOutcome::Unchanged => println!(
                "  {} - No {} found or already clean",
                "SKIP".bright_black(),
                target
            ),
            FileOutcome::Missing => {
                println!("  {} - File not found", "MISSING".bright_yellow())
            }
        }
    })?;

    println!("\n{}", "=".repeat(60));
    println!("{}", "Summary:".bold());
    println!("   Files processed: {}", report.files_seen);
    println!("   Files modified: {}", report.files_modified);
    if report.files_missing > 0 {
        println!("   Files missing: {}", report.files_missing);
    }
    println!("   Total {} lines removed: {}", target, report.lines_removed);
    println!("{}", "=".repeat(60));

    if dry_run && report.files_modified > 0 {
        println!("\n{}", "Dry run: no files were written".bright_cyan());
    }

    Ok(())
}
