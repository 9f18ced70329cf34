use anyhow::{Context, Result};
use colored::Colorize;
use logscrub::Strategy;
use std::path::Path;

use super::open;

pub fn handle(root: &Path, file: &Path, diff: bool, strategy: Option<Strategy>) -> Result<()> {
    let logscrub = open(root, strategy)?;
    let file = logscrub.locate(file);

    let content = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    println!("{}", "Logscrub Preview".bright_blue().bold());
    println!("{}", "================".bright_blue());
    println!("File: {}\n", file.display());

    let outcome = logscrub.strip(&content);

    if !outcome.changed() {
        println!("{} Nothing to remove", "✓".bright_green());
        return Ok(());
    }

    if diff {
        let lines: Vec<&str> = content.lines().collect();
        println!("{}", "REMOVED LINES:".bright_red().bold());
        println!("{}", "--------------".bright_red());
        for span in &outcome.spans {
            for line_num in span.start..=span.end {
                if let Some(line) = lines.get(line_num - 1) {
                    println!("{} {:>5} {}", "-".bright_red(), line_num, line.bright_red());
                }
            }
            if span.unterminated {
                println!("  {} call never closed before end of file", "⚠".bright_yellow());
            }
        }
        println!();
    }

    println!("{}", "AFTER STRIPPING:".bright_yellow().bold());
    println!("{}", "----------------".bright_yellow());
    print!("{}", outcome.content);
    if !outcome.content.ends_with('\n') {
        println!();
    }
    println!();
    println!(
        "{} line(s) in {} span(s) would be removed",
        outcome.removed,
        outcome.spans.len()
    );
    if !diff {
        println!("Use {} to list the removed lines", "--diff".bright_cyan());
    }

    Ok(())
}
