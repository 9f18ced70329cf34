use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

use super::open;
use crate::cli::Selection;

pub fn handle(root: &Path, selection: &Selection) -> Result<()> {
    let logscrub = open(root, selection.strategy)?;
    let target = logscrub.stripper().markers().target().to_string();

    println!("{}", format!("Checking for {} statements...", target).bright_blue());

    let targets = logscrub
        .targets(&selection.source())
        .context("Failed to resolve target files")?;

    let mut remaining = 0;
    for file_path in &targets {
        let content = match std::fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", file_path.display()))
            }
        };

        let outcome = logscrub.strip(&content);
        let lines: Vec<&str> = content.lines().collect();
        for span in &outcome.spans {
            remaining += 1;
            let first = lines.get(span.start - 1).map(|l| l.trim()).unwrap_or_default();
            let range = if span.line_count() > 1 {
                format!("{}-{}", span.start, span.end)
            } else {
                span.start.to_string()
            };
            println!(
                "{} {}:{} - {}",
                "⚠".bright_yellow(),
                file_path.display(),
                range,
                first.bright_red()
            );
        }
    }

    if remaining == 0 {
        println!("{} No {} statements found!", "✓".bright_green(), target);
        return Ok(());
    }

    println!(
        "\n{}",
        "Tip: Run `logscrub strip` to remove them".bright_cyan()
    );
    bail!("{} {} statement(s) remaining", remaining, target)
}
