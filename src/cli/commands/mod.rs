pub mod check;
pub mod config;
pub mod init;
pub mod preview;
pub mod strip;
pub mod summarize;

use colored::Colorize;
use logscrub::{Logscrub, ScrubError, Strategy};
use std::path::Path;

/// Display an error message with proper formatting
pub fn display_error(err: &anyhow::Error) {
    eprintln!("\n{} {}", "✗".bright_red().bold(), "Operation failed".bright_red().bold());
    eprintln!("  {} {}", "├".bright_black(), err);

    // Display error chain
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "├".bright_black(), cause);
    }

    let hint = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ScrubError>())
        .and_then(ScrubError::hint);

    if let Some(hint) = hint {
        eprintln!("  {} {}", "└".bright_cyan(), hint);
    } else if err.to_string().contains("Permission denied") {
        eprintln!("  {} Try running with elevated permissions", "└".bright_cyan());
    } else {
        eprintln!(
            "  {} Run with {} for more details",
            "└".bright_black(),
            "--verbose".bright_cyan()
        );
    }
}

/// Open the project at `root`, applying a per-run strategy override
pub fn open(root: &Path, strategy: Option<Strategy>) -> anyhow::Result<Logscrub> {
    use anyhow::Context;

    let logscrub = Logscrub::new(root).context("Failed to load logscrub configuration")?;
    Ok(match strategy {
        Some(strategy) => logscrub.with_strategy(strategy),
        None => logscrub,
    })
}
