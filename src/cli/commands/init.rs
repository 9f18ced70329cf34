use anyhow::{Context, Result};
use colored::Colorize;
use logscrub::config::Config;
use logscrub::Logscrub;
use std::path::Path;

pub fn handle(root: &Path) -> Result<()> {
    println!("{}", "Initializing logscrub in your project...".bright_blue().bold());

    let existed = Config::path_for(root).exists();
    let logscrub = Logscrub::init(root)
        .context("Failed to initialize logscrub in the specified directory")?;
    let config = logscrub.config();

    if existed {
        println!("  {} Kept existing {}", "✓".bright_green(), config.path.display());
    } else {
        println!("  {} Created {}", "✓".bright_green(), config.path.display());
    }

    println!("\n{}", "Current settings:".bright_blue().bold());
    println!("  • Target marker: {}", config.data.markers.target.bright_yellow());
    println!("  • Protected: {}", config.data.markers.protected.join(", "));
    println!("  • Closing rule: {}", config.data.strip.strategy);
    println!("  • Listed files: {}", config.data.strip.files.len());
    println!(
        "  • Discovery: {}/**/*.{}",
        config.data.strip.discover_root, config.data.strip.discover_extension
    );

    println!("\n{}", "Quick start:".bright_blue().bold());
    println!("  1. Preview a file:  {}", "logscrub preview src/lib/email.ts --diff".bright_yellow());
    println!("  2. Strip for real:  {}", "logscrub strip".bright_yellow());

    Ok(())
}
