use anyhow::{Context, Result};
use colored::Colorize;
use logscrub::config::Config;
use std::path::Path;

use crate::cli::ConfigAction;

pub fn handle(root: &Path, action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Set { key, value } => {
            println!(
                "{} Setting {} = {}",
                "→".bright_green(),
                key.bright_cyan(),
                value.bright_yellow()
            );

            let mut config = Config::load(root).context("Run `logscrub init` first")?;
            config.set(key, value)?;

            println!("{} Configuration updated", "✓".bright_green());
        }

        ConfigAction::Get { key } => {
            let config = Config::load_or_default(root)?;
            println!("{}", config.get(key)?);
        }

        ConfigAction::List => {
            let config = Config::load_or_default(root)?;
            if !config.path.exists() {
                println!("{}", "(defaults, no config file)".bright_black());
            }
            for (key, value) in config.list() {
                println!("{} = {}", key.bright_cyan(), value);
            }
        }
    }

    Ok(())
}
