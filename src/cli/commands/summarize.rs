use anyhow::{Context, Result};
use std::io;

pub fn handle() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    logscrub::summary::summarize(stdin.lock(), stdout.lock())
        .context("Failed to summarize workspace document")?;

    Ok(())
}
