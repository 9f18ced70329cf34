mod cli;

use anyhow::Result;
use clap::Parser;
use cli::commands;

fn main() {
    let cli = cli::Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run_command(cli) {
        commands::display_error(&err);
        std::process::exit(1);
    }
}

fn run_command(cli: cli::Cli) -> Result<()> {
    use cli::Commands;

    let root = cli.root.as_path();
    match &cli.command {
        Commands::Strip { selection, dry_run } => commands::strip::handle(root, selection, *dry_run),
        Commands::Preview { file, diff, strategy } => {
            commands::preview::handle(root, file, *diff, *strategy)
        }
        Commands::Check { selection } => commands::check::handle(root, selection),
        Commands::Summarize => commands::summarize::handle(),
        Commands::Init => commands::init::handle(root),
        Commands::Config { action } => commands::config::handle(root, action),
    }
}
