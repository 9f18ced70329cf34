pub mod config;
pub mod error;
pub mod stripper;
pub mod summary;
pub mod targets;

pub use error::{ConfigError, ScrubError, ScrubResult, SummaryError};
pub use stripper::{FileOutcome, RunReport, Strategy, StripOutcome, Stripper};
pub use targets::TargetSource;

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Logscrub {
    config: config::Config,
    stripper: Stripper,
    root: PathBuf,
}

impl Logscrub {
    pub fn new(project_root: impl AsRef<Path>) -> ScrubResult<Self> {
        let root = project_root.as_ref().to_path_buf();
        let config = config::Config::load_or_default(&root)?;
        let stripper = Stripper::from_config(&config)?;

        Ok(Self {
            config,
            stripper,
            root,
        })
    }

    pub fn init(project_root: impl AsRef<Path>) -> ScrubResult<Self> {
        let project_root = project_root.as_ref();
        config::Config::init(project_root)?;

        Self::new(project_root)
    }

    /// Override the configured strategy for this run
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.stripper = self.stripper.with_strategy(strategy);
        self
    }

    pub fn config(&self) -> &config::Config {
        &self.config
    }

    pub fn stripper(&self) -> &Stripper {
        &self.stripper
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn strip(&self, content: &str) -> StripOutcome {
        self.stripper.strip_content(content)
    }

    pub fn strip_file(&self, path: &Path, dry_run: bool) -> ScrubResult<FileOutcome> {
        self.stripper.strip_file(path, dry_run)
    }

    pub fn targets(&self, source: &TargetSource) -> ScrubResult<Vec<PathBuf>> {
        targets::resolve(source, &self.config, &self.root)
    }

    /// A single path as the other commands would open it, relative to the root
    pub fn locate(&self, path: &Path) -> PathBuf {
        targets::anchor(&self.root, path)
    }

    /// Strip every target in order, one file at a time.
    ///
    /// `on_file` sees each outcome as soon as that file is finished. The first
    /// I/O error other than a missing file aborts the run.
    pub fn run<F>(&self, targets: &[PathBuf], dry_run: bool, mut on_file: F) -> ScrubResult<RunReport>
    where
        F: FnMut(&Path, &FileOutcome),
    {
        let mut report = RunReport::default();

        for path in targets {
            let outcome = self.strip_file(path, dry_run)?;
            on_file(path, &outcome);
            report.record(&outcome);
        }

        Ok(report)
    }
}
