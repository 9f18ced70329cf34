use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use super::Stripper;
use crate::error::{ErrorContext, ScrubResult};

/// What happened to one target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The path did not exist; nothing was written
    Missing,
    /// No target statement found
    Unchanged,
    /// Lines were removed; `written` is false on a dry run
    Modified { removed: usize, written: bool },
}

impl FileOutcome {
    pub fn removed(&self) -> usize {
        match self {
            FileOutcome::Modified { removed, .. } => *removed,
            _ => 0,
        }
    }
}

/// Totals over a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub files_seen: usize,
    pub files_modified: usize,
    pub files_missing: usize,
    pub lines_removed: usize,
}

impl RunReport {
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.files_seen += 1;
        match outcome {
            FileOutcome::Missing => self.files_missing += 1,
            FileOutcome::Unchanged => {}
            FileOutcome::Modified { removed, .. } => {
                self.files_modified += 1;
                self.lines_removed += removed;
            }
        }
    }
}

/// Read `path`, strip it, and write it back in place if anything was removed.
///
/// The write is a plain truncate-and-write with no backup. A missing file is
/// reported as [`FileOutcome::Missing`]; every other I/O error is returned.
pub fn strip_file(stripper: &Stripper, path: &Path, dry_run: bool) -> ScrubResult<FileOutcome> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "target file not found, skipping");
            return Ok(FileOutcome::Missing);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let outcome = stripper.strip_content(&content);
    if !outcome.changed() {
        debug!(path = %path.display(), "no target statements");
        return Ok(FileOutcome::Unchanged);
    }

    if !dry_run {
        fs::write(path, &outcome.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    info!(
        path = %path.display(),
        removed = outcome.removed,
        spans = outcome.spans.len(),
        dry_run,
        "stripped target statements"
    );

    Ok(FileOutcome::Modified {
        removed: outcome.removed,
        written: !dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_skipped() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("gone.ts");

        let outcome = strip_file(&Stripper::default(), &path, false)?;
        assert_eq!(outcome, FileOutcome::Missing);
        assert!(!path.exists());

        Ok(())
    }

    #[test]
    fn test_unchanged_file_is_not_rewritten() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("clean.ts");
        fs::write(&path, "const a = 1;\nconsole.warn('w');\n")?;
        let before = fs::metadata(&path)?.modified()?;

        let outcome = strip_file(&Stripper::default(), &path, false)?;
        assert_eq!(outcome, FileOutcome::Unchanged);
        assert_eq!(fs::metadata(&path)?.modified()?, before);

        Ok(())
    }

    #[test]
    fn test_dry_run_leaves_file_alone() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("route.ts");
        let original = "console.log('x');\nreturn res;\n";
        fs::write(&path, original)?;

        let outcome = strip_file(&Stripper::default(), &path, true)?;
        assert_eq!(outcome, FileOutcome::Modified { removed: 1, written: false });
        assert_eq!(fs::read_to_string(&path)?, original);

        Ok(())
    }

    #[test]
    fn test_report_totals() {
        let mut report = RunReport::default();
        report.record(&FileOutcome::Missing);
        report.record(&FileOutcome::Unchanged);
        report.record(&FileOutcome::Modified { removed: 3, written: true });
        report.record(&FileOutcome::Modified { removed: 2, written: true });

        assert_eq!(
            report,
            RunReport {
                files_seen: 4,
                files_modified: 2,
                files_missing: 1,
                lines_removed: 5,
            }
        );
    }
}
