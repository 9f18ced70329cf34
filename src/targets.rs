use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::ScrubResult;

/// Files cleaned when no paths are given
pub const DEFAULT_FILES: [&str; 10] = [
    "src/app/(auth)/login/page.tsx",
    "src/app/(dashboard)/department/tasks/page.tsx",
    "src/app/(dashboard)/projects/[projectId]/list/page.tsx",
    "src/app/api/dashboard/route.ts",
    "src/app/api/projects/[projectId]/tasks/route.ts",
    "src/components/common/create-task-button.tsx",
    "src/components/layout/department-toolbar.tsx",
    "src/components/modals/create-task-modal.tsx",
    "src/lib/calculate-progress.ts",
    "src/lib/email.ts",
];

pub const DEFAULT_DISCOVER_ROOT: &str = "src/app/api";
pub const DEFAULT_DISCOVER_EXTENSION: &str = "ts";

/// Where the list of files to process comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSource {
    /// The hand-maintained list from the config
    Configured,
    /// Paths given on the command line
    Explicit(Vec<PathBuf>),
    /// Every file with the configured extension under the discovery root
    Discover,
}

/// Resolve `source` into an ordered list of paths anchored at `base`
pub fn resolve(source: &TargetSource, config: &Config, base: &Path) -> ScrubResult<Vec<PathBuf>> {
    let targets = match source {
        TargetSource::Configured => config
            .data
            .strip
            .files
            .iter()
            .map(|file| anchor(base, Path::new(file)))
            .collect(),
        TargetSource::Explicit(paths) => paths.iter().map(|p| anchor(base, p)).collect(),
        TargetSource::Discover => discover(
            &anchor(base, Path::new(&config.data.strip.discover_root)),
            &config.data.strip.discover_extension,
        )?,
    };

    debug!(count = targets.len(), ?source, "resolved targets");
    Ok(targets)
}

/// Recursively collect files under `root` whose extension is `extension`.
///
/// A missing root yields no files. Entries are sorted by name at every level.
/// Dotfiles and hidden directories below the root are skipped.
pub fn discover(root: &Path, extension: &str) -> ScrubResult<Vec<PathBuf>> {
    if !root.is_dir() {
        warn!(root = %root.display(), "discovery root does not exist");
        return Ok(Vec::new());
    }

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    let mut found = Vec::new();
    for entry in walker {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == extension) {
            found.push(path.to_path_buf());
        }
    }

    Ok(found)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map_or(false, |name| name.starts_with('.'))
}

/// Resolve `path` against `base` unless it is absolute or `base` is the cwd
pub fn anchor(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || base == Path::new(".") {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
