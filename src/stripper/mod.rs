pub mod file;
pub mod markers;
pub mod scan;
pub mod types;

use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::error::ScrubResult;
pub use file::{FileOutcome, RunReport};
pub use markers::{LineKind, Markers};
pub use scan::{Balance, SuppressionState};
pub use types::{RemovedSpan, Strategy, StripOutcome, Verdict};

/// Line-oriented remover for calls to the target marker
#[derive(Debug, Clone, Default)]
pub struct Stripper {
    markers: Markers,
    strategy: Strategy,
}

impl Stripper {
    pub fn new(markers: Markers, strategy: Strategy) -> Self {
        Self { markers, strategy }
    }

    pub fn from_config(config: &Config) -> ScrubResult<Self> {
        let markers = Markers::new(&config.data.markers.target, &config.data.markers.protected)?;
        Ok(Self::new(markers, config.data.strip.strategy))
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Strip target statements from an in-memory buffer.
    ///
    /// Kept lines are copied with their original terminators, so a buffer with
    /// nothing to remove comes back byte-identical.
    pub fn strip_content(&self, content: &str) -> StripOutcome {
        if !self.markers.appears_in(content) {
            return StripOutcome::unchanged(content);
        }

        let mut state = SuppressionState::default();
        let mut kept = String::with_capacity(content.len());
        let mut spans: Vec<RemovedSpan> = Vec::new();
        let mut removed = 0;

        for (idx, line) in content.split_inclusive('\n').enumerate() {
            let line_num = idx + 1;
            let (next, verdict) = state.step(line, &self.markers, self.strategy);

            match verdict {
                Verdict::Keep => kept.push_str(line),
                Verdict::Drop => {
                    removed += 1;
                    match spans.last_mut() {
                        // Continuation of a multi-line call
                        Some(span) if state.active => span.end = line_num,
                        _ => spans.push(RemovedSpan::new(line_num)),
                    }
                }
            }

            if state.active && !next.active {
                debug!(line = line_num, "multi-line call closed");
            }
            state = next;
        }

        if state.active {
            if let Some(span) = spans.last_mut() {
                span.unterminated = true;
                debug!(start = span.start, "call never closed, suppressed to end of input");
            }
        }

        StripOutcome {
            content: kept,
            removed,
            spans,
        }
    }

    pub fn strip_file(&self, path: &Path, dry_run: bool) -> ScrubResult<FileOutcome> {
        file::strip_file(self, path, dry_run)
    }
}
