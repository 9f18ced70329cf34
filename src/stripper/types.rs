use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, ScrubError};

/// Closing rule used once a call spans several lines.
///
/// The variants come from tools that disagreed on when a multi-line call
/// ends. They are kept apart; a run uses exactly one of them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Ends when the running paren depth is non-positive and the line ends in `);` or `)`
    #[default]
    Paren,
    /// Ends when the running brace depth is non-positive and the line ends in `);`
    Brace,
    /// Only drops lines that start with the call or call it after two spaces;
    /// never spans lines
    Line,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Paren => "paren",
            Strategy::Brace => "brace",
            Strategy::Line => "line",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ScrubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paren" => Ok(Strategy::Paren),
            "brace" => Ok(Strategy::Brace),
            "line" => Ok(Strategy::Line),
            other => Err(ConfigError::InvalidValue {
                field: "strip.strategy".to_string(),
                value: other.to_string(),
            }
            .into()),
        }
    }
}

/// Decision for a single physical line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Drop,
}

/// A run of consecutive removed lines, 1-based and inclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedSpan {
    pub start: usize,
    pub end: usize,
    /// The file ended before the call's closing line was seen
    pub unterminated: bool,
}

impl RemovedSpan {
    pub fn new(line: usize) -> Self {
        Self {
            start: line,
            end: line,
            unterminated: false,
        }
    }

    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Result of stripping one buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    pub content: String,
    pub removed: usize,
    pub spans: Vec<RemovedSpan>,
}

impl StripOutcome {
    pub fn unchanged(content: &str) -> Self {
        Self {
            content: content.to_string(),
            removed: 0,
            spans: Vec::new(),
        }
    }

    pub fn changed(&self) -> bool {
        self.removed > 0
    }
}
