use aho_corasick::AhoCorasick;

use crate::error::{ScrubError, ScrubResult};

pub const DEFAULT_TARGET: &str = "console.log";
pub const DEFAULT_PROTECTED: [&str; 2] = ["console.error", "console.warn"];

/// How a line relates to the configured markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// No target marker on the line
    Plain,
    /// Target marker without any protected marker
    Target,
    /// Target marker sharing the line with a protected marker
    Protected,
}

/// Target and protected call signatures, matched in a single pass.
///
/// Pattern 0 of the automaton is always the target; every other pattern is
/// protected.
#[derive(Debug, Clone)]
pub struct Markers {
    target: String,
    call_prefix: String,
    indented_call: String,
    protected: Vec<String>,
    matcher: AhoCorasick,
}

impl Markers {
    pub fn new<S: AsRef<str>>(target: &str, protected: &[S]) -> ScrubResult<Self> {
        if target.is_empty() {
            return Err(ScrubError::InvalidInput(
                "target marker must not be empty".to_string(),
            ));
        }

        let protected: Vec<String> = protected.iter().map(|p| p.as_ref().to_string()).collect();
        if protected.iter().any(String::is_empty) {
            return Err(ScrubError::InvalidInput(
                "protected markers must not be empty".to_string(),
            ));
        }

        let patterns: Vec<&str> = std::iter::once(target)
            .chain(protected.iter().map(String::as_str))
            .collect();
        let matcher = AhoCorasick::new(patterns)?;

        Ok(Self {
            target: target.to_string(),
            call_prefix: format!("{}(", target),
            indented_call: format!("  {}(", target),
            protected,
            matcher,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn protected(&self) -> &[String] {
        &self.protected
    }

    /// Quick rejection for buffers that never mention the target
    pub fn appears_in(&self, content: &str) -> bool {
        content.contains(&self.target)
    }

    /// True when the trimmed line starts with a call to the target
    pub fn opens_call(&self, trimmed: &str) -> bool {
        trimmed.starts_with(&self.call_prefix)
    }

    /// True when the line calls the target anywhere, not just mentions it
    pub fn contains_call(&self, line: &str) -> bool {
        line.contains(&self.call_prefix)
    }

    /// True when the call starts the line or follows at least two spaces
    pub fn statement_call(&self, line: &str) -> bool {
        self.opens_call(line.trim()) || line.contains(&self.indented_call)
    }

    /// A whole call on one line: `target(args)` with an optional `;` and no
    /// `)` inside the arguments.
    pub fn single_line_call(&self, trimmed: &str) -> bool {
        let Some(rest) = trimmed.strip_prefix(&self.call_prefix) else {
            return false;
        };
        let rest = rest.strip_suffix(';').unwrap_or(rest);
        match rest.strip_suffix(')') {
            Some(args) => !args.contains(')'),
            None => false,
        }
    }

    pub fn classify(&self, line: &str) -> LineKind {
        let mut has_target = false;
        let mut has_protected = false;

        // Overlapping search so a protected marker that extends the target
        // (e.g. `console.log.bind`) is still seen.
        for found in self.matcher.find_overlapping_iter(line) {
            if found.pattern().as_usize() == 0 {
                has_target = true;
            } else {
                has_protected = true;
            }
            if has_target && has_protected {
                break;
            }
        }

        match (has_target, has_protected) {
            (false, _) => LineKind::Plain,
            (true, false) => LineKind::Target,
            (true, true) => LineKind::Protected,
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET, &DEFAULT_PROTECTED).expect("Failed to compile default markers")
    }
}
