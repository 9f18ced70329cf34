use super::markers::{LineKind, Markers};
use super::types::{Strategy, Verdict};

/// Open-minus-close counts for `{}` and `()` on one line.
///
/// Characters inside string literals and comments are counted too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Balance {
    pub braces: i64,
    pub parens: i64,
}

impl Balance {
    pub fn of(line: &str) -> Self {
        line.chars().fold(Self::default(), |mut balance, c| {
            match c {
                '{' => balance.braces += 1,
                '}' => balance.braces -= 1,
                '(' => balance.parens += 1,
                ')' => balance.parens -= 1,
                _ => {}
            }
            balance
        })
    }
}

/// Scan state carried from one line to the next.
///
/// `active` is set only between the line that opens an unterminated call and
/// the line that closes it; the counters are meaningful only while active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuppressionState {
    pub active: bool,
    pub braces: i64,
    pub parens: i64,
}

impl SuppressionState {
    fn opened_by(line: &str) -> Self {
        let balance = Balance::of(line);
        Self {
            active: true,
            braces: balance.braces,
            parens: balance.parens,
        }
    }

    /// Decide the fate of `line` and return the state for the next one.
    pub fn step(self, line: &str, markers: &Markers, strategy: Strategy) -> (Self, Verdict) {
        let trimmed = line.trim();

        if self.active {
            let balance = Balance::of(line);
            let braces = self.braces + balance.braces;
            let parens = self.parens + balance.parens;

            let closed = match strategy {
                Strategy::Paren => parens <= 0 && (trimmed.ends_with(");") || trimmed.ends_with(')')),
                Strategy::Brace => braces <= 0 && trimmed.ends_with(");"),
                Strategy::Line => true,
            };

            let next = if closed {
                Self::default()
            } else {
                Self { active: true, braces, parens }
            };
            return (next, Verdict::Drop);
        }

        match markers.classify(line) {
            LineKind::Plain | LineKind::Protected => (self, Verdict::Keep),
            LineKind::Target => match strategy {
                Strategy::Paren => {
                    if trimmed.ends_with(");") || markers.single_line_call(trimmed) {
                        (self, Verdict::Drop)
                    } else if markers.contains_call(line) {
                        (Self::opened_by(line), Verdict::Drop)
                    } else {
                        // Mentions the target without calling it
                        (self, Verdict::Keep)
                    }
                }
                Strategy::Brace if trimmed.ends_with(");") => (self, Verdict::Drop),
                Strategy::Brace => (Self::opened_by(line), Verdict::Drop),
                Strategy::Line if markers.statement_call(line) => (self, Verdict::Drop),
                Strategy::Line => (self, Verdict::Keep),
            },
        }
    }
}
