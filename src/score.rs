//! Code-quality scoring against a fixed marker checklist.
//!
//! The checklist is a static, ordered table of (label, check) rows. Each
//! check tests for the textual presence of one marker; there is no parsing.
//! The score is purely cosmetic: it counts how many markers the generated
//! text happens to contain.

use regex::Regex;
use serde::Serialize;

/// One way of testing for a marker's presence.
#[derive(Clone, Copy)]
enum Check {
    /// Plain substring containment.
    Substring(&'static str),
    /// Regex match (compiled once per checklist instance).
    Pattern(&'static str),
}

/// The fixed checklist rows, in report order.
const ROWS: [(&str, Check); 5] = [
    ("imports", Check::Substring("use scrypto::prelude")),
    ("blueprint", Check::Substring("#[blueprint]")),
    ("struct", Check::Pattern(r"(?m)^\s*(?:pub\s+)?struct\s+\w+")),
    ("impl", Check::Pattern(r"(?m)^\s*impl\s+\w+")),
    ("instantiate", Check::Substring("instantiate")),
];

/// Number of rows in the fixed checklist.
pub const MAX_CHECKS: usize = ROWS.len();

/// Outcome of one checklist row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// The row's label.
    pub label: &'static str,
    /// Whether the marker was present.
    pub satisfied: bool,
}

/// The result of scoring one piece of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    /// Number of satisfied rows.
    pub count: usize,
    /// Total number of rows.
    pub max: usize,
    /// Per-row outcomes, preserving checklist order.
    pub breakdown: Vec<CheckResult>,
}

impl ScoreReport {
    /// Whether every row was satisfied.
    pub fn is_full(&self) -> bool {
        self.count == self.max
    }
}

impl std::fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.count, self.max)
    }
}

/// The compiled checklist.
///
/// Compiles the regex rows once; create one per session (or use [`score`]
/// for one-off evaluation).
pub struct Checklist {
    rows: Vec<(&'static str, CompiledCheck)>,
}

enum CompiledCheck {
    Substring(&'static str),
    Pattern(Regex),
}

impl Checklist {
    /// Build the standard checklist.
    pub fn standard() -> Self {
        let mut rows = Vec::with_capacity(ROWS.len());
        for &(label, check) in &ROWS {
            let compiled = match check {
                Check::Substring(needle) => CompiledCheck::Substring(needle),
                // The table is static; a pattern that fails to compile is a
                // programmer error caught by the tests below.
                Check::Pattern(pattern) => {
                    CompiledCheck::Pattern(Regex::new(pattern).expect("invalid checklist pattern"))
                }
            };
            rows.push((label, compiled));
        }

        Self { rows }
    }

    /// Evaluate every row against `source`.
    ///
    /// Deterministic and pure: identical input always yields an identical
    /// report. Empty input satisfies nothing.
    pub fn score(&self, source: &str) -> ScoreReport {
        let breakdown: Vec<CheckResult> = self
            .rows
            .iter()
            .map(|(label, check)| {
                let satisfied = match check {
                    CompiledCheck::Substring(needle) => source.contains(*needle),
                    CompiledCheck::Pattern(regex) => regex.is_match(source),
                };
                CheckResult {
                    label: *label,
                    satisfied,
                }
            })
            .collect();

        let count = breakdown.iter().filter(|r| r.satisfied).count();

        ScoreReport {
            count,
            max: self.rows.len(),
            breakdown,
        }
    }
}

/// Score `source` against the standard checklist.
pub fn score(source: &str) -> ScoreReport {
    Checklist::standard().score(source)
}
