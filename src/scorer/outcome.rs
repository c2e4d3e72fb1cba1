use std::fmt;

use crate::diff::TreeDiff;
use crate::error::{ExtractionError, SqlParseError};

/// Which input failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuerySide {
    /// The answer extracted from the model completion.
    Answer,
    /// The reference query supplied by the caller.
    GroundTruth,
}

impl fmt::Display for QuerySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuerySide::Answer => write!(f, "answer"),
            QuerySide::GroundTruth => write!(f, "ground truth"),
        }
    }
}

/// Result of comparing an answer with its ground truth, before it is collapsed to a reward.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreOutcome {
    /// Canonical trees are structurally equal.
    Equivalent,
    /// Canonical trees differ; `diff` is never empty.
    Mismatch {
        /// Edits from the answer tree to the ground-truth tree.
        diff: TreeDiff,
    },
    /// The answer could not be located in the completion.
    ExtractionFailed(ExtractionError),
    /// One of the two inputs is not parseable SQL.
    ParseFailed {
        /// Input that failed.
        side: QuerySide,
        /// Parser failure.
        error: SqlParseError,
    },
}

impl ScoreOutcome {
    /// True only for [`ScoreOutcome::Equivalent`].
    pub fn is_equivalent(&self) -> bool {
        matches!(self, ScoreOutcome::Equivalent)
    }

    /// True for extraction and parse failures.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ScoreOutcome::ExtractionFailed(_) | ScoreOutcome::ParseFailed { .. }
        )
    }

    /// Short label used in diagnostics and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            ScoreOutcome::Equivalent => "no diff",
            ScoreOutcome::Mismatch { .. } => "diff",
            ScoreOutcome::ExtractionFailed(_) => "extraction error",
            ScoreOutcome::ParseFailed { .. } => "parse error",
        }
    }

    /// Collapse the outcome to one of the two configured rewards.
    pub fn reward(&self, score: f64, format_score: f64) -> f64 {
        if self.is_equivalent() {
            score
        } else {
            format_score
        }
    }

    /// Edits of a mismatch, if any.
    pub fn diff(&self) -> Option<&TreeDiff> {
        match self {
            ScoreOutcome::Mismatch { diff } => Some(diff),
            _ => None,
        }
    }

    /// Human-readable failure description for extraction and parse failures.
    pub fn error_message(&self) -> Option<String> {
        match self {
            ScoreOutcome::ExtractionFailed(error) => Some(error.to_string()),
            ScoreOutcome::ParseFailed { side, error } => {
                Some(format!("failed to parse {side}: {error}"))
            }
            ScoreOutcome::Equivalent | ScoreOutcome::Mismatch { .. } => None,
        }
    }
}

/// Outcome of one scoring call together with the extracted answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Answer extracted from the completion; `None` when extraction failed.
    pub answer: Option<String>,
    /// Comparison outcome.
    pub outcome: ScoreOutcome,
}

impl Evaluation {
    /// Collapse to a reward; see [`ScoreOutcome::reward`].
    pub fn reward(&self, score: f64, format_score: f64) -> f64 {
        self.outcome.reward(score, format_score)
    }
}
