use serde::Serialize;

use crate::diff::Edit;
use crate::scorer::Evaluation;

/// Machine-readable result of one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Reward returned to the caller.
    pub score: f64,
    /// Outcome label (`no diff`, `diff`, `extraction error`, `parse error`).
    pub outcome: &'static str,
    /// Extracted answer, when extraction succeeded.
    pub answer: Option<String>,
    /// Failure description for extraction and parse errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Edits for a mismatch; empty otherwise.
    pub edits: Vec<Edit>,
}

impl ScoreReport {
    /// Build a report from an evaluation and the reward it collapsed to.
    pub fn new(evaluation: &Evaluation, score: f64) -> Self {
        Self {
            score,
            outcome: evaluation.outcome.kind(),
            answer: evaluation.answer.clone(),
            error: evaluation.outcome.error_message(),
            edits: evaluation
                .outcome
                .diff()
                .map(|diff| diff.edits().to_vec())
                .unwrap_or_default(),
        }
    }

    /// One-line human summary, e.g. `diff (2 edits), score is 0`.
    pub fn summary(&self) -> String {
        match (self.edits.len(), &self.error) {
            (_, Some(error)) => format!("{}, score is {}: {error}", self.outcome, self.score),
            (0, None) => format!("{}, score is {}", self.outcome, self.score),
            (1, None) => format!("{} (1 edit), score is {}", self.outcome, self.score),
            (n, None) => format!("{} ({n} edits), score is {}", self.outcome, self.score),
        }
    }
}
