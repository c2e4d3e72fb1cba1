/// Extraction, parsing, canonicalization and diffing of one answer/ground-truth pair.
pub mod equivalence;
/// Tagged scoring outcome and its collapse into a reward.
pub mod outcome;
/// The reward-function trait and the SQL equivalence implementation.
pub mod reward;

use serde::{Deserialize, Serialize};

use crate::config::RewardConfig;
use crate::error::ConfigError;
use crate::extractor::{ExtractionMode, ExtractionStrategy};

pub use equivalence::{compare_sql, compute_score, evaluate};
pub use outcome::{Evaluation, QuerySide, ScoreOutcome};

/// Caller-supplied metadata accompanying a completion.
///
/// Only `prompt` is interpreted; every other key is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraInfo {
    /// Prompt text that precedes the generated answer in the completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Remaining metadata, ignored by scoring.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl ExtraInfo {
    /// Metadata carrying only a prompt.
    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            other: serde_json::Map::new(),
        }
    }

    /// The prompt, if one was supplied.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }
}

/// One scoring request, as read from a JSON-lines batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    /// Raw model completion.
    #[serde(alias = "solution")]
    pub solution_str: String,
    /// Reference SQL.
    pub ground_truth: String,
    /// Optional metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<ExtraInfo>,
}

/// Score with a textual extraction mode, as passed by loosely typed callers.
///
/// An unknown `method` is a configuration error and is returned instead of
/// a reward; every data error still collapses into `format_score`.
pub fn compute_score_with_method(
    solution_str: &str,
    ground_truth: &str,
    strategy: ExtractionStrategy,
    method: &str,
    format_score: f64,
    score: f64,
    extra_info: Option<&ExtraInfo>,
) -> Result<f64, ConfigError> {
    let mode: ExtractionMode = method.parse()?;
    let config = RewardConfig {
        mode,
        strategy,
        format_score,
        score,
        ..RewardConfig::default()
    };
    Ok(compute_score(solution_str, ground_truth, &config, extra_info))
}
