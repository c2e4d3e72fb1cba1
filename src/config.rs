use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::extractor::{ExtractionMode, ExtractionStrategy};
use crate::parser::dialect::SqlDialect;

/// Reward parameters and policy selection for SQL equivalence scoring.
///
/// Every field is optional in JSON and falls back to [`RewardConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RewardConfig {
    /// Extraction mode; validated but currently without effect.
    pub mode: ExtractionMode,
    /// How the answer is located in the completion.
    pub strategy: ExtractionStrategy,
    /// Dialect for both the answer and the ground truth.
    pub dialect: SqlDialect,
    /// Reward for an equivalent answer.
    pub score: f64,
    /// Reward for everything else.
    pub format_score: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            mode: ExtractionMode::Strict,
            strategy: ExtractionStrategy::LastLine,
            dialect: SqlDialect::Generic,
            score: 1.0,
            format_score: 0.0,
        }
    }
}

impl RewardConfig {
    /// Load a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = RewardConfig::from_json("{}").unwrap();
        assert_eq!(config, RewardConfig::default());
        assert_eq!(config.score, 1.0);
        assert_eq!(config.format_score, 0.0);
    }

    #[test]
    fn json_overrides_selected_fields() {
        let config = RewardConfig::from_json(
            r#"{"strategy": "prompt_delimited", "dialect": "sqlite", "format_score": 0.1}"#,
        )
        .unwrap();
        assert_eq!(config.strategy, ExtractionStrategy::PromptDelimited);
        assert_eq!(config.dialect, SqlDialect::Sqlite);
        assert_eq!(config.format_score, 0.1);
        assert_eq!(config.mode, ExtractionMode::Strict);
    }

    #[test]
    fn invalid_values_are_configuration_errors() {
        for json in [
            r#"{"mode": "loose"}"#,
            r#"{"dialect": "cobol"}"#,
            r#"{"scroe": 1.0}"#,
            "not json",
        ] {
            assert!(
                matches!(RewardConfig::from_json(json), Err(ConfigError::InvalidJson(_))),
                "expected InvalidJson for {json}"
            );
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RewardConfig::from_path(Path::new("/nonexistent/sqlreward.json"))
            .expect_err("missing file should fail");
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/sqlreward.json"));
    }
}
