use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;
use crate::parser::names::normalize_keyword;

/// Extraction mode requested by the caller.
///
/// Only validated: neither strategy currently behaves differently between
/// the two modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Default mode.
    #[default]
    Strict,
    /// Lenient mode.
    Flexible,
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionMode::Strict => write!(f, "strict"),
            ExtractionMode::Flexible => write!(f, "flexible"),
        }
    }
}

impl std::str::FromStr for ExtractionMode {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(ExtractionMode::Strict),
            "flexible" => Ok(ExtractionMode::Flexible),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

/// How the SQL answer is located inside a raw completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    /// Last line of the trimmed completion.
    #[default]
    LastLine,
    /// Lower-cased text after the prompt, cut at the first semicolon.
    PromptDelimited,
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionStrategy::LastLine => write!(f, "last_line"),
            ExtractionStrategy::PromptDelimited => write!(f, "prompt_delimited"),
        }
    }
}

impl std::str::FromStr for ExtractionStrategy {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(s).as_str() {
            "last_line" => Ok(ExtractionStrategy::LastLine),
            "prompt_delimited" => Ok(ExtractionStrategy::PromptDelimited),
            _ => Err(ConfigError::InvalidStrategy(s.to_string())),
        }
    }
}
