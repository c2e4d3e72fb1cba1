use std::path::PathBuf;

use sqlparser::parser::ParserError;
use thiserror::Error;

/// Caller misconfiguration. Never converted into a reward.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Extraction mode other than `strict` or `flexible`.
    #[error("invalid extraction mode '{0}': expected 'strict' or 'flexible'")]
    InvalidMode(String),

    /// Extraction strategy other than `last_line` or `prompt_delimited`.
    #[error("invalid extraction strategy '{0}': expected 'last_line' or 'prompt_delimited'")]
    InvalidStrategy(String),

    /// Dialect name not known to the SQL parser.
    #[error("unknown SQL dialect '{0}'")]
    UnknownDialect(String),

    /// Reward configuration JSON could not be decoded.
    #[error("invalid reward config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Failure to locate the answer inside a raw completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// The prompt text does not occur in the completion.
    #[error("prompt text not found in completion")]
    PromptNotFound,

    /// The prompt text is empty and cannot delimit anything.
    #[error("prompt text is empty")]
    EmptyPrompt,

    /// Prompt-delimited extraction was called without any metadata.
    #[error("prompt-delimited extraction requires extra_info")]
    MissingExtraInfo,
}

/// Failure to turn a string into a single SQL statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlParseError {
    /// Input contained no statement at all.
    #[error("empty SQL input")]
    Empty,

    /// Tokenizer or parser rejected the input.
    #[error("{0}")]
    Syntax(#[from] ParserError),
}
