//! Score model-generated SQL against ground-truth SQL by order-insensitive tree equivalence.
#![warn(missing_docs)]

/// Projection reordering that makes column order irrelevant to comparison.
pub mod canonical;
/// Reward parameters and policy selection, loadable from JSON.
pub mod config;
/// Attribute-level delta between two SQL statement trees.
pub mod diff;
/// Error types shared across the crate.
pub mod error;
/// Answer extraction from raw model completions.
pub mod extractor;
/// Score reports for the command-line surface.
pub mod output;
/// Dialect resolution and single-statement parsing.
pub mod parser;
/// The equivalence scoring pipeline and the reward-function seam.
pub mod scorer;

pub use config::RewardConfig;
pub use error::{ConfigError, ExtractionError, SqlParseError};
pub use scorer::reward::{RewardFunction, SqlEquivalenceReward};
pub use scorer::{compute_score, compute_score_with_method, evaluate, ExtraInfo};
