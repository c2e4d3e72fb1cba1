/// SQL dialects accepted by the reward, mapped onto `sqlparser` dialects.
pub mod dialect;
/// Keyword normalization for configuration values and case folding of SQL names.
pub mod names;
/// Thin wrapper around `sqlparser` for single-statement parsing.
pub mod sql_parser;
