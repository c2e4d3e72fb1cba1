#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use sqlreward::extractor::ExtractionStrategy;
use sqlreward::parser::dialect::SqlDialect;
use sqlreward::RewardConfig;

pub(crate) fn last_line_config() -> RewardConfig {
    RewardConfig::default()
}

pub(crate) fn prompt_config() -> RewardConfig {
    RewardConfig {
        strategy: ExtractionStrategy::PromptDelimited,
        ..RewardConfig::default()
    }
}

pub(crate) fn dialect_config(dialect: SqlDialect) -> RewardConfig {
    RewardConfig {
        dialect,
        ..RewardConfig::default()
    }
}

pub(crate) fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
    std::fs::create_dir_all(&dir).expect("should create temp dir");
    dir
}
