use crate::canonical::canonicalize;
use crate::config::RewardConfig;
use crate::diff::diff;
use crate::error::ExtractionError;
use crate::extractor::{extract_answer, ExtractionStrategy};
use crate::parser::dialect::SqlDialect;
use crate::parser::sql_parser::parse_statement;
use crate::scorer::outcome::{Evaluation, QuerySide, ScoreOutcome};
use crate::scorer::ExtraInfo;

/// Run extraction, parsing, canonicalization and diffing without logging.
///
/// Prompt-delimited extraction needs `extra_info`, even one without a prompt.
pub fn evaluate(
    solution_str: &str,
    ground_truth: &str,
    config: &RewardConfig,
    extra_info: Option<&ExtraInfo>,
) -> Evaluation {
    let extracted = match (config.strategy, extra_info) {
        (ExtractionStrategy::PromptDelimited, None) => Err(ExtractionError::MissingExtraInfo),
        (strategy, _) => extract_answer(
            solution_str,
            strategy,
            config.mode,
            extra_info.and_then(ExtraInfo::prompt),
        ),
    };
    match extracted {
        Ok(answer) => {
            let outcome = compare_sql(&answer, ground_truth, config.dialect);
            Evaluation {
                answer: Some(answer),
                outcome,
            }
        }
        Err(error) => Evaluation {
            answer: None,
            outcome: ScoreOutcome::ExtractionFailed(error),
        },
    }
}

/// Compare two SQL strings after canonicalizing their select lists.
pub fn compare_sql(answer: &str, ground_truth: &str, dialect: SqlDialect) -> ScoreOutcome {
    let mut answer_tree = match parse_statement(answer, dialect) {
        Ok(tree) => tree,
        Err(error) => {
            return ScoreOutcome::ParseFailed {
                side: QuerySide::Answer,
                error,
            }
        }
    };
    let mut ground_truth_tree = match parse_statement(ground_truth, dialect) {
        Ok(tree) => tree,
        Err(error) => {
            return ScoreOutcome::ParseFailed {
                side: QuerySide::GroundTruth,
                error,
            }
        }
    };

    canonicalize(&mut answer_tree);
    canonicalize(&mut ground_truth_tree);

    let tree_diff = diff(&answer_tree, &ground_truth_tree);
    if tree_diff.is_empty() {
        ScoreOutcome::Equivalent
    } else {
        ScoreOutcome::Mismatch { diff: tree_diff }
    }
}

/// Score `solution_str` against `ground_truth`.
///
/// Never fails: extraction and parse failures collapse into
/// `config.format_score`. Every call emits one diagnostic event.
pub fn compute_score(
    solution_str: &str,
    ground_truth: &str,
    config: &RewardConfig,
    extra_info: Option<&ExtraInfo>,
) -> f64 {
    let evaluation = evaluate(solution_str, ground_truth, config, extra_info);
    let reward = evaluation.reward(config.score, config.format_score);
    log_evaluation(
        &evaluation,
        ground_truth,
        extra_info.and_then(ExtraInfo::prompt),
        reward,
    );
    reward
}

/// Emit the diagnostic event for one evaluation.
///
/// Successes log at `debug`; extraction and parse failures log at `warn`
/// with the error, the extracted answer, the ground truth and the prompt.
pub fn log_evaluation(
    evaluation: &Evaluation,
    ground_truth: &str,
    prompt: Option<&str>,
    reward: f64,
) {
    let outcome = evaluation.outcome.kind();
    if evaluation.outcome.is_failure() {
        let error = evaluation.outcome.error_message().unwrap_or_default();
        tracing::warn!(
            outcome,
            score = reward,
            error = %error,
            answer = evaluation.answer.as_deref().unwrap_or_default(),
            ground_truth,
            prompt = ?prompt,
            "{outcome}, score is {reward}"
        );
    } else if let Some(diff) = evaluation.outcome.diff() {
        tracing::debug!(
            outcome,
            score = reward,
            edits = diff.len(),
            "{outcome}, score is {reward}"
        );
    } else {
        tracing::debug!(outcome, score = reward, "{outcome}, score is {reward}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SqlParseError;

    #[test]
    fn compare_sql_reports_which_side_failed() {
        let outcome = compare_sql("SELECT a FROM t", "SELEC a FRM t", SqlDialect::Generic);
        assert!(matches!(
            outcome,
            ScoreOutcome::ParseFailed {
                side: QuerySide::GroundTruth,
                error: SqlParseError::Syntax(_)
            }
        ));

        let outcome = compare_sql("", "SELECT a FROM t", SqlDialect::Generic);
        assert_eq!(
            outcome,
            ScoreOutcome::ParseFailed {
                side: QuerySide::Answer,
                error: SqlParseError::Empty,
            }
        );
    }

    #[test]
    fn evaluate_keeps_the_extracted_answer() {
        let config = RewardConfig::default();
        let evaluation = evaluate(
            "I will list both columns.\nSELECT b, a FROM t",
            "SELECT a, b FROM t",
            &config,
            None,
        );
        assert_eq!(evaluation.answer.as_deref(), Some("SELECT b, a FROM t"));
        assert_eq!(evaluation.outcome, ScoreOutcome::Equivalent);
    }

    #[test]
    fn evaluate_surfaces_missing_prompt_as_extraction_failure() {
        let config = RewardConfig {
            strategy: ExtractionStrategy::PromptDelimited,
            ..RewardConfig::default()
        };
        let extra_info = ExtraInfo::with_prompt("Question:");
        let evaluation = evaluate(
            "SELECT a FROM t",
            "SELECT a FROM t",
            &config,
            Some(&extra_info),
        );
        assert_eq!(evaluation.answer, None);
        assert_eq!(
            evaluation.outcome,
            ScoreOutcome::ExtractionFailed(ExtractionError::PromptNotFound)
        );
        let reward = compute_score(
            "SELECT a FROM t",
            "SELECT a FROM t",
            &config,
            Some(&extra_info),
        );
        assert_eq!(reward, 0.0);
    }

    #[test]
    fn prompt_delimited_without_extra_info_is_an_extraction_failure() {
        let config = RewardConfig {
            strategy: ExtractionStrategy::PromptDelimited,
            ..RewardConfig::default()
        };
        let evaluation = evaluate("select a from t", "select a from t", &config, None);
        assert_eq!(
            evaluation.outcome,
            ScoreOutcome::ExtractionFailed(ExtractionError::MissingExtraInfo)
        );

        let metadata = ExtraInfo::default();
        let evaluation = evaluate("select a from t", "select a from t", &config, Some(&metadata));
        assert_eq!(evaluation.outcome, ScoreOutcome::Equivalent);
    }
}
