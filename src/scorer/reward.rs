use crate::config::RewardConfig;
use crate::scorer::equivalence::{self, evaluate};
use crate::scorer::outcome::Evaluation;
use crate::scorer::ExtraInfo;

/// A reward plugin: maps a completion and its ground truth to a scalar.
///
/// Implementations must not panic or return errors on malformed data;
/// anything that cannot be scored gets the implementation's low reward.
pub trait RewardFunction: Send + Sync {
    /// Stable identifier of the reward function.
    fn name(&self) -> &str;

    /// Reward for `solution_str` given `ground_truth`.
    fn compute_score(
        &self,
        solution_str: &str,
        ground_truth: &str,
        extra_info: Option<&ExtraInfo>,
    ) -> f64;
}

/// Binary reward for order-insensitive SQL equivalence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlEquivalenceReward {
    config: RewardConfig,
}

impl SqlEquivalenceReward {
    /// Create a reward function with the given configuration.
    pub fn new(config: RewardConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &RewardConfig {
        &self.config
    }

    /// Full evaluation, for callers that want the outcome and not just the reward.
    pub fn evaluate(
        &self,
        solution_str: &str,
        ground_truth: &str,
        extra_info: Option<&ExtraInfo>,
    ) -> Evaluation {
        evaluate(solution_str, ground_truth, &self.config, extra_info)
    }
}

impl RewardFunction for SqlEquivalenceReward {
    fn name(&self) -> &str {
        "sql_equivalence"
    }

    fn compute_score(
        &self,
        solution_str: &str,
        ground_truth: &str,
        extra_info: Option<&ExtraInfo>,
    ) -> f64 {
        equivalence::compute_score(solution_str, ground_truth, &self.config, extra_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn works_behind_a_trait_object() {
        let rewards: Vec<Box<dyn RewardFunction>> = vec![Box::new(SqlEquivalenceReward::new(
            RewardConfig {
                score: 2.0,
                format_score: -1.0,
                ..RewardConfig::default()
            },
        ))];

        let reward = &rewards[0];
        assert_eq!(reward.name(), "sql_equivalence");
        assert_eq!(
            reward.compute_score("SELECT b, a FROM t", "SELECT a, b FROM t", None),
            2.0
        );
        assert_eq!(
            reward.compute_score("SELECT a FROM t", "SELECT b FROM t", None),
            -1.0
        );
    }

    #[test]
    fn reward_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqlEquivalenceReward>();
    }
}
