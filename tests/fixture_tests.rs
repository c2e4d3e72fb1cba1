use serde::Deserialize;
use sqlreward::{compute_score, RewardConfig};

#[derive(Deserialize)]
struct FixturePair {
    solution_str: String,
    ground_truth: String,
    expected: f64,
}

fn load_pairs(path: &str) -> Vec<FixturePair> {
    let text =
        std::fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(idx, line)| {
            serde_json::from_str(line)
                .unwrap_or_else(|e| panic!("invalid fixture on line {}: {e}", idx + 1))
        })
        .collect()
}

#[test]
fn spider_style_pairs_score_as_expected() {
    let pairs = load_pairs("tests/fixtures/spider_pairs.jsonl");
    assert!(!pairs.is_empty(), "fixture should contain pairs");

    let config = RewardConfig::default();
    for pair in &pairs {
        let reward = compute_score(&pair.solution_str, &pair.ground_truth, &config, None);
        assert_eq!(
            reward, pair.expected,
            "unexpected reward for {:?} vs {:?}",
            pair.solution_str, pair.ground_truth
        );
    }
}

#[test]
fn spider_style_pairs_are_symmetric() {
    let config = RewardConfig::default();
    for pair in load_pairs("tests/fixtures/spider_pairs.jsonl") {
        if pair.solution_str.contains('\n') {
            continue;
        }
        let forward = compute_score(&pair.solution_str, &pair.ground_truth, &config, None);
        let backward = compute_score(&pair.ground_truth, &pair.solution_str, &config, None);
        assert_eq!(
            forward, backward,
            "{} vs {}",
            pair.solution_str, pair.ground_truth
        );
    }
}
