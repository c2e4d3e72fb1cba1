//! CLI entry point for `sqlreward`.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use sqlreward::extractor::{ExtractionMode, ExtractionStrategy};
use sqlreward::output::report::ScoreReport;
use sqlreward::parser::dialect::SqlDialect;
use sqlreward::scorer::equivalence::log_evaluation;
use sqlreward::scorer::{evaluate, ExtraInfo, ScoreRequest};
use sqlreward::RewardConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sqlreward",
    about = "Score a generated SQL query against a ground-truth query"
)]
struct Cli {
    /// Raw model completion
    #[arg(long, conflicts_with_all = ["candidate_file", "batch"])]
    candidate: Option<String>,

    /// Read the raw model completion from a file
    #[arg(long, conflicts_with = "batch")]
    candidate_file: Option<PathBuf>,

    /// Ground-truth SQL
    #[arg(long, conflicts_with_all = ["reference_file", "batch"])]
    reference: Option<String>,

    /// Read the ground-truth SQL from a file
    #[arg(long, conflicts_with = "batch")]
    reference_file: Option<PathBuf>,

    /// Prompt text preceding the answer (prompt-delimited extraction)
    #[arg(long, conflicts_with = "batch")]
    prompt: Option<String>,

    /// Score JSON lines of {"solution", "ground_truth", "extra_info"}
    #[arg(long)]
    batch: Option<PathBuf>,

    /// Reward configuration JSON; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extraction mode: strict or flexible
    #[arg(long)]
    mode: Option<ExtractionMode>,

    /// Extraction strategy: last-line or prompt-delimited
    #[arg(long)]
    strategy: Option<ExtractionStrategy>,

    /// SQL dialect used for parsing
    #[arg(long)]
    dialect: Option<SqlDialect>,

    /// Reward for an equivalent answer
    #[arg(long, allow_negative_numbers = true)]
    score: Option<f64>,

    /// Reward for a mismatched or unparseable answer
    #[arg(long, allow_negative_numbers = true)]
    format_score: Option<f64>,

    /// Print JSON reports instead of bare scores
    #[arg(long)]
    json: bool,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    let result = match &cli.batch {
        Some(path) => score_batch(path, &config, cli.json),
        None => score_single(&cli, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(2);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<RewardConfig, String> {
    let mut config = match &cli.config {
        Some(path) => RewardConfig::from_path(path).map_err(|e| e.to_string())?,
        None => RewardConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(dialect) = cli.dialect {
        config.dialect = dialect;
    }
    if let Some(score) = cli.score {
        config.score = score;
    }
    if let Some(format_score) = cli.format_score {
        config.format_score = format_score;
    }
    Ok(config)
}

fn score_single(cli: &Cli, config: &RewardConfig) -> Result<(), String> {
    let candidate = read_input(
        "candidate",
        cli.candidate.as_deref(),
        cli.candidate_file.as_deref(),
    )?;
    let reference = read_input(
        "reference",
        cli.reference.as_deref(),
        cli.reference_file.as_deref(),
    )?;
    let extra_info = Some(ExtraInfo {
        prompt: cli.prompt.clone(),
        ..ExtraInfo::default()
    });

    let request = ScoreRequest {
        solution_str: candidate,
        ground_truth: reference,
        extra_info,
    };
    println!("{}", score_request(&request, config, cli.json)?);
    Ok(())
}

fn score_batch(path: &Path, config: &RewardConfig, json: bool) -> Result<(), String> {
    let file = std::fs::File::open(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let request: ScoreRequest = serde_json::from_str(&line)
            .map_err(|e| format!("Invalid batch record on line {}: {e}", idx + 1))?;
        println!("{}", score_request(&request, config, json)?);
    }
    Ok(())
}

fn score_request(
    request: &ScoreRequest,
    config: &RewardConfig,
    json: bool,
) -> Result<String, String> {
    let extra_info = request.extra_info.as_ref();
    let evaluation = evaluate(
        &request.solution_str,
        &request.ground_truth,
        config,
        extra_info,
    );
    let score = evaluation.reward(config.score, config.format_score);
    log_evaluation(
        &evaluation,
        &request.ground_truth,
        extra_info.and_then(ExtraInfo::prompt),
        score,
    );
    if json {
        let report = ScoreReport::new(&evaluation, score);
        serde_json::to_string(&report).map_err(|e| format!("Failed to encode report: {e}"))
    } else {
        Ok(score.to_string())
    }
}

fn read_input(label: &str, text: Option<&str>, file: Option<&Path>) -> Result<String, String> {
    match (text, file) {
        (Some(text), _) => Ok(text.to_string()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {label} file {}: {e}", path.display())),
        (None, None) => Err(format!("No {label} provided (use --{label} or --{label}-file)")),
    }
}
