use crate::error::ExtractionError;
use crate::extractor::policy::{ExtractionMode, ExtractionStrategy};

/// Extract the SQL answer from a raw completion.
///
/// `prompt` is only consulted by [`ExtractionStrategy::PromptDelimited`].
/// The mode does not change the result of either strategy.
pub fn extract_answer(
    solution_str: &str,
    strategy: ExtractionStrategy,
    _mode: ExtractionMode,
    prompt: Option<&str>,
) -> Result<String, ExtractionError> {
    match strategy {
        ExtractionStrategy::LastLine => Ok(last_line(solution_str).to_string()),
        ExtractionStrategy::PromptDelimited => after_prompt(solution_str, prompt),
    }
}

/// Return the last line of the trimmed completion, itself trimmed.
///
/// An empty or whitespace-only completion yields `""`.
pub fn last_line(solution_str: &str) -> &str {
    solution_str
        .trim()
        .lines()
        .last()
        .map(str::trim)
        .unwrap_or_default()
}

/// Return the lower-cased text that follows the first occurrence of `prompt`,
/// truncated at the first `;`.
///
/// Without a prompt the whole lower-cased, trimmed completion is returned.
pub fn after_prompt(solution_str: &str, prompt: Option<&str>) -> Result<String, ExtractionError> {
    let completion = solution_str.to_lowercase();
    let completion = completion.trim();

    let Some(prompt) = prompt else {
        return Ok(completion.to_string());
    };

    let prompt = prompt.to_lowercase();
    if prompt.is_empty() {
        return Err(ExtractionError::EmptyPrompt);
    }

    let (_, generated) = completion
        .split_once(prompt.as_str())
        .ok_or(ExtractionError::PromptNotFound)?;
    let generated = generated.trim();
    let statement = generated
        .split_once(';')
        .map_or(generated, |(head, _)| head);

    Ok(statement.trim().to_string())
}
