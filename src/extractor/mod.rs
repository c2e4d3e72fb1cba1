/// Line-based and prompt-delimited answer extraction.
pub mod answer;
/// Extraction mode and strategy enums with their textual forms.
pub mod policy;

pub use answer::extract_answer;
pub use policy::{ExtractionMode, ExtractionStrategy};
