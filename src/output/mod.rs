/// Serializable score reports and one-line summaries.
pub mod report;
