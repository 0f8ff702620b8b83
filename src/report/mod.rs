//! Report module
//!
//! Renders a summary as text cards, as JSON, or both.

mod text;

use clap::ValueEnum;

use crate::domain::YearInReviewSummary;
use crate::error::AppResult;

pub use text::{group_thousands, render_text, wrap, CARD_WIDTH};

/// Which renderings to print
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Text cards followed by the JSON document
    #[default]
    All,
    /// Text cards only
    Text,
    /// JSON document only
    Json,
}

/// Pretty-printed JSON document of the summary (2-space indent)
pub fn render_json(summary: &YearInReviewSummary) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Render the summary in the requested format
pub fn render(summary: &YearInReviewSummary, format: OutputFormat) -> AppResult<String> {
    let rendered = match format {
        OutputFormat::Text => render_text(summary),
        OutputFormat::Json => render_json(summary)? + "\n",
        OutputFormat::All => format!(
            "{}📄 JSON OUTPUT:\n{}\n",
            render_text(summary),
            render_json(summary)?
        ),
    };
    Ok(rendered)
}
