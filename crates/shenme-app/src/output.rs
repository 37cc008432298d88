use anyhow::Context;
use shenme_config::OutputFormat;

use crate::lookup::LookupOutcome;

pub const NO_DEFINITIONS: &str = "No definitions were found.";

/// Text printed to stdout for one lookup
///
/// Only the plain text format mentions an empty result; HTML prints an empty list.
pub fn render(outcome: &LookupOutcome, format: OutputFormat) -> anyhow::Result<String> {
    let heading = format!(
        "Obtaining definitions for {} {} at {}\n",
        outcome.word, outcome.gloss, outcome.address
    );

    let rendered = match format {
        OutputFormat::Text => {
            let mut text = heading;
            text.push_str(&outcome.definitions.to_text());
            if outcome.definitions.is_empty() {
                text.push_str(NO_DEFINITIONS);
                text.push('\n');
            }
            text
        }
        OutputFormat::Html => format!("{heading}{}\n", outcome.definitions.to_html()),
        OutputFormat::Json => {
            let json = serde_json::to_string(&outcome.definitions)
                .context("Failed to serialize definitions")?;
            format!("{json}\n")
        }
    };

    Ok(rendered)
}
