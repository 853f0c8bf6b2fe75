mod result;

use std::io::{self, Write};

use crate::models::Score;

/// How the final score is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

pub fn render_summary(score: &Score, format: SummaryFormat) -> serde_json::Result<String> {
    match format {
        SummaryFormat::Text => Ok(result::render(score)),
        SummaryFormat::Json => result::render_json(score),
    }
}

/// Write the summary as one line.
pub fn write_summary<W: Write>(
    mut output: W,
    score: &Score,
    format: SummaryFormat,
) -> io::Result<()> {
    let summary = render_summary(score, format)?;
    writeln!(output, "{}", summary)?;
    output.flush()
}
