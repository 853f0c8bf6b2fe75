use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::models::Question;

pub const DEFAULT_QUESTIONS_PATH: &str = "problems.csv";

const FIELDS_PER_RECORD: usize = 2;

/// Errors that can occur while loading a question file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The question file could not be opened or read.
    #[error("cannot read {}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record is not a `question,answer` pair.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}

/// Load every question from a `question,answer` CSV file, in file order.
///
/// The whole load fails on the first record that does not have exactly two
/// fields. An empty file yields an empty set.
pub fn load_questions_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let unavailable = |source| LoadError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let content = {
        let mut file = File::open(path).map_err(unavailable)?;
        let mut content = Vec::new();
        file.read_to_end(&mut content).map_err(unavailable)?;
        content
    };

    let questions = parse_questions(&content)?;
    info!(
        path = %path.display(),
        count = questions.len(),
        "loaded questions"
    );
    Ok(questions)
}

/// Parse CSV content into questions.
pub fn parse_questions(content: &[u8]) -> Result<Vec<Question>, LoadError> {
    let blank_line = first_blank_line(content);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content);

    let mut questions = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|err| {
            let line = err.position().map_or(1, |pos| pos.line());
            let line = blank_line.map_or(line, |blank| blank.min(line));
            malformed(line, err.to_string())
        })?;
        let line = record.position().map_or(1, |pos| pos.line());

        // The reader skips empty lines, so the first record at or past one
        // means that line was passed over.
        if let Some(blank) = blank_line.filter(|&blank| line >= blank) {
            return Err(malformed(blank, "empty line".to_string()));
        }

        if record.len() != FIELDS_PER_RECORD {
            return Err(malformed(
                line,
                format!(
                    "expected {} fields, found {}",
                    FIELDS_PER_RECORD,
                    record.len()
                ),
            ));
        }

        questions.push(Question::new(&record[0], &record[1]));
    }

    if let Some(blank) = blank_line {
        return Err(malformed(blank, "empty line".to_string()));
    }

    Ok(questions)
}

fn malformed(line: u64, reason: String) -> LoadError {
    debug!(line, %reason, "rejecting question file");
    LoadError::MalformedRecord { line, reason }
}

/// Returns the number of the first line that is empty outside of a quoted
/// field. Such a line is a record with zero fields.
fn first_blank_line(content: &[u8]) -> Option<u64> {
    let mut line = 1;
    let mut line_is_empty = true;
    let mut in_quotes = false;
    let mut at_field_start = true;

    let mut bytes = content.iter().copied().peekable();
    while let Some(byte) = bytes.next() {
        if in_quotes {
            match byte {
                b'"' if bytes.peek() == Some(&b'"') => {
                    bytes.next();
                }
                b'"' => in_quotes = false,
                b'\n' => line += 1,
                _ => {}
            }
            continue;
        }

        // A bare `\r` ends a line too; in `\r\n` the `\n` does.
        let line_end = byte == b'\n' || (byte == b'\r' && bytes.peek() != Some(&b'\n'));
        if line_end {
            if line_is_empty {
                return Some(line);
            }
            line += 1;
            line_is_empty = true;
            at_field_start = true;
            continue;
        }

        match byte {
            b'\r' => continue,
            b'"' if at_field_start => {
                in_quotes = true;
                at_field_start = false;
            }
            b',' => at_field_start = true,
            _ => at_field_start = false,
        }
        line_is_empty = false;
    }

    None
}
