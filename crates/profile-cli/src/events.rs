//! Input event scripts.
//!
//! A script is either a JSON array of events or JSON Lines (one event per
//! line, blank lines ignored):
//!
//! ```json
//! [
//!   { "field": "lastName", "value": "田中" },
//!   { "field": "age", "value": "", "control": "number" }
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use profile_model::FieldChange;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid event list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid event on line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a script from text.
pub fn parse_events(text: &str) -> Result<Vec<FieldChange>, EventsError> {
    if text.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(text)?);
    }
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<FieldChange>(line).map_err(|source| EventsError::Line {
                line: index + 1,
                source,
            })
        })
        .collect()
}

/// Read and parse a script file.
pub fn load_events(path: &Path) -> Result<Vec<FieldChange>, EventsError> {
    let text = fs::read_to_string(path).map_err(|source| EventsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_events(&text)
}
