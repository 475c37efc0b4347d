//! Client log reader.
//!
//! Each line of a client log is a comma-separated record with no header and no
//! quoting:
//!
//! ```text
//! <field0>,<timestamp>,<event_name>,...,fname:<file_id>,...
//! ```
//!
//! Field 1 holds the timestamp in seconds and field 2 the event name. Exactly
//! one of the other fields must carry the `fname:` marker; the text after the
//! marker is the file identifier.

use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::event::{Event, EventName, FileId};

/// Marker introducing the file identifier inside a field.
pub const FILE_ID_MARKER: &str = "fname:";

const TIMESTAMP_FIELD: usize = 1;
const NAME_FIELD: usize = 2;
const MIN_FIELDS: usize = 3;

/// Errors raised while reading a client log. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be read.
    #[error("failed to read log {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The line has fewer fields than timestamp and event name require.
    #[error("line {line}: expected at least 3 comma-separated fields, found {found}")]
    TooFewFields { line: usize, found: usize },
    /// The timestamp field is not a number.
    #[error("line {line}: invalid timestamp {value:?}")]
    InvalidTimestamp {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
    /// The timestamp parsed but is NaN or infinite.
    #[error("line {line}: timestamp {value:?} is not finite")]
    NonFiniteTimestamp { line: usize, value: String },
    /// No field carries the `fname:` marker.
    #[error("line {line}: no field carries the `fname:` marker")]
    MissingFileId { line: usize },
    /// More than one field carries the `fname:` marker.
    #[error("line {line}: {count} fields carry the `fname:` marker, expected exactly one")]
    AmbiguousFileId { line: usize, count: usize },
}

/// Parses one trimmed, non-blank log line.
pub fn parse_line(line: &str, line_no: usize) -> Result<Event, LogError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_FIELDS {
        return Err(LogError::TooFewFields {
            line: line_no,
            found: fields.len(),
        });
    }

    let raw_time = fields[TIMESTAMP_FIELD].trim();
    let time: f64 = raw_time
        .parse()
        .map_err(|source| LogError::InvalidTimestamp {
            line: line_no,
            value: raw_time.to_string(),
            source,
        })?;
    if !time.is_finite() {
        return Err(LogError::NonFiniteTimestamp {
            line: line_no,
            value: raw_time.to_string(),
        });
    }

    let file_id = extract_file_id(&fields, line_no)?;

    Ok(Event {
        name: EventName::from(fields[NAME_FIELD]),
        time,
        file_id,
    })
}

/// Finds the single field carrying the marker and returns the text after it.
fn extract_file_id(fields: &[&str], line_no: usize) -> Result<FileId, LogError> {
    let mut matches = fields
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != TIMESTAMP_FIELD && *i != NAME_FIELD)
        .filter_map(|(_, field)| field.split_once(FILE_ID_MARKER).map(|(_, id)| id));

    let Some(id) = matches.next() else {
        return Err(LogError::MissingFileId { line: line_no });
    };

    let extra = matches.count();
    if extra > 0 {
        return Err(LogError::AmbiguousFileId {
            line: line_no,
            count: extra + 1,
        });
    }

    Ok(FileId::new(id))
}

/// Parses a whole log held in memory.
///
/// The first malformed line fails the whole parse. A blank line is malformed:
/// it has a single empty field.
pub fn parse_log(contents: &str) -> Result<Vec<Event>, LogError> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| parse_line(line.trim(), i + 1))
        .collect()
}

/// Reads every event from the log at `path`, in file order.
pub fn read_events(path: &Path) -> Result<Vec<Event>, LogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let events = parse_log(&contents)?;
    tracing::debug!(path = %path.display(), count = events.len(), "read client log");
    Ok(events)
}
