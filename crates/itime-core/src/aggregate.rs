//! Per-log aggregation over every file identifier.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::Error;
use crate::estimate::{EstimateError, InteractionSummary, summarize_file};
use crate::event::{Event, FileId};
use crate::log::read_events;

/// Interaction seconds keyed by file identifier.
pub type InteractionTimes = BTreeMap<FileId, f64>;

/// Returns every distinct file identifier present in `events`.
///
/// Any event contributes its file, whether or not it is a press or release.
pub fn distinct_files(events: &[Event]) -> BTreeSet<&FileId> {
    events.iter().map(|e| &e.file_id).collect()
}

/// Summarizes every file in `events`, ordered by file identifier.
///
/// The first malformed file fails the whole call.
pub fn summarize_files(events: &[Event]) -> Result<Vec<InteractionSummary>, EstimateError> {
    let files = distinct_files(events);
    tracing::debug!(files = files.len(), events = events.len(), "estimating interaction time");

    files
        .into_iter()
        .map(|file_id| summarize_file(events, file_id))
        .collect()
}

/// Computes interaction seconds for every file in `events`.
///
/// Files with no measurable interaction are present with `0.0`.
pub fn interaction_time_per_file(events: &[Event]) -> Result<InteractionTimes, EstimateError> {
    Ok(summarize_files(events)?
        .into_iter()
        .map(|summary| (summary.file_id, summary.interaction_secs))
        .collect())
}

/// Reads the client log at `path` and computes interaction seconds per file.
pub fn interaction_time_per_file_from_log(path: &Path) -> Result<InteractionTimes, Error> {
    let events = read_events(path)?;
    Ok(interaction_time_per_file(&events)?)
}
