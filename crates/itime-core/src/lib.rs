//! Core logic for estimating annotation interaction time.
//!
//! This crate contains:
//! - Log reading: parsing client logs into [`Event`]s
//! - Estimation: active seconds per file, with long pauses excluded
//! - Aggregation: one estimate for every file seen in a log

use thiserror::Error;

mod aggregate;
pub mod estimate;
pub mod event;
pub mod log;

pub use aggregate::{
    InteractionTimes, distinct_files, interaction_time_per_file,
    interaction_time_per_file_from_log, summarize_files,
};
pub use estimate::{
    EstimateError, InteractionSummary, PAUSE_THRESHOLD_SECS, estimate_duration, is_pause,
    summarize_file,
};
pub use event::{Event, EventName, FileId};
pub use log::{LogError, read_events};

/// Any failure of a top-level estimation call.
#[derive(Debug, Error)]
pub enum Error {
    /// The log could not be read or parsed.
    #[error(transparent)]
    Log(#[from] LogError),
    /// A file's press/release sequence is malformed.
    #[error(transparent)]
    Estimate(#[from] EstimateError),
}
