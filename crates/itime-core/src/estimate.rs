//! Per-file interaction time estimation.
//!
//! # Algorithm Summary
//!
//! 1. Keep only `mouse_press`/`mouse_release` events for the target file,
//!    in log order.
//! 2. Walk consecutive pairs. Presses and releases must alternate.
//! 3. Every gap counts as interaction, except a gap that starts at a release
//!    and lasts longer than [`PAUSE_THRESHOLD_SECS`]. That gap is a pause: the
//!    user stepped away between annotations.

use serde::Serialize;
use thiserror::Error;

use crate::event::{Event, EventName, FileId};

/// Release-to-press gaps longer than this many seconds are pauses.
///
/// Fixed heuristic. Not exposed for runtime tuning.
pub const PAUSE_THRESHOLD_SECS: f64 = 20.0;

/// Errors raised while estimating a single file.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimateError {
    /// Two consecutive interaction events on a file share a name, e.g. two
    /// presses without a release in between.
    #[error(
        "malformed event sequence for file '{file_id}': consecutive {name} events at {previous_time}s and {time}s"
    )]
    Alternation {
        file_id: FileId,
        name: EventName,
        previous_time: f64,
        time: f64,
    },
}

/// Estimated interaction for one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionSummary {
    pub file_id: FileId,

    /// Active seconds, pauses excluded.
    pub interaction_secs: f64,

    /// Number of gaps excluded as pauses.
    pub pause_count: usize,

    /// Seconds excluded as pauses.
    pub paused_secs: f64,
}

impl InteractionSummary {
    fn empty(file_id: FileId) -> Self {
        Self {
            file_id,
            interaction_secs: 0.0,
            pause_count: 0,
            paused_secs: 0.0,
        }
    }
}

/// Whether the gap following `previous` should be excluded as a pause.
pub fn is_pause(previous: &Event, gap_secs: f64) -> bool {
    previous.name == EventName::MouseRelease && gap_secs > PAUSE_THRESHOLD_SECS
}

/// Estimates interaction for `file_id`, with a breakdown of excluded pauses.
///
/// Events for other files and events other than press/release are ignored.
/// Fewer than two interaction events yields zero.
pub fn summarize_file(
    events: &[Event],
    file_id: &FileId,
) -> Result<InteractionSummary, EstimateError> {
    let mut summary = InteractionSummary::empty(file_id.clone());
    let mut interactions = events.iter().filter(|e| e.is_interaction_on(file_id));

    let Some(mut cursor) = interactions.next() else {
        return Ok(summary);
    };

    for event in interactions {
        if event.name == cursor.name {
            return Err(EstimateError::Alternation {
                file_id: file_id.clone(),
                name: event.name.clone(),
                previous_time: cursor.time,
                time: event.time,
            });
        }

        let gap = event.time - cursor.time;
        if gap < 0.0 {
            tracing::warn!(
                file_id = %file_id,
                from = cursor.time,
                to = event.time,
                "timestamps went backwards, skipping gap"
            );
        } else if is_pause(cursor, gap) {
            tracing::debug!(file_id = %file_id, from = cursor.time, gap, "excluding pause");
            summary.pause_count += 1;
            summary.paused_secs += gap;
        } else {
            summary.interaction_secs += gap;
        }

        cursor = event;
    }

    Ok(summary)
}

/// Estimates active interaction seconds for `file_id`.
pub fn estimate_duration(events: &[Event], file_id: &FileId) -> Result<f64, EstimateError> {
    summarize_file(events, file_id).map(|summary| summary.interaction_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(time: f64, file: &str) -> Event {
        Event::new(EventName::MousePress, time, file)
    }

    fn release(time: f64, file: &str) -> Event {
        Event::new(EventName::MouseRelease, time, file)
    }

    fn f1() -> FileId {
        FileId::from("f1")
    }

    fn assert_secs(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}s, got {actual}s"
        );
    }

    #[test]
    fn test_single_press_release() {
        let events = [press(0.0, "f1"), release(5.0, "f1")];
        assert_secs(estimate_duration(&events, &f1()).unwrap(), 5.0);
    }

    #[test]
    fn test_long_release_gap_is_pause() {
        let events = [
            press(0.0, "f1"),
            release(5.0, "f1"),
            press(30.0, "f1"),
            release(35.0, "f1"),
        ];

        let summary = summarize_file(&events, &f1()).unwrap();

        assert_secs(summary.interaction_secs, 10.0);
        assert_eq!(summary.pause_count, 1);
        assert_secs(summary.paused_secs, 25.0);
    }

    #[test]
    fn test_short_release_gap_counts() {
        let events = [
            press(0.0, "f1"),
            release(5.0, "f1"),
            press(15.0, "f1"),
            release(20.0, "f1"),
        ];

        let summary = summarize_file(&events, &f1()).unwrap();

        assert_secs(summary.interaction_secs, 20.0);
        assert_eq!(summary.pause_count, 0);
    }

    #[test]
    fn test_gap_at_threshold_is_not_pause() {
        let events = [
            press(0.0, "f1"),
            release(1.0, "f1"),
            press(21.0, "f1"),
            release(22.0, "f1"),
        ];
        assert_secs(estimate_duration(&events, &f1()).unwrap(), 22.0);
    }

    #[test]
    fn test_long_hold_is_never_pause() {
        let events = [press(0.0, "f1"), release(90.0, "f1")];
        assert_secs(estimate_duration(&events, &f1()).unwrap(), 90.0);
    }

    #[test]
    fn test_single_event_is_zero() {
        let events = [press(0.0, "f1")];
        assert_secs(estimate_duration(&events, &f1()).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_events() {
        let summary = summarize_file(&[], &f1()).unwrap();
        assert_eq!(summary, InteractionSummary::empty(f1()));
    }

    #[test]
    fn test_other_files_ignored() {
        let events = [
            press(0.0, "f1"),
            press(1.0, "f2"),
            release(2.0, "f2"),
            release(4.0, "f1"),
            press(100.0, "f2"),
            release(101.0, "f2"),
        ];

        assert_secs(estimate_duration(&events, &f1()).unwrap(), 4.0);
        assert_secs(estimate_duration(&events, &FileId::from("f2")).unwrap(), 2.0);
    }

    #[test]
    fn test_non_interaction_events_ignored() {
        let events = [
            press(0.0, "f1"),
            Event::new("key_press", 1.0, "f1"),
            Event::new("key_press", 2.0, "f1"),
            release(3.0, "f1"),
        ];
        assert_secs(estimate_duration(&events, &f1()).unwrap(), 3.0);
    }

    #[test]
    fn test_repeated_press_is_alternation_error() {
        let events = [press(0.0, "f1"), press(2.0, "f1"), release(3.0, "f1")];

        let err = estimate_duration(&events, &f1()).unwrap_err();

        assert_eq!(
            err,
            EstimateError::Alternation {
                file_id: f1(),
                name: EventName::MousePress,
                previous_time: 0.0,
                time: 2.0,
            }
        );
        assert!(err.to_string().contains("consecutive mouse_press events"));
    }

    #[test]
    fn test_backwards_gap_is_skipped() {
        let events = [
            press(10.0, "f1"),
            release(15.0, "f1"),
            press(12.0, "f1"),
            release(14.0, "f1"),
        ];

        let summary = summarize_file(&events, &f1()).unwrap();

        assert_secs(summary.interaction_secs, 7.0);
        assert_eq!(summary.pause_count, 0);
    }

    #[test]
    fn test_is_pause_only_after_release() {
        let released = release(0.0, "f1");
        let pressed = press(0.0, "f1");

        assert!(is_pause(&released, PAUSE_THRESHOLD_SECS + 0.5));
        assert!(!is_pause(&released, PAUSE_THRESHOLD_SECS));
        assert!(!is_pause(&pressed, PAUSE_THRESHOLD_SECS + 100.0));
    }
}
