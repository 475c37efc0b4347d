//! Report command for per-file interaction time.
//!
//! This module implements `itime report` with human-readable and JSON output.

use std::cmp::Ordering;
use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use itime_core::{InteractionSummary, read_events, summarize_files};
use serde::Serialize;

use crate::config::OutputFormat;

/// Computed report data.
#[derive(Debug)]
pub struct ReportData {
    pub generated_at: DateTime<Utc>,
    pub log: PathBuf,
    /// Sorted by interaction time descending, then file identifier.
    pub files: Vec<InteractionSummary>,
    /// Pauses across every file in the log, including hidden ones.
    pub pause_count: usize,
    pub paused_secs: f64,
}

impl ReportData {
    /// Builds a report over every estimated file in a log.
    pub fn new(
        generated_at: DateTime<Utc>,
        log: PathBuf,
        mut files: Vec<InteractionSummary>,
    ) -> Self {
        files.sort_by(by_interaction_desc);
        let pause_count: usize = files.iter().map(|f| f.pause_count).sum();
        let paused_secs: f64 = files.iter().map(|f| f.paused_secs).sum();
        Self {
            generated_at,
            log,
            files,
            pause_count,
            paused_secs,
        }
    }

    /// Drops files without measurable interaction. Pause totals are kept.
    pub fn hide_zero(&mut self) {
        self.files.retain(|f| f.interaction_secs > 0.0);
    }

    fn total_secs(&self) -> f64 {
        self.files.iter().map(|f| f.interaction_secs).sum()
    }
}

/// JSON shape of a report.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    log: &'a Path,
    files: &'a [InteractionSummary],
    total_secs: f64,
    pause_count: usize,
    paused_secs: f64,
}

// ========== Duration Formatting ==========

/// Formats seconds as a duration string, rounded to whole seconds.
/// Returns "Xh Ym" if >= 1 hour, "Xm Ys" if >= 1 minute, "Xs" otherwise.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(secs: f64) -> String {
    let total = secs.max(0.0).round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours >= 1 {
        format!("{hours}h {minutes}m")
    } else if minutes >= 1 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

// ========== Progress Bar ==========

/// Generates a 10-character progress bar.
/// Values <5% of max get a single block for visibility.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return "░░░░░░░░░░".to_string();
    }

    let ratio = value / max;
    let filled = if ratio < 0.05 && value > 0.0 {
        1
    } else {
        (ratio * 10.0).round().clamp(0.0, 10.0) as usize
    };

    let empty = 10 - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

// ========== Report Generation ==========

fn by_interaction_desc(a: &InteractionSummary, b: &InteractionSummary) -> Ordering {
    b.interaction_secs
        .total_cmp(&a.interaction_secs)
        .then_with(|| a.file_id.cmp(&b.file_id))
}

/// Reads the log and estimates every file in it.
pub fn generate_report_data(
    log: &Path,
    hide_zero: bool,
    generated_at: DateTime<Utc>,
) -> Result<ReportData> {
    let events = read_events(log).context("failed to read client log")?;
    let files = summarize_files(&events).context("failed to estimate interaction time")?;

    let mut data = ReportData::new(generated_at, log.to_path_buf(), files);
    if hide_zero {
        data.hide_zero();
    }
    Ok(data)
}

/// Formats the human-readable report output.
pub fn format_report(data: &ReportData) -> String {
    let mut output = String::new();

    writeln!(output, "INTERACTION TIME: {}", data.log.display()).unwrap();

    if data.files.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "No interaction recorded in this log.").unwrap();
        return output;
    }

    let max = data
        .files
        .iter()
        .map(|f| f.interaction_secs)
        .fold(0.0, f64::max);

    writeln!(output).unwrap();
    writeln!(output, "FILES").unwrap();
    writeln!(output, "─────").unwrap();
    for file in &data.files {
        let name = if file.file_id.as_str().is_empty() {
            "(no file)"
        } else {
            file.file_id.as_str()
        };
        let duration = format_duration(file.interaction_secs);
        let bar = progress_bar(file.interaction_secs, max);
        writeln!(output, "{name:<24}{duration:>8}  {bar}").unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "SUMMARY").unwrap();
    writeln!(output, "───────").unwrap();
    writeln!(output, "Files:          {}", data.files.len()).unwrap();
    writeln!(output, "Total active:   {}", format_duration(data.total_secs())).unwrap();
    writeln!(
        output,
        "Pauses:         {} ({} excluded)",
        data.pause_count,
        format_duration(data.paused_secs)
    )
    .unwrap();

    output
}

/// Formats the report as pretty-printed JSON.
pub fn format_json(data: &ReportData) -> Result<String> {
    let report = JsonReport {
        generated_at: data.generated_at,
        log: &data.log,
        files: &data.files,
        total_secs: data.total_secs(),
        pause_count: data.pause_count,
        paused_secs: data.paused_secs,
    };
    serde_json::to_string_pretty(&report).context("failed to serialize report")
}

/// Runs the report command.
pub fn run<W: Write>(
    writer: &mut W,
    log: &Path,
    format: OutputFormat,
    hide_zero: bool,
) -> Result<()> {
    let data = generate_report_data(log, hide_zero, Utc::now())?;
    tracing::debug!(files = data.files.len(), "generated report");

    match format {
        OutputFormat::Text => write!(writer, "{}", format_report(&data))?,
        OutputFormat::Json => writeln!(writer, "{}", format_json(&data)?)?,
    }
    Ok(())
}
