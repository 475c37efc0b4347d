//! Events command for inspecting a parsed client log.
//!
//! This module outputs every parsed event as JSONL for debugging.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use itime_core::read_events;

/// Runs the events command, writing one JSON object per event.
pub fn run<W: Write>(writer: &mut W, log: &Path) -> Result<()> {
    let events = read_events(log).context("failed to read client log")?;

    for event in &events {
        let json = serde_json::to_string(event)?;
        writeln!(writer, "{json}")?;
    }

    Ok(())
}
