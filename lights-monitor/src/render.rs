//! Console rendering of snapshots and change events

use anyhow::{Context, Result};
use light_state::{ChangeEvent, Snapshot};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Printed in place of the snapshot when nothing has been captured
pub const NOT_CAPTURED: &str = "Light Data is not currently captured.";

/// Pretty-print `value` as JSON with four-space indentation, keeping key order
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    String::from_utf8(buf).context("Serialized JSON was not UTF-8")
}

/// Render the whole snapshot as one JSON array
pub fn render_snapshot(snapshot: Option<&Snapshot>) -> Result<String> {
    match snapshot {
        Some(snapshot) if !snapshot.is_empty() => to_pretty_json(snapshot),
        _ => Ok(NOT_CAPTURED.to_string()),
    }
}

pub fn render_change(change: &ChangeEvent) -> Result<String> {
    to_pretty_json(change)
}
