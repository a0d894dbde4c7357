//! JSON serialization for shells consuming the core's outputs.

use crate::conflict::SequenceConflict;
use crate::engine::ProcessReport;
use crate::line_diff::DiffLine;
use crate::update::UpdateInfo;

pub fn serialize_conflicts(conflicts: &[SequenceConflict]) -> serde_json::Result<String> {
    serde_json::to_string(conflicts)
}

pub fn serialize_changes(changes: &[UpdateInfo]) -> serde_json::Result<String> {
    serde_json::to_string(changes)
}

pub fn serialize_diff_lines(lines: &[DiffLine]) -> serde_json::Result<String> {
    serde_json::to_string(lines)
}

pub fn serialize_process_report(report: &ProcessReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}
