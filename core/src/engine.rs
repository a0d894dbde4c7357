//! End-to-end processing: conflict gate, then rewrite.
//!
//! The component functions stay independent; this module encodes the
//! one policy callers share (detect conflicts first, rewrite only when
//! the configuration allows it) and folds the results into a single
//! report a shell can render.

use crate::config::{ConflictBehavior, UpdateConfig};
use crate::conflict::{SequenceConflict, find_sequence_conflicts};
use crate::lookup::LookupTable;
use crate::update::{UpdateInfo, update_sequence_numbers};
use serde::{Deserialize, Serialize};

/// Outcome of one processing run.
///
/// `processed_text` is `None` when the rewrite was skipped; `warnings`
/// explains why whenever `complete` is `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessReport {
    pub conflicts: Vec<SequenceConflict>,
    pub processed_text: Option<String>,
    pub changes: Vec<UpdateInfo>,
    pub complete: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Run conflict detection and, policy permitting, the rewrite.
pub fn process_text(text: &str, table: &LookupTable, config: &UpdateConfig) -> ProcessReport {
    let conflicts = find_sequence_conflicts(text.split('\n'));

    if !conflicts.is_empty() && config.on_conflicts == ConflictBehavior::Halt {
        let warning = format!(
            "{} identifier(s) carry conflicting sequence values; rewrite skipped",
            conflicts.len()
        );
        return ProcessReport {
            conflicts,
            processed_text: None,
            changes: Vec::new(),
            complete: false,
            warnings: vec![warning],
        };
    }

    let outcome = update_sequence_numbers(text, table, config);
    ProcessReport {
        conflicts,
        processed_text: Some(outcome.processed_text),
        changes: outcome.changes,
        complete: true,
        warnings: Vec::new(),
    }
}
