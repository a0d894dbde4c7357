//! Sequence-field rewriting.
//!
//! Applies a lookup table to the sequence field of every eligible
//! record, leaving every other byte of the text untouched, and logs each
//! line it actually changed.

use crate::config::UpdateConfig;
use crate::lookup::{LookupTable, SEQUENCE_WIDTH};
use crate::record::{self, SEQ_FIELD_END, SEQ_FIELD_START};
use serde::{Deserialize, Serialize};

/// Before/after pair for one rewritten line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInfo {
    pub original_line: String,
    pub updated_line: String,
}

/// The rewritten text plus the change log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub processed_text: String,
    pub changes: Vec<UpdateInfo>,
}

/// Rewrite the sequence field of every eligible line of `text`.
///
/// Lines shorter than `config.min_record_len`, lines whose sequence
/// field is blank, and lines whose identifier has no table entry pass
/// through unchanged. Splitting on `'\n'` and rejoining is byte-for-byte
/// inverse, so untouched input round-trips exactly.
pub fn update_sequence_numbers(
    text: &str,
    table: &LookupTable,
    config: &UpdateConfig,
) -> UpdateOutcome {
    let mut changes = Vec::new();
    let processed: Vec<String> = text
        .split('\n')
        .map(|line| update_line(line, table, config, &mut changes))
        .collect();

    UpdateOutcome {
        processed_text: processed.join("\n"),
        changes,
    }
}

fn update_line(
    line: &str,
    table: &LookupTable,
    config: &UpdateConfig,
    changes: &mut Vec<UpdateInfo>,
) -> String {
    if line.len() < config.min_record_len {
        return line.to_string();
    }
    let blank_sequence = record::sequence_field(line)
        .map(|field| field.trim().is_empty())
        .unwrap_or(true);
    if blank_sequence {
        return line.to_string();
    }
    let Some(id) = record::id_field(line) else {
        return line.to_string();
    };
    let Some(entry) = table.find(id) else {
        return line.to_string();
    };

    // sequence_field() succeeded above, so 16 and 19 are char boundaries.
    let updated = format!(
        "{}{}{}",
        &line[..SEQ_FIELD_START],
        pad_sequence(&entry.sequence),
        &line[SEQ_FIELD_END..]
    );
    if updated != line {
        changes.push(UpdateInfo {
            original_line: line.to_string(),
            updated_line: updated.clone(),
        });
    }
    updated
}

/// Right-pad with spaces to exactly [`SEQUENCE_WIDTH`] characters,
/// truncating anything longer.
fn pad_sequence(sequence: &str) -> String {
    sequence
        .chars()
        .chain(std::iter::repeat(' '))
        .take(SEQUENCE_WIDTH)
        .collect()
}
