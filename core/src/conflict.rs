//! Sequence-conflict detection.
//!
//! Scans fixed-width records and reports identifiers that occur with
//! more than one distinct non-blank sequence value. Detection is
//! read-only and independent of rewriting; callers typically gate a
//! rewrite on an empty conflict list.

use crate::record;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// An identifier observed with conflicting sequence values.
///
/// `sequences` lists every distinct non-blank value in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceConflict {
    pub id: String,
    pub sequences: Vec<String>,
}

/// Scan `lines` and report every identifier carrying two or more
/// distinct non-blank sequence values.
///
/// Total: lines too short for both fields, lines with a blank sequence,
/// and lines whose field windows split a character are skipped.
pub fn find_sequence_conflicts<'a>(
    lines: impl IntoIterator<Item = &'a str>,
) -> Vec<SequenceConflict> {
    // The Vec keeps first-seen order; the map only indexes into it.
    let mut seen: Vec<(String, Vec<String>)> = Vec::new();
    let mut index_by_id: FxHashMap<String, usize> = FxHashMap::default();

    for line in lines {
        if line.len() < record::MIN_RECORD_LEN {
            continue;
        }
        let Some(id) = record::id_field(line) else {
            continue;
        };
        let Some(sequence) = record::sequence_field(line) else {
            continue;
        };
        let sequence = sequence.trim();
        if sequence.is_empty() {
            continue;
        }

        match index_by_id.get(id) {
            Some(&slot) => {
                let sequences = &mut seen[slot].1;
                if !sequences.iter().any(|known| known == sequence) {
                    sequences.push(sequence.to_string());
                }
            }
            None => {
                index_by_id.insert(id.to_string(), seen.len());
                seen.push((id.to_string(), vec![sequence.to_string()]));
            }
        }
    }

    seen.into_iter()
        .filter(|(_, sequences)| sequences.len() > 1)
        .map(|(id, sequences)| SequenceConflict { id, sequences })
        .collect()
}
