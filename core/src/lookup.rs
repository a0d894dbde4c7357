//! Lookup-table construction from spreadsheet rows.
//!
//! This module turns raw "id sequence" cell text into validated entries
//! and whole row sets into an ordered table:
//! - [`parse_lookup_cell`]: one cell string to one normalized [`LookupEntry`]
//! - [`build_lookup_table`]: header + data rows to a [`LookupTable`],
//!   collecting [`SkippedRow`] diagnostics for rows that contribute nothing
//! - [`LookupBuildError`]: fatal failures of the build

use crate::cell::CellValue;
use crate::error_codes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Header label of the column holding "id sequence" pairs.
pub const ID_COLUMN_HEADER: &str = "dvb";

/// Width identifiers are zero-padded to.
pub const ID_WIDTH: usize = 5;
/// Width sequence numbers are zero-padded to.
pub const SEQUENCE_WIDTH: usize = 3;

/// Marker the upstream export writes for records without an identifier.
const UNASSIGNED_ID: &str = "-1";

/// One identifier/sequence pair from the lookup source.
///
/// Both fields are fixed-width digit strings after parsing: `id`
/// zero-padded to [`ID_WIDTH`], `sequence` to [`SEQUENCE_WIDTH`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub id: String,
    pub sequence: String,
}

/// Parse one raw cell into a normalized entry.
///
/// Accepts exactly two space-separated tokens (consecutive separators
/// produce empty tokens and reject), refuses the `-1` unassigned marker,
/// zero-pads both tokens, and refuses results containing ASCII letters.
/// `None` is the malformed outcome; callers log the offending raw value.
pub fn parse_lookup_cell(raw: &str) -> Option<LookupEntry> {
    let mut tokens = raw.trim().split(' ');
    let (id_token, sequence_token) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(id), Some(sequence), None) => (id, sequence),
        _ => return None,
    };
    if id_token.is_empty() || sequence_token.is_empty() || id_token == UNASSIGNED_ID {
        return None;
    }

    let id = zero_pad(id_token, ID_WIDTH);
    let sequence = zero_pad(sequence_token, SEQUENCE_WIDTH);
    if contains_letter(&id) || contains_letter(&sequence) {
        return None;
    }

    Some(LookupEntry { id, sequence })
}

fn zero_pad(token: &str, width: usize) -> String {
    let have = token.chars().count();
    if have >= width {
        return token.to_string();
    }
    let mut padded = "0".repeat(width - have);
    padded.push_str(token);
    padded
}

fn contains_letter(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_alphabetic())
}

/// An ordered, immutable table of lookup entries.
///
/// Row order from the source is preserved and duplicate identifiers are
/// retained; [`LookupTable::find`] returns the first entry for an
/// identifier, which keeps rewrites deterministic under duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupTable {
    entries: Vec<LookupEntry>,
}

impl LookupTable {
    pub fn from_entries(entries: Vec<LookupEntry>) -> LookupTable {
        LookupTable { entries }
    }

    pub fn entries(&self) -> &[LookupEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose id equals `id` exactly.
    pub fn find(&self, id: &str) -> Option<&LookupEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

/// Why a data row contributed no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The cell was textual but did not parse into an id/sequence pair.
    MalformedId,
    /// The cell was not textual (numeric, boolean, or empty/missing).
    NonTextValue,
}

/// Diagnostic for one data row skipped during the build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// Zero-based index of the row within the data rows.
    pub row_idx: usize,
    /// The observed cell value, rendered as text.
    pub observed: String,
    /// Coarse type of the observed cell.
    pub cell_type: String,
    pub reason: SkipReason,
}

impl std::fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            SkipReason::MalformedId => write!(
                f,
                "row {}: skipping malformed id '{}'",
                self.row_idx, self.observed
            ),
            SkipReason::NonTextValue => write!(
                f,
                "row {}: skipping non-text value '{}' (type: {})",
                self.row_idx, self.observed, self.cell_type
            ),
        }
    }
}

/// Result of a successful build: the table plus skip diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupBuild {
    pub table: LookupTable,
    pub skipped: Vec<SkippedRow>,
}

impl LookupBuild {
    /// Skip diagnostics rendered as warning lines.
    pub fn warnings(&self) -> Vec<String> {
        self.skipped.iter().map(|skip| skip.to_string()).collect()
    }
}

/// Errors that abort lookup-table construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LookupBuildError {
    #[error(
        "[SEQFIX_LOOKUP_001] no header cell named 'dvb' (case-insensitive). Suggestion: check the header row of the exported sheet."
    )]
    MissingColumn,
    #[error(
        "[SEQFIX_LOOKUP_002] lookup source is empty. Suggestion: the export must contain at least a header row."
    )]
    EmptySource,
}

impl LookupBuildError {
    pub fn code(&self) -> &'static str {
        match self {
            LookupBuildError::MissingColumn => error_codes::LOOKUP_MISSING_COLUMN,
            LookupBuildError::EmptySource => error_codes::LOOKUP_EMPTY_SOURCE,
        }
    }
}

/// Build a table from a header row and data rows.
///
/// The id column is the first header cell whose text trims,
/// case-insensitively, to [`ID_COLUMN_HEADER`]. Rows that contribute no
/// entry are reported in [`LookupBuild::skipped`] and never abort the
/// build; a header-only source yields an empty table.
pub fn build_lookup_table(
    header: &[CellValue],
    rows: &[Vec<CellValue>],
) -> Result<LookupBuild, LookupBuildError> {
    if header.is_empty() && rows.is_empty() {
        return Err(LookupBuildError::EmptySource);
    }

    let column = header
        .iter()
        .position(|cell| {
            cell.as_text()
                .map(|text| text.trim().eq_ignore_ascii_case(ID_COLUMN_HEADER))
                .unwrap_or(false)
        })
        .ok_or(LookupBuildError::MissingColumn)?;

    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    for (row_idx, row) in rows.iter().enumerate() {
        let cell = row.get(column).unwrap_or(&CellValue::Empty);
        let Some(text) = cell.as_text() else {
            skipped.push(SkippedRow {
                row_idx,
                observed: cell.to_string(),
                cell_type: cell.type_name().to_string(),
                reason: SkipReason::NonTextValue,
            });
            continue;
        };
        match parse_lookup_cell(text) {
            Some(entry) => entries.push(entry),
            None => skipped.push(SkippedRow {
                row_idx,
                observed: text.to_string(),
                cell_type: cell.type_name().to_string(),
                reason: SkipReason::MalformedId,
            }),
        }
    }

    Ok(LookupBuild {
        table: LookupTable::from_entries(entries),
        skipped,
    })
}
