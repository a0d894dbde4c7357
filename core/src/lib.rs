//! Sequence-number correction for fixed-width record files.
//!
//! This crate provides functionality for:
//! - Building a lookup table of (identifier, sequence) pairs from
//!   spreadsheet rows delivered by a decoding collaborator
//! - Detecting identifiers that occur with conflicting sequence values
//! - Rewriting the 3-byte sequence field of eligible records in place
//! - Computing an LCS-based line diff between original and rewritten
//!   text, with a paired layout for two-column review
//!
//! # Quick Start
//!
//! ```
//! use seqfix::{CellValue, UpdateConfig, build_lookup_table, update_sequence_numbers};
//!
//! let header = vec![CellValue::text("dvb")];
//! let rows = vec![vec![CellValue::text("3559 999")]];
//! let build = build_lookup_table(&header, &rows)?;
//!
//! let outcome = update_sequence_numbers(
//!     "CPSP00372003559 001",
//!     &build.table,
//!     &UpdateConfig::default(),
//! );
//! assert_eq!(outcome.processed_text, "CPSP00372003559 999");
//! # Ok::<(), seqfix::LookupBuildError>(())
//! ```

mod cell;
mod config;
mod conflict;
mod engine;
mod error_codes;
mod line_diff;
mod lookup;
mod output;
mod record;
mod update;

pub use cell::CellValue;
pub use config::{ConfigError, ConflictBehavior, UpdateConfig};
pub use conflict::{SequenceConflict, find_sequence_conflicts};
pub use engine::{ProcessReport, process_text};
pub use line_diff::{DiffKind, DiffLine, PADDING_LINE_NUMBER, diff_lines, interleave_diff};
pub use lookup::{
    ID_COLUMN_HEADER, ID_WIDTH, LookupBuild, LookupBuildError, LookupEntry, LookupTable,
    SEQUENCE_WIDTH, SkipReason, SkippedRow, build_lookup_table, parse_lookup_cell,
};
pub use output::json::{
    serialize_changes, serialize_conflicts, serialize_diff_lines, serialize_process_report,
};
pub use record::{ID_FIELD_END, ID_FIELD_START, MIN_RECORD_LEN, SEQ_FIELD_END, SEQ_FIELD_START};
pub use update::{UpdateInfo, UpdateOutcome, update_sequence_numbers};
