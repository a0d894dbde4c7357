//! Stable error codes surfaced alongside fatal errors.
//!
//! Shells match on these to pick a user-facing message, so existing
//! codes must never be renumbered.

pub const LOOKUP_MISSING_COLUMN: &str = "SEQFIX_LOOKUP_001";
pub const LOOKUP_EMPTY_SOURCE: &str = "SEQFIX_LOOKUP_002";
pub const CONFIG_MIN_RECORD_LEN: &str = "SEQFIX_CONFIG_001";
