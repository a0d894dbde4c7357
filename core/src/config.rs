//! Configuration for record rewriting.
//!
//! `UpdateConfig` centralizes the eligibility threshold and the conflict
//! policy so deployment variants do not hardcode them at call sites.

use crate::error_codes;
use crate::record::MIN_RECORD_LEN;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do when conflicts are present before a rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictBehavior {
    /// Report conflicts and skip the rewrite.
    Halt,
    /// Rewrite regardless; conflicts are still reported.
    RewriteAnyway,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateConfig {
    /// Minimum line length in bytes before a line is treated as a
    /// record. Never below [`MIN_RECORD_LEN`]; deployments expecting
    /// trailing payload after the sequence field raise it.
    pub min_record_len: usize,
    pub on_conflicts: ConflictBehavior,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            min_record_len: MIN_RECORD_LEN,
            on_conflicts: ConflictBehavior::Halt,
        }
    }
}

impl UpdateConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_record_len < MIN_RECORD_LEN {
            return Err(ConfigError::MinRecordLenTooSmall {
                value: self.min_record_len,
                floor: MIN_RECORD_LEN,
            });
        }
        Ok(())
    }
}

/// Errors produced by config validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(
        "[SEQFIX_CONFIG_001] min_record_len must be at least {floor} so the sequence field fits (got {value})"
    )]
    MinRecordLenTooSmall { value: usize, floor: usize },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::MinRecordLenTooSmall { .. } => error_codes::CONFIG_MIN_RECORD_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_floor_matches_sequence_window() {
        let cfg = UpdateConfig::default();
        assert_eq!(cfg.min_record_len, 19);
        assert_eq!(cfg.on_conflicts, ConflictBehavior::Halt);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn serde_roundtrip_preserves_defaults() {
        let cfg = UpdateConfig::default();
        let json = serde_json::to_string(&cfg).expect("serialize default config");
        let parsed: UpdateConfig = serde_json::from_str(&json).expect("deserialize default config");
        assert_eq!(cfg, parsed);
    }

    #[test]
    fn partial_documents_fill_from_defaults() {
        let cfg: UpdateConfig =
            serde_json::from_str(r#"{"min_record_len": 22}"#).expect("deserialize partial config");
        assert_eq!(cfg.min_record_len, 22);
        assert_eq!(cfg.on_conflicts, ConflictBehavior::Halt);
    }

    #[test]
    fn validate_rejects_truncated_sequence_window() {
        let cfg = UpdateConfig {
            min_record_len: 18,
            ..Default::default()
        };
        let err = cfg.validate().expect_err("threshold below the field end");
        assert_eq!(err.code(), "SEQFIX_CONFIG_001");
    }
}
