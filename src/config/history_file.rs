//! Loading a history table from a JSON file.
//!
//! The file holds a map of test id to raw statistics, the same shape the
//! built-in seed table uses. The store is built in full before any
//! classification starts, so lookups only ever see a complete snapshot.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::triage::{HistoryStore, TestStats};

/// Errors loading a history table.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading history file: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error in history file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid flakiness {value} for test {test_id}: must be within [0, 1]")]
    InvalidFlakiness { test_id: String, value: f64 },
}

/// Load and validate a history table.
pub fn load_history(path: &Path) -> Result<HistoryStore, ConfigError> {
    let data = fs::read_to_string(path)?;
    let records: HashMap<String, TestStats> = serde_json::from_str(&data)?;

    for (test_id, stats) in &records {
        if !(0.0..=1.0).contains(&stats.flakiness) {
            return Err(ConfigError::InvalidFlakiness {
                test_id: test_id.clone(),
                value: stats.flakiness,
            });
        }
    }

    Ok(HistoryStore::from_records(records))
}
