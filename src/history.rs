//! Scan history entries.
//!
//! The history store keeps a compact summary of every scan. The timestamp is
//! supplied by the caller; the engine never reads the clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{AnalysisResult, Status};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub scanned_at: DateTime<Utc>,
    pub ingredients: Vec<String>,
    pub status: Status,
    pub safe_count: usize,
    pub caution_count: usize,
    pub unsafe_count: usize,
}

impl HistoryRecord {
    pub fn from_result(result: &AnalysisResult, scanned_at: DateTime<Utc>) -> Self {
        HistoryRecord {
            scanned_at,
            ingredients: result.tokens.iter().map(|t| t.text.clone()).collect(),
            status: result.status,
            safe_count: result.count(Status::Safe),
            caution_count: result.count(Status::Caution),
            unsafe_count: result.count(Status::Unsafe),
        }
    }
}
