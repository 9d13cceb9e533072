//! Signal result model

use serde::{Deserialize, Serialize};

/// Severity tag derived from a signal's sub-score magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
}

/// One signal's contribution to a transaction's score breakdown.
///
/// Created fresh on every scoring call and persisted only embedded in the
/// transaction's `score_breakdown` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub score: i64,
    pub signal: String,
    pub description: String,
    pub severity: Severity,
}
