//! Decision policy - score thresholds to initial status

use crate::models::{Settings, TransactionStatus};

/// Map a freshly computed fraud score to an initial status.
///
/// Strict less-than on the approve side: `auto_approve_below = 0` disables
/// auto-approval entirely.
pub fn decide(fraud_score: i64, settings: &Settings) -> TransactionStatus {
    if fraud_score < settings.auto_approve_below {
        TransactionStatus::Approved
    } else if fraud_score >= settings.auto_block_above {
        TransactionStatus::Blocked
    } else {
        TransactionStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(approve_below: i64, block_above: i64) -> Settings {
        Settings {
            auto_approve_below: approve_below,
            auto_block_above: block_above,
        }
    }

    #[test]
    fn low_scores_auto_approve() {
        assert_eq!(decide(0, &settings(20, 80)), TransactionStatus::Approved);
        assert_eq!(decide(19, &settings(20, 80)), TransactionStatus::Approved);
    }

    #[test]
    fn approve_boundary_is_exclusive() {
        assert_eq!(decide(20, &settings(20, 80)), TransactionStatus::Pending);
    }

    #[test]
    fn high_scores_auto_block() {
        assert_eq!(decide(80, &settings(20, 80)), TransactionStatus::Blocked);
        assert_eq!(decide(100, &settings(20, 80)), TransactionStatus::Blocked);
    }

    #[test]
    fn mid_band_stays_pending() {
        assert_eq!(decide(50, &settings(20, 80)), TransactionStatus::Pending);
    }

    #[test]
    fn zero_approve_threshold_disables_auto_approval() {
        assert_eq!(decide(0, &settings(0, 80)), TransactionStatus::Pending);
    }
}
