//! Amount anomaly risk, on USD-normalized amounts

use crate::currency::to_usd;
use crate::error::EngineResult;
use crate::models::{NewTransaction, Severity, SignalResult};
use crate::signals::Signal;

pub(crate) fn evaluate(transaction: &NewTransaction) -> EngineResult<SignalResult> {
    let usd_amount = to_usd(transaction.amount, &transaction.currency)?;

    // Strictly greater-than: exactly $500 is still in range.
    let score = if usd_amount > 1500.0 {
        15
    } else if usd_amount > 1000.0 {
        10
    } else if usd_amount > 500.0 {
        5
    } else {
        0
    };

    let severity = if score >= 10 {
        Severity::High
    } else if score >= 5 {
        Severity::Medium
    } else if score > 0 {
        Severity::Low
    } else {
        Severity::None
    };

    let description = if score > 0 {
        format!("Transaction amount ${usd_amount:.2} USD exceeds threshold")
    } else {
        format!("Transaction amount ${usd_amount:.2} USD is within normal range")
    };

    Ok(SignalResult {
        score,
        signal: Signal::AmountAnomaly.name().to_string(),
        description,
        severity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::signals::testing::sample_transaction;

    fn with_amount(amount: f64, currency: &str) -> NewTransaction {
        NewTransaction {
            amount,
            currency: currency.to_string(),
            ..sample_transaction()
        }
    }

    #[test]
    fn exactly_500_is_in_range() {
        let result = evaluate(&with_amount(500.0, "USD")).unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.severity, Severity::None);
    }

    #[test]
    fn just_over_500_scores_5() {
        let result = evaluate(&with_amount(501.0, "USD")).unwrap();
        assert_eq!(result.score, 5);
        assert_eq!(result.severity, Severity::Medium);
    }

    #[test]
    fn just_over_1000_scores_10() {
        let result = evaluate(&with_amount(1001.0, "USD")).unwrap();
        assert_eq!(result.score, 10);
        assert_eq!(result.severity, Severity::High);
    }

    #[test]
    fn just_over_1500_scores_15() {
        let result = evaluate(&with_amount(1501.0, "USD")).unwrap();
        assert_eq!(result.score, 15);
        assert_eq!(result.severity, Severity::High);
    }

    #[test]
    fn thresholds_apply_to_normalized_amount() {
        // 10,000,000 IDR is $630 USD
        let result = evaluate(&with_amount(10_000_000.0, "IDR")).unwrap();
        assert_eq!(result.score, 5);
        assert!(result.description.contains("$630.00"));
    }

    #[test]
    fn unsupported_currency_is_an_error() {
        let err = evaluate(&with_amount(100.0, "EUR")).unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedCurrency(_)));
    }
}
