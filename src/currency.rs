//! Currency normalization against a fixed USD rate table

use crate::error::{EngineError, EngineResult};

/// Fixed conversion rates to USD
pub const RATES_TO_USD: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("IDR", 0.000063),
    ("VND", 0.000040),
    ("PHP", 0.018),
    ("SGD", 0.74),
];

/// Convert an amount in a supported currency to USD.
///
/// Any code outside the fixed set is a hard precondition violation, not a
/// risk signal.
pub fn to_usd(amount: f64, currency: &str) -> EngineResult<f64> {
    let rate = RATES_TO_USD
        .iter()
        .find(|(code, _)| *code == currency)
        .map(|(_, rate)| *rate)
        .ok_or_else(|| EngineError::UnsupportedCurrency(currency.to_string()))?;

    Ok(amount * rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_is_identity() {
        assert_eq!(to_usd(100.0, "USD").unwrap(), 100.0);
    }

    #[test]
    fn converts_idr() {
        let usd = to_usd(10_000_000.0, "IDR").unwrap();
        assert!((usd - 630.0).abs() < 1e-9);
    }

    #[test]
    fn converts_sgd() {
        let usd = to_usd(100.0, "SGD").unwrap();
        assert!((usd - 74.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_unsupported_currency() {
        let err = to_usd(100.0, "EUR").unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedCurrency(code) if code == "EUR"));
    }
}
