//! Risk signal set
//!
//! Seven independently computed risk dimensions. Every signal is always
//! evaluated; one that finds nothing to flag contributes score 0 with
//! severity `none` rather than being omitted, so the persisted breakdown
//! always carries exactly one entry per signal in a fixed order.

pub mod account_age;
pub mod amount_anomaly;
pub mod card_bin_velocity;
pub mod email_velocity;
pub mod geo_mismatch;
pub mod high_risk_product;
pub mod known_pattern;

use chrono::{DateTime, Utc};

use crate::error::EngineResult;
use crate::history::HistoryReader;
use crate::models::{NewTransaction, SignalResult};

/// Inputs shared by the stateful signals: an explicit evaluation instant and
/// a read-only view of stored history.
pub struct EvalContext<'a> {
    pub now: DateTime<Utc>,
    pub history: &'a dyn HistoryReader,
}

/// The closed set of signals, in breakdown presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    HighRiskProduct,
    AccountAge,
    AmountAnomaly,
    GeoMismatch,
    EmailVelocity,
    CardBinVelocity,
    KnownPattern,
}

impl Signal {
    pub const ALL: [Signal; 7] = [
        Signal::HighRiskProduct,
        Signal::AccountAge,
        Signal::AmountAnomaly,
        Signal::GeoMismatch,
        Signal::EmailVelocity,
        Signal::CardBinVelocity,
        Signal::KnownPattern,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Signal::HighRiskProduct => "high_risk_product",
            Signal::AccountAge => "account_age",
            Signal::AmountAnomaly => "amount_anomaly",
            Signal::GeoMismatch => "geo_mismatch",
            Signal::EmailVelocity => "email_velocity",
            Signal::CardBinVelocity => "card_bin_velocity",
            Signal::KnownPattern => "known_pattern",
        }
    }

    /// Evaluate this signal against a candidate transaction.
    pub async fn evaluate(
        self,
        transaction: &NewTransaction,
        ctx: &EvalContext<'_>,
    ) -> EngineResult<SignalResult> {
        match self {
            Signal::HighRiskProduct => Ok(high_risk_product::evaluate(transaction)),
            Signal::AccountAge => Ok(account_age::evaluate(transaction)),
            Signal::AmountAnomaly => amount_anomaly::evaluate(transaction),
            Signal::GeoMismatch => Ok(geo_mismatch::evaluate(transaction)),
            Signal::EmailVelocity => email_velocity::evaluate(transaction, ctx).await,
            Signal::CardBinVelocity => card_bin_velocity::evaluate(transaction, ctx).await,
            Signal::KnownPattern => known_pattern::evaluate(transaction, ctx).await,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    use crate::error::EngineResult;
    use crate::history::HistoryReader;
    use crate::models::{EntityType, NewTransaction};

    /// Canned history for signal tests.
    #[derive(Debug, Default)]
    pub struct StubHistory {
        pub email_count: i64,
        pub card_bin_count: i64,
        pub blocks: Vec<(EntityType, String, i64)>,
    }

    #[async_trait]
    impl HistoryReader for StubHistory {
        async fn count_recent_by_email(
            &self,
            _email: &str,
            _since: DateTime<Utc>,
        ) -> EngineResult<i64> {
            Ok(self.email_count)
        }

        async fn count_recent_by_card_bin(
            &self,
            _card_bin: &str,
            _since: DateTime<Utc>,
        ) -> EngineResult<i64> {
            Ok(self.card_bin_count)
        }

        async fn block_count(&self, entity_type: EntityType, value: &str) -> EngineResult<i64> {
            Ok(self
                .blocks
                .iter()
                .find(|(t, v, _)| *t == entity_type && v == value)
                .map(|(_, _, count)| *count)
                .unwrap_or(0))
        }
    }

    /// Baseline transaction that trips no signal.
    pub fn sample_transaction() -> NewTransaction {
        NewTransaction {
            amount: 100.0,
            currency: "USD".to_string(),
            customer_email: "customer@example.com".to_string(),
            billing_country: "US".to_string(),
            shipping_country: "US".to_string(),
            ip_country: "US".to_string(),
            ip_address: Some("192.168.1.1".to_string()),
            card_bin: "411111".to_string(),
            card_last4: "1234".to_string(),
            product_category: "Home Goods".to_string(),
            account_age_days: 365,
        }
    }
}
