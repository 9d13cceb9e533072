//! Email velocity risk

use chrono::Duration;

use crate::error::EngineResult;
use crate::models::{NewTransaction, Severity, SignalResult};
use crate::signals::{EvalContext, Signal};

const WINDOW_MINUTES: i64 = 10;

pub(crate) async fn evaluate(
    transaction: &NewTransaction,
    ctx: &EvalContext<'_>,
) -> EngineResult<SignalResult> {
    let since = ctx.now - Duration::minutes(WINDOW_MINUTES);
    let count = ctx
        .history
        .count_recent_by_email(&transaction.customer_email, since)
        .await?;

    let score = if count >= 6 {
        30
    } else if count >= 4 {
        25
    } else if count >= 2 {
        15
    } else {
        0
    };

    let severity = if score >= 25 {
        Severity::High
    } else if score >= 10 {
        Severity::Medium
    } else if score > 0 {
        Severity::Low
    } else {
        Severity::None
    };

    let description = if score > 0 {
        format!("{count} transactions from this email in last {WINDOW_MINUTES} minutes")
    } else {
        "Normal email transaction velocity".to_string()
    };

    Ok(SignalResult {
        score,
        signal: Signal::EmailVelocity.name().to_string(),
        description,
        severity,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::signals::testing::{sample_transaction, StubHistory};

    async fn score_for(count: i64) -> SignalResult {
        let history = StubHistory {
            email_count: count,
            ..Default::default()
        };
        let ctx = EvalContext {
            now: Utc::now(),
            history: &history,
        };
        evaluate(&sample_transaction(), &ctx).await.unwrap()
    }

    #[tokio::test]
    async fn single_prior_scores_zero() {
        let result = score_for(1).await;
        assert_eq!(result.score, 0);
        assert_eq!(result.severity, Severity::None);
    }

    #[tokio::test]
    async fn two_priors_score_15() {
        let result = score_for(2).await;
        assert_eq!(result.score, 15);
        assert_eq!(result.severity, Severity::Medium);
    }

    #[tokio::test]
    async fn four_priors_score_25() {
        let result = score_for(4).await;
        assert_eq!(result.score, 25);
        assert_eq!(result.severity, Severity::High);
    }

    #[tokio::test]
    async fn six_priors_score_30() {
        let result = score_for(6).await;
        assert_eq!(result.score, 30);
        assert_eq!(result.severity, Severity::High);
        assert!(result.description.starts_with("6 transactions"));
    }
}
