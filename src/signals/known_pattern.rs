//! Known offender pattern risk

use crate::error::EngineResult;
use crate::models::{EntityType, NewTransaction, Severity, SignalResult};
use crate::signals::{EvalContext, Signal};

/// Blocks below this count are treated as coincidental, not established.
const ESTABLISHED_BLOCKS: i64 = 3;

pub(crate) async fn evaluate(
    transaction: &NewTransaction,
    ctx: &EvalContext<'_>,
) -> EngineResult<SignalResult> {
    let email_blocks = ctx
        .history
        .block_count(EntityType::Email, &transaction.customer_email)
        .await?;
    let bin_blocks = ctx
        .history
        .block_count(EntityType::CardBin, &transaction.card_bin)
        .await?;
    let max_blocks = email_blocks.max(bin_blocks);

    let (score, severity) = if max_blocks >= ESTABLISHED_BLOCKS {
        (40, Severity::High)
    } else {
        (0, Severity::None)
    };

    let description = if score > 0 {
        format!("Entity has {max_blocks} prior blocks (email: {email_blocks}, card BIN: {bin_blocks})")
    } else {
        "No known fraud patterns".to_string()
    };

    Ok(SignalResult {
        score,
        signal: Signal::KnownPattern.name().to_string(),
        description,
        severity,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::signals::testing::{sample_transaction, StubHistory};

    async fn score_with(blocks: Vec<(EntityType, String, i64)>) -> SignalResult {
        let history = StubHistory {
            blocks,
            ..Default::default()
        };
        let ctx = EvalContext {
            now: Utc::now(),
            history: &history,
        };
        evaluate(&sample_transaction(), &ctx).await.unwrap()
    }

    #[tokio::test]
    async fn no_blocks_scores_zero() {
        let result = score_with(vec![]).await;
        assert_eq!(result.score, 0);
        assert_eq!(result.severity, Severity::None);
    }

    #[tokio::test]
    async fn two_blocks_are_not_established() {
        let result =
            score_with(vec![(EntityType::Email, "customer@example.com".into(), 2)]).await;
        assert_eq!(result.score, 0);
    }

    #[tokio::test]
    async fn three_email_blocks_score_40() {
        let result =
            score_with(vec![(EntityType::Email, "customer@example.com".into(), 3)]).await;
        assert_eq!(result.score, 40);
        assert_eq!(result.severity, Severity::High);
    }

    #[tokio::test]
    async fn takes_the_maximum_of_both_entities() {
        let result = score_with(vec![
            (EntityType::Email, "customer@example.com".into(), 1),
            (EntityType::CardBin, "411111".into(), 4),
        ])
        .await;
        assert_eq!(result.score, 40);
        assert!(result.description.contains("4 prior blocks"));
    }
}
