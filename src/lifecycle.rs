//! Transaction lifecycle - submission scoring and manual review
//!
//! The two operations the routing layer calls into. Submission scores,
//! decides, and persists in one logical step; review owns the
//! PENDING -> APPROVED/BLOCKED transition and feeds the offender ledger on
//! block.

use chrono::Utc;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::engine;
use crate::error::{EngineError, EngineResult};
use crate::models::{BlockedEntity, NewTransaction, Settings, Transaction, TransactionStatus};
use crate::policy;
use crate::signals::EvalContext;

/// Manual review outcome. The only two transitions out of PENDING.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReviewDecision {
    Approved,
    Blocked,
}

impl From<ReviewDecision> for TransactionStatus {
    fn from(decision: ReviewDecision) -> Self {
        match decision {
            ReviewDecision::Approved => TransactionStatus::Approved,
            ReviewDecision::Blocked => TransactionStatus::Blocked,
        }
    }
}

/// Score an incoming transaction, apply the auto-action thresholds, and
/// persist it. The caller has already validated the raw attributes.
pub async fn submit_transaction(
    pool: &SqlitePool,
    input: NewTransaction,
) -> EngineResult<Transaction> {
    let now = Utc::now();
    let ctx = EvalContext { now, history: pool };
    let scoring = engine::score_transaction(&input, &ctx).await?;

    // Thresholds are read fresh per submission, never cached.
    let settings = Settings::get(pool).await?;
    let status = policy::decide(scoring.fraud_score, &settings);

    let transaction = Transaction::create(pool, input, scoring, status, now).await?;
    tracing::info!(
        id = %transaction.id,
        score = transaction.fraud_score,
        risk = ?transaction.risk_level,
        status = %transaction.status,
        "transaction created"
    );

    Ok(transaction)
}

/// Apply a manual review decision to a PENDING transaction.
///
/// The status check and write are a single compare-and-swap; a transaction
/// that already left PENDING surfaces as `Conflict` with its current status.
/// A block also records the email and card BIN into the offender ledger.
pub async fn review_transaction(
    pool: &SqlitePool,
    id: &str,
    decision: ReviewDecision,
) -> EngineResult<Transaction> {
    let now = Utc::now();
    let status = TransactionStatus::from(decision);

    let updated = Transaction::update_status_if_pending(pool, id, status, now).await?;
    let Some(transaction) = updated else {
        // CAS missed: figure out whether the row is absent or already terminal.
        return match Transaction::find_by_id(pool, id).await? {
            Some(existing) => Err(EngineError::Conflict {
                id: id.to_string(),
                current: existing.status,
            }),
            None => Err(EngineError::NotFound(id.to_string())),
        };
    };

    if transaction.status == TransactionStatus::Blocked {
        BlockedEntity::record_block(
            pool,
            &transaction.customer_email,
            &transaction.card_bin,
            now,
        )
        .await?;
    }

    tracing::info!(id = %transaction.id, status = %transaction.status, "transaction reviewed");
    Ok(transaction)
}
