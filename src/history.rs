//! Read-only history access for the stateful signals
//!
//! Velocity and known-pattern signals never write; giving them a narrow
//! read-only trait keeps them deterministic under test (no wall clock, no
//! database required).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::error::EngineResult;
use crate::models::{BlockedEntity, EntityType};

#[async_trait]
pub trait HistoryReader: Send + Sync {
    /// Transactions with this customer email created strictly after `since`.
    async fn count_recent_by_email(
        &self,
        email: &str,
        since: DateTime<Utc>,
    ) -> EngineResult<i64>;

    /// Transactions with this card BIN created strictly after `since`.
    async fn count_recent_by_card_bin(
        &self,
        card_bin: &str,
        since: DateTime<Utc>,
    ) -> EngineResult<i64>;

    /// Offender ledger block count for one entity.
    async fn block_count(&self, entity_type: EntityType, value: &str) -> EngineResult<i64>;
}

#[async_trait]
impl HistoryReader for SqlitePool {
    async fn count_recent_by_email(
        &self,
        email: &str,
        since: DateTime<Utc>,
    ) -> EngineResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM transactions WHERE customer_email = ? AND created_at > ?",
        )
        .bind(email)
        .bind(since)
        .fetch_one(self)
        .await?;

        Ok(count)
    }

    async fn count_recent_by_card_bin(
        &self,
        card_bin: &str,
        since: DateTime<Utc>,
    ) -> EngineResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM transactions WHERE card_bin = ? AND created_at > ?",
        )
        .bind(card_bin)
        .bind(since)
        .fetch_one(self)
        .await?;

        Ok(count)
    }

    async fn block_count(&self, entity_type: EntityType, value: &str) -> EngineResult<i64> {
        Ok(BlockedEntity::block_count(self, entity_type, value).await?)
    }
}
