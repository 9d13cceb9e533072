//! Offender ledger model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Entity dimensions tracked by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum EntityType {
    Email,
    CardBin,
}

/// Running count of block associations for one (type, value) entity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BlockedEntity {
    pub id: i64,
    pub entity_type: EntityType,
    pub entity_value: String,
    pub block_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlockedEntity {
    /// Record a block against both the email and the card BIN.
    ///
    /// Both upserts run in one database transaction; a partial ledger update
    /// would skew the known-pattern signal.
    pub async fn record_block(
        pool: &SqlitePool,
        email: &str,
        card_bin: &str,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        for (entity_type, entity_value) in [(EntityType::Email, email), (EntityType::CardBin, card_bin)] {
            sqlx::query(
                r#"
                INSERT INTO blocked_entities (entity_type, entity_value, block_count, created_at, updated_at)
                VALUES (?, ?, 1, ?, ?)
                ON CONFLICT(entity_type, entity_value)
                DO UPDATE SET block_count = block_count + 1, updated_at = ?
                "#,
            )
            .bind(entity_type)
            .bind(entity_value)
            .bind(now)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }

    /// Stored block count for an entity, or 0 if it has never been recorded.
    pub async fn block_count(
        pool: &SqlitePool,
        entity_type: EntityType,
        entity_value: &str,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT block_count FROM blocked_entities WHERE entity_type = ? AND entity_value = ?",
        )
        .bind(entity_type)
        .bind(entity_value)
        .fetch_optional(pool)
        .await?;

        Ok(count.unwrap_or(0))
    }
}
