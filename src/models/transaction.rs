//! Transaction model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, QueryBuilder, Row, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::engine::Scoring;
use crate::models::SignalResult;

/// Transaction lifecycle status. PENDING is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Approved,
    Blocked,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Approved => "APPROVED",
            TransactionStatus::Blocked => "BLOCKED",
        };
        f.write_str(s)
    }
}

/// Risk tier derived from the final fraud score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Partition a 0-100 fraud score into a tier. Boundaries at 31 and 71.
    pub fn from_score(score: i64) -> Self {
        if score >= 71 {
            RiskLevel::High
        } else if score >= 31 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub currency: String,
    pub customer_email: String,
    pub billing_country: String,
    pub shipping_country: String,
    pub ip_country: String,
    pub ip_address: Option<String>,
    pub card_bin: String,
    pub card_last4: String,
    pub product_category: String,
    pub account_age_days: i64,
    pub fraud_score: Option<i64>,
    pub risk_level: Option<RiskLevel>,
    pub score_breakdown: Option<Json<Vec<SignalResult>>>,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Incoming transaction attributes, validated by the caller before submission.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTransaction {
    pub amount: f64,
    pub currency: String,
    pub customer_email: String,
    pub billing_country: String,
    pub shipping_country: String,
    pub ip_country: String,
    pub ip_address: Option<String>,
    pub card_bin: String,
    pub card_last4: String,
    pub product_category: String,
    pub account_age_days: i64,
}

#[derive(Debug, Deserialize, Default)]
pub struct TransactionFilter {
    pub risk_level: Option<RiskLevel>,
    pub status: Option<TransactionStatus>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// One page of filtered transactions plus the unpaged total.
#[derive(Debug, Serialize)]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// Aggregate counts for the operations overview.
#[derive(Debug, Serialize)]
pub struct TransactionStats {
    pub total_transactions: i64,
    pub pending: i64,
    pub approved: i64,
    pub blocked: i64,
    pub avg_fraud_score: f64,
    pub high_risk_count: i64,
    pub medium_risk_count: i64,
    pub low_risk_count: i64,
}

impl Transaction {
    pub async fn create(
        pool: &SqlitePool,
        data: NewTransaction,
        scoring: Scoring,
        status: TransactionStatus,
        now: DateTime<Utc>,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4().to_string();

        sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (
                id, amount, currency, customer_email,
                billing_country, shipping_country, ip_country, ip_address,
                card_bin, card_last4, product_category, account_age_days,
                fraud_score, risk_level, score_breakdown, status,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(data.amount)
        .bind(&data.currency)
        .bind(&data.customer_email)
        .bind(&data.billing_country)
        .bind(&data.shipping_country)
        .bind(&data.ip_country)
        .bind(&data.ip_address)
        .bind(&data.card_bin)
        .bind(&data.card_last4)
        .bind(&data.product_category)
        .bind(data.account_age_days)
        .bind(scoring.fraud_score)
        .bind(scoring.risk_level)
        .bind(Json(scoring.score_breakdown))
        .bind(status)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Transaction>("SELECT * FROM transactions WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_all(
        pool: &SqlitePool,
        filter: TransactionFilter,
    ) -> Result<TransactionPage, sqlx::Error> {
        let limit = filter.limit.unwrap_or(50).min(200);
        let offset = filter.offset.unwrap_or(0);

        let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM transactions");
        push_filters(&mut count_query, &filter);
        let total: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

        let mut query = QueryBuilder::new("SELECT * FROM transactions");
        push_filters(&mut query, &filter);
        query
            .push(" ORDER BY created_at DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let transactions = query
            .build_query_as::<Transaction>()
            .fetch_all(pool)
            .await?;

        Ok(TransactionPage {
            transactions,
            total,
            limit,
            offset,
        })
    }

    /// Compare-and-swap status update: succeeds only while the row is still
    /// PENDING, so two concurrent reviews cannot both win.
    pub async fn update_status_if_pending(
        pool: &SqlitePool,
        id: &str,
        status: TransactionStatus,
        now: DateTime<Utc>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(
            r#"
            UPDATE transactions
            SET status = ?, updated_at = ?
            WHERE id = ? AND status = ?
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(now)
        .bind(id)
        .bind(TransactionStatus::Pending)
        .fetch_optional(pool)
        .await
    }

    pub async fn stats(pool: &SqlitePool) -> Result<TransactionStats, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*) as total_transactions,
                COALESCE(SUM(CASE WHEN status = 'PENDING' THEN 1 ELSE 0 END), 0) as pending,
                COALESCE(SUM(CASE WHEN status = 'APPROVED' THEN 1 ELSE 0 END), 0) as approved,
                COALESCE(SUM(CASE WHEN status = 'BLOCKED' THEN 1 ELSE 0 END), 0) as blocked,
                COALESCE(AVG(fraud_score), 0) as avg_fraud_score,
                COALESCE(SUM(CASE WHEN risk_level = 'HIGH' THEN 1 ELSE 0 END), 0) as high_risk_count,
                COALESCE(SUM(CASE WHEN risk_level = 'MEDIUM' THEN 1 ELSE 0 END), 0) as medium_risk_count,
                COALESCE(SUM(CASE WHEN risk_level = 'LOW' THEN 1 ELSE 0 END), 0) as low_risk_count
            FROM transactions
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok(TransactionStats {
            total_transactions: row.get("total_transactions"),
            pending: row.get("pending"),
            approved: row.get("approved"),
            blocked: row.get("blocked"),
            avg_fraud_score: (row.get::<f64, _>("avg_fraud_score") * 100.0).round() / 100.0,
            high_risk_count: row.get("high_risk_count"),
            medium_risk_count: row.get("medium_risk_count"),
            low_risk_count: row.get("low_risk_count"),
        })
    }
}

fn push_filters(query: &mut QueryBuilder<'_, Sqlite>, filter: &TransactionFilter) {
    let mut sep = " WHERE ";

    if let Some(risk_level) = filter.risk_level {
        query.push(sep).push("risk_level = ").push_bind(risk_level);
        sep = " AND ";
    }
    if let Some(status) = filter.status {
        query.push(sep).push("status = ").push_bind(status);
        sep = " AND ";
    }
    if let Some(from) = filter.from {
        query.push(sep).push("created_at >= ").push_bind(from);
        sep = " AND ";
    }
    if let Some(to) = filter.to {
        query.push(sep).push("created_at <= ").push_bind(to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_partition() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(31), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(70), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(71), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }

    #[test]
    fn status_display_matches_storage() {
        assert_eq!(TransactionStatus::Pending.to_string(), "PENDING");
        assert_eq!(TransactionStatus::Approved.to_string(), "APPROVED");
        assert_eq!(TransactionStatus::Blocked.to_string(), "BLOCKED");
    }
}
