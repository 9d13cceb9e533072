//! Settings model - operator-tunable decision thresholds

use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};

use crate::config::{DEFAULT_AUTO_APPROVE_BELOW, DEFAULT_AUTO_BLOCK_ABOVE};

/// The two decision thresholds. Read fresh from the store on every scoring
/// decision so changes apply to the next transaction, never retroactively.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Settings {
    pub auto_approve_below: i64,
    pub auto_block_above: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_approve_below: DEFAULT_AUTO_APPROVE_BELOW,
            auto_block_above: DEFAULT_AUTO_BLOCK_ABOVE,
        }
    }
}

/// Partial settings update; omitted fields keep their current value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SettingsUpdate {
    pub auto_approve_below: Option<i64>,
    pub auto_block_above: Option<i64>,
}

impl Settings {
    pub async fn get(pool: &SqlitePool) -> Result<Self, sqlx::Error> {
        let rows = sqlx::query("SELECT key, value FROM settings")
            .fetch_all(pool)
            .await?;

        let mut settings = Settings::default();
        for row in rows {
            let key: String = row.get("key");
            let value: String = row.get("value");
            let Ok(value) = value.parse::<i64>() else {
                continue;
            };
            match key.as_str() {
                "auto_approve_below" => settings.auto_approve_below = value,
                "auto_block_above" => settings.auto_block_above = value,
                _ => {}
            }
        }

        Ok(settings)
    }

    pub async fn update(pool: &SqlitePool, updates: SettingsUpdate) -> Result<Self, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let pairs = [
            ("auto_approve_below", updates.auto_approve_below),
            ("auto_block_above", updates.auto_block_above),
        ];
        for (key, value) in pairs {
            let Some(value) = value else { continue };
            sqlx::query(
                "INSERT INTO settings (key, value) VALUES (?, ?) ON CONFLICT(key) DO UPDATE SET value = ?",
            )
            .bind(key)
            .bind(value.to_string())
            .bind(value.to_string())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Self::get(pool).await
    }
}
