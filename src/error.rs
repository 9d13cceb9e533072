//! Error handling

use thiserror::Error;

use crate::models::TransactionStatus;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Currency code outside the supported set. A precondition violation:
    /// upstream validation should reject these before submission.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Review action referenced a transaction that does not exist.
    #[error("Transaction {0} not found")]
    NotFound(String),

    /// Review action referenced a transaction that already left PENDING.
    /// Carries the current status so the caller can report "already APPROVED".
    #[error("Transaction {id} is already {current}")]
    Conflict {
        id: String,
        current: TransactionStatus,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
