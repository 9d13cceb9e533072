//! PearlMarket Risk Engine
//!
//! Fraud screening core for payment transactions. Every incoming transaction
//! is run through a fixed, ordered set of seven risk signals; their sub-scores
//! are summed into a 0-100 fraud score, mapped to a LOW/MEDIUM/HIGH risk tier,
//! and compared against operator-configured thresholds to auto-approve,
//! auto-block, or leave the transaction pending for manual review.
//!
//! # Data flow
//!
//! ```text
//! incoming attributes
//!        │
//!        ▼
//! ┌──────────────┐   currency rates, offender ledger,
//! │ Scoring      │◄── windowed velocity counts
//! │ Engine       │
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐   auto_approve_below / auto_block_above
//! │ Decision     │◄── (read fresh per submission)
//! │ Policy       │
//! └──────┬───────┘
//!        ▼
//!   persisted transaction ──► manual review ──► terminal APPROVED/BLOCKED
//!                                               (block feeds the ledger)
//! ```
//!
//! The HTTP routing layer, dashboard, and seed tooling are external
//! collaborators; this crate exposes [`submit_transaction`] and
//! [`review_transaction`] plus the store types they read and write.

pub mod config;
pub mod currency;
pub mod db;
pub mod engine;
pub mod error;
pub mod history;
pub mod lifecycle;
pub mod models;
pub mod policy;
pub mod signals;

pub use error::{EngineError, EngineResult};
pub use lifecycle::{review_transaction, submit_transaction, ReviewDecision};
