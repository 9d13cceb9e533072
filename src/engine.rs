//! Scoring engine orchestrator

use serde::Serialize;

use crate::error::EngineResult;
use crate::models::{NewTransaction, RiskLevel, SignalResult};
use crate::signals::{EvalContext, Signal};

/// Result of one scoring run. The breakdown carries exactly one entry per
/// signal in `Signal::ALL` order.
#[derive(Debug, Clone, Serialize)]
pub struct Scoring {
    pub fraud_score: i64,
    pub risk_level: RiskLevel,
    pub score_breakdown: Vec<SignalResult>,
}

/// Run all seven signals, sum their sub-scores, and clamp to 100.
///
/// Read-only: the only store accesses are the velocity and ledger reads made
/// by the stateful signals.
pub async fn score_transaction(
    transaction: &NewTransaction,
    ctx: &EvalContext<'_>,
) -> EngineResult<Scoring> {
    let mut score_breakdown = Vec::with_capacity(Signal::ALL.len());
    for signal in Signal::ALL {
        score_breakdown.push(signal.evaluate(transaction, ctx).await?);
    }

    let raw_score: i64 = score_breakdown.iter().map(|result| result.score).sum();
    let fraud_score = raw_score.min(100);

    Ok(Scoring {
        fraud_score,
        risk_level: RiskLevel::from_score(fraud_score),
        score_breakdown,
    })
}
