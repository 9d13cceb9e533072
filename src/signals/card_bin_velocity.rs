//! Card BIN velocity risk

use chrono::Duration;

use crate::error::EngineResult;
use crate::models::{NewTransaction, Severity, SignalResult};
use crate::signals::{EvalContext, Signal};

const WINDOW_MINUTES: i64 = 30;

pub(crate) async fn evaluate(
    transaction: &NewTransaction,
    ctx: &EvalContext<'_>,
) -> EngineResult<SignalResult> {
    let since = ctx.now - Duration::minutes(WINDOW_MINUTES);
    let count = ctx
        .history
        .count_recent_by_card_bin(&transaction.card_bin, since)
        .await?;

    let score = if count >= 4 {
        15
    } else if count >= 2 {
        10
    } else {
        0
    };

    let severity = if score >= 15 {
        Severity::High
    } else if score >= 10 {
        Severity::Medium
    } else if score > 0 {
        Severity::Low
    } else {
        Severity::None
    };

    let description = if score > 0 {
        format!("{count} transactions with this card BIN in last {WINDOW_MINUTES} minutes")
    } else {
        "Normal card BIN transaction velocity".to_string()
    };

    Ok(SignalResult {
        score,
        signal: Signal::CardBinVelocity.name().to_string(),
        description,
        severity,
    })
}
