//! Account age risk

use crate::models::{NewTransaction, Severity, SignalResult};
use crate::signals::Signal;

pub(crate) fn evaluate(transaction: &NewTransaction) -> SignalResult {
    let days = transaction.account_age_days;

    let score = if days == 0 {
        20
    } else if days <= 7 {
        15
    } else if days <= 30 {
        10
    } else if days <= 90 {
        5
    } else {
        0
    };

    let severity = if score >= 15 {
        Severity::High
    } else if score >= 5 {
        Severity::Medium
    } else if score > 0 {
        Severity::Low
    } else {
        Severity::None
    };

    let description = if score > 0 {
        format!("Account is only {days} days old")
    } else {
        format!("Account is {days} days old (established)")
    };

    SignalResult {
        score,
        signal: Signal::AccountAge.name().to_string(),
        description,
        severity,
    }
}
