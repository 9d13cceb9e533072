//! Product category risk

use crate::models::{NewTransaction, Severity, SignalResult};
use crate::signals::Signal;

const CATEGORY_SCORES: &[(&str, i64)] = &[
    ("Gift Cards", 20),
    ("Electronics", 15),
    ("Fashion", 5),
    ("Home Goods", 0),
];

pub(crate) fn evaluate(transaction: &NewTransaction) -> SignalResult {
    let category = transaction.product_category.as_str();
    let score = CATEGORY_SCORES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, score)| *score)
        .unwrap_or(0);

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
        format!("Product category \"{category}\" is high-risk")
    } else {
        format!("Product category \"{category}\" is low-risk")
    };

    SignalResult {
        score,
        signal: Signal::HighRiskProduct.name().to_string(),
        description,
        severity,
    }
}
