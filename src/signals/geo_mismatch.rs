//! Geographic mismatch risk

use crate::models::{NewTransaction, Severity, SignalResult};
use crate::signals::Signal;

pub(crate) fn evaluate(transaction: &NewTransaction) -> SignalResult {
    let billing = &transaction.billing_country;
    let shipping = &transaction.shipping_country;
    let ip = &transaction.ip_country;

    let billing_shipping_match = billing == shipping;
    let billing_ip_match = billing == ip;
    let shipping_ip_match = shipping == ip;

    // All-three-distinct outranks everything; a billing/IP mismatch outranks a
    // billing/shipping-only mismatch (IP divergence reads as account compromise).
    let score = if !billing_shipping_match && !billing_ip_match && !shipping_ip_match {
        30
    } else if !billing_ip_match {
        15
    } else if !billing_shipping_match {
        10
    } else {
        0
    };

    let severity = if score >= 20 {
        Severity::High
    } else if score >= 10 {
        Severity::Medium
    } else if score > 0 {
        Severity::Low
    } else {
        Severity::None
    };

    let description = if score > 0 {
        format!("Geographic mismatch detected (billing: {billing}, shipping: {shipping}, IP: {ip})")
    } else {
        "All geographic locations match".to_string()
    };

    SignalResult {
        score,
        signal: Signal::GeoMismatch.name().to_string(),
        description,
        severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::testing::sample_transaction;

    fn with_geo(billing: &str, shipping: &str, ip: &str) -> NewTransaction {
        NewTransaction {
            billing_country: billing.to_string(),
            shipping_country: shipping.to_string(),
            ip_country: ip.to_string(),
            ..sample_transaction()
        }
    }

    #[test]
    fn all_matching_scores_zero() {
        let result = evaluate(&with_geo("US", "US", "US"));
        assert_eq!(result.score, 0);
        assert_eq!(result.severity, Severity::None);
    }

    #[test]
    fn all_distinct_scores_30() {
        let result = evaluate(&with_geo("US", "NG", "RU"));
        assert_eq!(result.score, 30);
        assert_eq!(result.severity, Severity::High);
    }

    #[test]
    fn billing_ip_mismatch_scores_15() {
        let result = evaluate(&with_geo("US", "US", "RU"));
        assert_eq!(result.score, 15);
        assert_eq!(result.severity, Severity::Medium);
    }

    #[test]
    fn shipping_matching_ip_still_takes_billing_ip_branch() {
        // Shipping agrees with IP but billing does not: still 15, not 30.
        let result = evaluate(&with_geo("US", "RU", "RU"));
        assert_eq!(result.score, 15);
    }

    #[test]
    fn shipping_only_mismatch_scores_10() {
        let result = evaluate(&with_geo("US", "SG", "US"));
        assert_eq!(result.score, 10);
        assert_eq!(result.severity, Severity::Medium);
    }

    #[test]
    fn description_names_the_countries() {
        let result = evaluate(&with_geo("US", "NG", "RU"));
        assert!(result.description.contains("billing: US"));
        assert!(result.description.contains("shipping: NG"));
        assert!(result.description.contains("IP: RU"));
    }
}
