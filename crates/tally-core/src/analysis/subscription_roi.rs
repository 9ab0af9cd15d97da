//! Subscription value for money
//!
//! Usage is not tracked, so each subscription gets an assumed number of
//! monthly hours based on the kind of service its merchant name suggests.

use super::types::{
    ServiceType, SubscriptionRoiReport, SubscriptionValue, Suggestion, ValueRating,
};
use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use crate::models::SubscriptionCharge;

/// Cost per hour above which a subscription is flagged for review
pub const REVIEW_COST_PER_HOUR: f64 = 10.0;

/// Merchant name fragments per service type, checked in order
const SERVICE_KEYWORDS: &[(ServiceType, &[&str])] = &[
    (ServiceType::Streaming, &["netflix", "spotify", "disney", "streaming"]),
    (ServiceType::Gym, &["gym", "fitness", "yoga"]),
    (ServiceType::Software, &["adobe", "microsoft", "software"]),
    (ServiceType::Cloud, &["cloud", "storage", "backup"]),
];

/// Infer the service type from a merchant name (case-insensitive substring match)
pub fn classify_service(merchant: &str) -> ServiceType {
    let name = merchant.to_lowercase();
    SERVICE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
        .map(|(service, _)| *service)
        .unwrap_or(ServiceType::Other)
}

/// Rate a cost per hour against the configured thresholds
pub fn rate_value(cost_per_hour: f64, config: &AnalysisConfig) -> ValueRating {
    if cost_per_hour < config.high_value_below {
        ValueRating::High
    } else if cost_per_hour < config.medium_value_below {
        ValueRating::Medium
    } else {
        ValueRating::Low
    }
}

/// Estimate cost per hour for each subscription and suggest cancellations
/// or consolidation.
pub fn subscription_roi(
    subscriptions: &[SubscriptionCharge],
    config: &AnalysisConfig,
) -> Result<SubscriptionRoiReport> {
    if subscriptions.is_empty() {
        return Err(Error::NoData("No subscription data found".into()));
    }

    let values: Vec<SubscriptionValue> = subscriptions
        .iter()
        .map(|sub| {
            let monthly_cost = sub.avg_amount.abs();
            let service_type = classify_service(&sub.merchant);
            let hours = config.usage_hours.for_service(service_type);
            let cost_per_hour = monthly_cost / hours;
            SubscriptionValue {
                merchant: sub.merchant.clone(),
                monthly_cost,
                service_type,
                estimated_usage_hours: hours,
                cost_per_hour,
                annual_cost: monthly_cost * 12.0,
                value_rating: rate_value(cost_per_hour, config),
            }
        })
        .collect();

    let total_monthly: f64 = values.iter().map(|v| v.monthly_cost).sum();

    Ok(SubscriptionRoiReport {
        total_monthly,
        total_annual: total_monthly * 12.0,
        subscription_count: values.len(),
        suggestions: suggestions(&values),
        subscriptions: values,
    })
}

fn suggestions(values: &[SubscriptionValue]) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = values
        .iter()
        .filter_map(|v| {
            if v.value_rating == ValueRating::Low {
                Some(Suggestion::Cancel {
                    merchant: v.merchant.clone(),
                    cost_per_hour: v.cost_per_hour,
                })
            } else if v.cost_per_hour > REVIEW_COST_PER_HOUR {
                Some(Suggestion::ReviewUsage {
                    merchant: v.merchant.clone(),
                    cost_per_hour: v.cost_per_hour,
                })
            } else {
                None
            }
        })
        .collect();

    let streaming: Vec<String> = values
        .iter()
        .filter(|v| v.service_type == ServiceType::Streaming)
        .map(|v| v.merchant.clone())
        .collect();
    if streaming.len() > 1 {
        suggestions.push(Suggestion::ConsolidateStreaming {
            merchants: streaming,
        });
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn charge(merchant: &str, avg_amount: f64) -> SubscriptionCharge {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        SubscriptionCharge {
            merchant: merchant.to_string(),
            avg_amount,
            charge_count: 3,
            first_seen: date,
            last_seen: date,
        }
    }

    #[test]
    fn test_classify_service() {
        assert_eq!(classify_service("Netflix"), ServiceType::Streaming);
        assert_eq!(classify_service("Disney Plus"), ServiceType::Streaming);
        assert_eq!(classify_service("Planet Fitness"), ServiceType::Gym);
        assert_eq!(classify_service("Adobe Creative Cloud"), ServiceType::Software);
        assert_eq!(classify_service("iCloud Storage"), ServiceType::Cloud);
        assert_eq!(classify_service("Magazine Sub"), ServiceType::Other);
    }

    #[test]
    fn test_classify_ignores_case() {
        assert_eq!(
            classify_service("NETFLIX Premium"),
            classify_service("netflix premium")
        );
        assert_eq!(classify_service("NETFLIX Premium"), ServiceType::Streaming);
        assert_eq!(classify_service("YOGA STUDIO"), ServiceType::Gym);
    }

    #[test]
    fn test_value_ratings() {
        let config = AnalysisConfig::default();
        let report = subscription_roi(
            &[
                charge("Netflix", 15.99),       // 0.80/hour
                charge("Gym Membership", 29.99), // 3.75/hour
                charge("Magazine Sub", 60.0),    // 6.00/hour
            ],
            &config,
        )
        .unwrap();

        let rating = |m: &str| {
            report
                .subscriptions
                .iter()
                .find(|s| s.merchant == m)
                .unwrap()
                .value_rating
        };
        assert_eq!(rating("Netflix"), ValueRating::High);
        assert_eq!(rating("Gym Membership"), ValueRating::Medium);
        assert_eq!(rating("Magazine Sub"), ValueRating::Low);

        assert_eq!(report.subscription_count, 3);
        assert!((report.total_monthly - 105.98).abs() < 1e-9);
        assert!((report.total_annual - 105.98 * 12.0).abs() < 1e-9);

        assert_eq!(
            report.suggestions,
            vec![Suggestion::Cancel {
                merchant: "Magazine Sub".into(),
                cost_per_hour: 6.0,
            }]
        );
    }

    #[test]
    fn test_rating_boundaries() {
        let config = AnalysisConfig::default();
        assert_eq!(rate_value(1.99, &config), ValueRating::High);
        assert_eq!(rate_value(2.0, &config), ValueRating::Medium);
        assert_eq!(rate_value(4.99, &config), ValueRating::Medium);
        assert_eq!(rate_value(5.0, &config), ValueRating::Low);
    }

    #[test]
    fn test_consolidate_streaming() {
        let config = AnalysisConfig::default();
        let report = subscription_roi(
            &[
                charge("Disney Plus", 7.99),
                charge("iCloud Storage", 2.99),
                charge("Spotify", 9.99),
            ],
            &config,
        )
        .unwrap();

        assert_eq!(
            report.suggestions,
            vec![Suggestion::ConsolidateStreaming {
                merchants: vec!["Disney Plus".into(), "Spotify".into()],
            }]
        );
        let cloud = &report.subscriptions[1];
        assert_eq!(cloud.service_type, ServiceType::Cloud);
        assert_eq!(cloud.estimated_usage_hours, 720.0);
    }

    #[test]
    fn test_review_usage_with_raised_thresholds() {
        let config = AnalysisConfig {
            high_value_below: 12.0,
            medium_value_below: 50.0,
            ..AnalysisConfig::default()
        };
        // 120 / 8 hours = 15/hour: medium under these thresholds, still above review
        let report = subscription_roi(&[charge("Boutique Gym", 120.0)], &config).unwrap();
        assert_eq!(report.subscriptions[0].value_rating, ValueRating::Medium);
        assert_eq!(
            report.suggestions,
            vec![Suggestion::ReviewUsage {
                merchant: "Boutique Gym".into(),
                cost_per_hour: 15.0,
            }]
        );
    }

    #[test]
    fn test_negative_amounts_use_magnitude() {
        let config = AnalysisConfig::default();
        let report = subscription_roi(&[charge("Netflix", -20.0)], &config).unwrap();
        assert_eq!(report.subscriptions[0].monthly_cost, 20.0);
        assert_eq!(report.subscriptions[0].cost_per_hour, 1.0);
        assert_eq!(report.subscriptions[0].annual_cost, 240.0);
    }

    #[test]
    fn test_no_subscriptions() {
        let err = subscription_roi(&[], &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, Error::NoData(ref m) if m == "No subscription data found"));
    }
}
