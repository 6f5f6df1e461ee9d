//! Tests for the tier cascade and its asymmetric failure policy.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use adlens_reporting::{
    AdAccount, DateRange, ReportRow, ReportingError, ReportingProvider, TierOptions, TierScope,
};

use crate::errors::Error;
use crate::insights::{AccountInsights, InsightsAggregator};

// =========================================================================
// Mock ReportingProvider
// =========================================================================

#[derive(Clone)]
enum TierReply {
    Rows(Vec<ReportRow>),
    Fail(String),
}

impl Default for TierReply {
    fn default() -> Self {
        TierReply::Rows(Vec::new())
    }
}

impl TierReply {
    fn rows(values: serde_json::Value) -> Self {
        TierReply::Rows(serde_json::from_value(values).unwrap())
    }

    fn resolve(&self) -> Result<Vec<ReportRow>, ReportingError> {
        match self {
            TierReply::Rows(rows) => Ok(rows.clone()),
            TierReply::Fail(message) => Err(ReportingError::Provider {
                message: message.clone(),
            }),
        }
    }
}

#[derive(Clone, Default)]
struct MockReportingProvider {
    summary: Arc<Mutex<TierReply>>,
    campaigns: Arc<Mutex<TierReply>>,
    daily: Arc<Mutex<TierReply>>,
    campaign_summary: Arc<Mutex<TierReply>>,
    campaign_daily: Arc<Mutex<TierReply>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockReportingProvider {
    fn set_summary(&self, reply: TierReply) {
        *self.summary.lock().unwrap() = reply;
    }

    fn set_campaigns(&self, reply: TierReply) {
        *self.campaigns.lock().unwrap() = reply;
    }

    fn set_daily(&self, reply: TierReply) {
        *self.daily.lock().unwrap() = reply;
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportingProvider for MockReportingProvider {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn list_ad_accounts(&self) -> Result<Vec<AdAccount>, ReportingError> {
        Ok(Vec::new())
    }

    async fn fetch_tier(
        &self,
        scope: &TierScope,
        _fields: &[&str],
        _range: &DateRange,
        options: &TierOptions,
    ) -> Result<Vec<ReportRow>, ReportingError> {
        let (tag, slot) = match scope {
            TierScope::Account(_) if options.level.is_some() => ("campaigns", &self.campaigns),
            TierScope::Account(_) if options.time_increment.is_some() => ("daily", &self.daily),
            TierScope::Account(_) => ("summary", &self.summary),
            TierScope::Campaign(_) if options.time_increment.is_some() => {
                ("campaign_daily", &self.campaign_daily)
            }
            TierScope::Campaign(_) => ("campaign_summary", &self.campaign_summary),
        };
        self.calls.lock().unwrap().push(tag.to_string());
        slot.lock().unwrap().resolve()
    }
}

// =========================================================================
// Fixtures
// =========================================================================

fn account() -> AdAccount {
    AdAccount {
        id: "act_42".to_string(),
        account_id: "42".to_string(),
        name: "Main".to_string(),
        currency: "USD".to_string(),
    }
}

fn range() -> DateRange {
    DateRange::new(
        chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    )
}

fn summary_reply() -> TierReply {
    TierReply::rows(json!([{
        "spend": "200",
        "impressions": "10000",
        "reach": "8000",
        "clicks": "400",
        "cpc": "0.5",
        "cpm": "20",
        "ctr": "4",
        "actions": [
            { "action_type": "purchase", "value": "8" },
            { "action_type": "add_to_cart", "value": "30" },
            { "action_type": "lead", "value": "5" }
        ],
        "action_values": [
            { "action_type": "purchase", "value": "500" }
        ]
    }]))
}

fn aggregator(provider: &MockReportingProvider) -> InsightsAggregator {
    InsightsAggregator::new(Arc::new(provider.clone()))
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn aggregate_normalizes_the_account_summary() {
    let provider = MockReportingProvider::default();
    provider.set_summary(summary_reply());

    let snapshot = aggregator(&provider)
        .aggregate(&account(), &range())
        .await
        .unwrap();

    let insights = snapshot.account;
    assert_eq!(insights.spend, 200.0);
    assert_eq!(insights.impressions, 10000);
    assert_eq!(insights.reach, 8000);
    assert_eq!(insights.clicks, 400);
    assert_eq!(insights.purchases, 8.0);
    assert_eq!(insights.purchase_value, 500.0);
    assert!((insights.roas - 2.5).abs() < 1e-9);
    assert!((insights.cost_per_purchase - 25.0).abs() < 1e-9);
    assert_eq!(insights.add_to_cart, 30.0);
    assert_eq!(insights.leads, 5.0);
}

#[tokio::test]
async fn aggregate_issues_all_three_tiers() {
    let provider = MockReportingProvider::default();
    provider.set_summary(summary_reply());

    aggregator(&provider)
        .aggregate(&account(), &range())
        .await
        .unwrap();

    let mut calls = provider.calls();
    calls.sort();
    assert_eq!(calls, vec!["campaigns", "daily", "summary"]);
}

#[tokio::test]
async fn zero_summary_rows_yield_the_canonical_empty_snapshot() {
    let provider = MockReportingProvider::default();

    let snapshot = aggregator(&provider)
        .aggregate(&account(), &range())
        .await
        .unwrap();

    assert_eq!(snapshot.account, AccountInsights::default());
    assert_eq!(snapshot.account.roas, 0.0);
    assert!(snapshot.campaigns.is_empty());
    assert!(snapshot.daily.is_empty());
}

#[tokio::test]
async fn account_tier_failure_aborts_with_the_provider_message() {
    let provider = MockReportingProvider::default();
    provider.set_summary(TierReply::Fail("Invalid OAuth access token.".to_string()));

    let result = aggregator(&provider).aggregate(&account(), &range()).await;

    match result {
        Err(Error::Reporting(e)) => {
            assert_eq!(e.to_string(), "Invalid OAuth access token.")
        }
        other => panic!("expected reporting error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn campaign_tier_failure_degrades_to_empty() {
    let provider = MockReportingProvider::default();
    provider.set_summary(summary_reply());
    provider.set_campaigns(TierReply::Fail("breakdown unavailable".to_string()));
    provider.set_daily(TierReply::rows(json!([
        { "date_start": "2024-03-01", "spend": "10" }
    ])));

    let snapshot = aggregator(&provider)
        .aggregate(&account(), &range())
        .await
        .unwrap();

    assert!(snapshot.campaigns.is_empty());
    assert_eq!(snapshot.daily.len(), 1);
    assert_ne!(snapshot.account, AccountInsights::default());
}

#[tokio::test]
async fn daily_tier_failure_degrades_to_empty() {
    let provider = MockReportingProvider::default();
    provider.set_summary(summary_reply());
    provider.set_daily(TierReply::Fail("series unavailable".to_string()));

    let snapshot = aggregator(&provider)
        .aggregate(&account(), &range())
        .await
        .unwrap();

    assert!(snapshot.daily.is_empty());
    assert_ne!(snapshot.account, AccountInsights::default());
}

#[tokio::test]
async fn campaign_rows_are_normalized_with_the_shared_ratios() {
    let provider = MockReportingProvider::default();
    provider.set_summary(summary_reply());
    provider.set_campaigns(TierReply::rows(json!([{
        "campaign_id": "c1",
        "campaign_name": "Spring",
        "spend": "50",
        "impressions": "1000",
        "clicks": "20",
        "actions": [ { "action_type": "omni_purchase", "value": "2" } ],
        "action_values": [ { "action_type": "omni_purchase", "value": "150" } ]
    }])));

    let snapshot = aggregator(&provider)
        .aggregate(&account(), &range())
        .await
        .unwrap();

    assert_eq!(snapshot.campaigns.len(), 1);
    let campaign = &snapshot.campaigns[0];
    assert_eq!(campaign.campaign_id, "c1");
    assert_eq!(campaign.campaign_name, "Spring");
    assert!((campaign.roas - 3.0).abs() < 1e-9);
    assert!((campaign.cost_per_purchase - 25.0).abs() < 1e-9);
    assert_eq!(campaign.actions.len(), 1);
}

#[tokio::test]
async fn duplicate_campaign_ids_keep_the_first_row() {
    let provider = MockReportingProvider::default();
    provider.set_summary(summary_reply());
    provider.set_campaigns(TierReply::rows(json!([
        { "campaign_id": "c1", "campaign_name": "first", "spend": "1" },
        { "campaign_id": "c1", "campaign_name": "second", "spend": "2" },
        { "campaign_id": "c2", "campaign_name": "other", "spend": "3" }
    ])));

    let snapshot = aggregator(&provider)
        .aggregate(&account(), &range())
        .await
        .unwrap();

    assert_eq!(snapshot.campaigns.len(), 2);
    assert_eq!(snapshot.campaigns[0].campaign_name, "first");
    assert_eq!(snapshot.campaigns[1].campaign_id, "c2");
}

#[tokio::test]
async fn campaign_rows_without_identity_are_dropped() {
    let provider = MockReportingProvider::default();
    provider.set_summary(summary_reply());
    provider.set_campaigns(TierReply::rows(json!([
        { "campaign_name": "nameless", "spend": "1" },
        { "campaign_id": "c1", "campaign_name": "kept", "spend": "2" }
    ])));

    let snapshot = aggregator(&provider)
        .aggregate(&account(), &range())
        .await
        .unwrap();

    assert_eq!(snapshot.campaigns.len(), 1);
    assert_eq!(snapshot.campaigns[0].campaign_id, "c1");
}

#[tokio::test]
async fn daily_points_strip_the_year_and_keep_upstream_order() {
    let provider = MockReportingProvider::default();
    provider.set_summary(summary_reply());
    // Deliberately not sorted: the upstream order is authoritative.
    provider.set_daily(TierReply::rows(json!([
        {
            "date_start": "2024-03-02",
            "spend": "20",
            "impressions": "500",
            "clicks": "9",
            "actions": [ { "action_type": "purchase", "value": "1" } ],
            "action_values": [ { "action_type": "purchase", "value": "40" } ]
        },
        { "date_start": "2024-03-01", "spend": "10" }
    ])));

    let snapshot = aggregator(&provider)
        .aggregate(&account(), &range())
        .await
        .unwrap();

    assert_eq!(snapshot.daily.len(), 2);
    assert_eq!(snapshot.daily[0].date, "03-02");
    assert_eq!(snapshot.daily[1].date, "03-01");
    assert_eq!(snapshot.daily[0].spend, 20.0);
    assert_eq!(snapshot.daily[0].purchases, 1.0);
    assert_eq!(snapshot.daily[0].revenue, 40.0);
    assert_eq!(snapshot.daily[1].revenue, 0.0);
}
