//! The three-tier fetch cascade.
//!
//! One [`InsightsAggregator`] call fans out the account summary, the
//! campaign breakdown and the per-day series for a single
//! `(account, date range)` pair, then normalizes every row through the
//! action-metric helpers.
//!
//! The failure policy is asymmetric by tier: the account summary is the
//! root of every metric card, so its failure aborts the whole call; the
//! campaign and daily tiers are supplementary visuals and degrade to an
//! empty list instead.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, warn};

use adlens_reporting::{
    AdAccount, BreakdownLevel, DateRange, ReportRow, ReportingProvider, TierOptions, TierScope,
};

use super::action_metrics::{derive_ratios, lookup_any};
use super::insights_constants::{
    ADD_TO_CART_LABELS, CAMPAIGN_IDENTITY_FIELDS, CAMPAIGN_LIMIT, DAILY_FIELDS,
    DAILY_TIME_INCREMENT, DATE_FIELD, LEAD_LABELS, PURCHASE_LABELS, SUMMARY_FIELDS,
};
use super::insights_model::{AccountInsights, CampaignInsight, DailyPoint, TierSnapshot};
use crate::errors::Result;

pub struct InsightsAggregator {
    provider: Arc<dyn ReportingProvider>,
}

impl InsightsAggregator {
    pub fn new(provider: Arc<dyn ReportingProvider>) -> Self {
        Self { provider }
    }

    /// Runs the full cascade for one account and date range.
    ///
    /// The three queries are issued concurrently and jointly awaited. An
    /// account-tier error aborts the call; campaign-tier and daily-tier
    /// errors degrade that tier to an empty list.
    pub async fn aggregate(&self, account: &AdAccount, range: &DateRange) -> Result<TierSnapshot> {
        let scope = TierScope::Account(account.id.clone());
        debug!(
            "aggregating insights for account {} over {} - {}",
            account.id, range.since, range.until
        );

        let (summary, campaigns, daily) = tokio::join!(
            self.summary(&scope, range),
            self.campaigns(&scope, range),
            self.daily(&scope, range),
        );

        let account_insights = summary?;
        let campaigns = campaigns.unwrap_or_else(|e| {
            warn!("campaign tier degraded to empty: {}", e);
            Vec::new()
        });
        let daily = daily.unwrap_or_else(|e| {
            warn!("daily tier degraded to empty: {}", e);
            Vec::new()
        });

        Ok(TierSnapshot {
            account: account_insights,
            campaigns,
            daily,
        })
    }

    /// Single aggregated summary row for a scope.
    ///
    /// Zero rows (no activity in range) yield the canonical empty
    /// snapshot, never an absent value.
    pub async fn summary(&self, scope: &TierScope, range: &DateRange) -> Result<AccountInsights> {
        let rows = self
            .provider
            .fetch_tier(scope, SUMMARY_FIELDS, range, &TierOptions::default())
            .await?;
        Ok(rows
            .first()
            .map(summary_from_row)
            .unwrap_or_default())
    }

    /// Campaign breakdown for an account scope, bounded to the first
    /// [`CAMPAIGN_LIMIT`] campaigns in provider-default order.
    pub async fn campaigns(
        &self,
        scope: &TierScope,
        range: &DateRange,
    ) -> Result<Vec<CampaignInsight>> {
        let fields: Vec<&str> = SUMMARY_FIELDS
            .iter()
            .chain(CAMPAIGN_IDENTITY_FIELDS.iter())
            .copied()
            .collect();
        let options = TierOptions {
            level: Some(BreakdownLevel::Campaign),
            limit: Some(CAMPAIGN_LIMIT),
            ..TierOptions::default()
        };
        let rows = self.provider.fetch_tier(scope, &fields, range, &options).await?;

        let mut seen = HashSet::new();
        Ok(rows
            .iter()
            .filter_map(campaign_from_row)
            .filter(|campaign| seen.insert(campaign.campaign_id.clone()))
            .collect())
    }

    /// Per-day series for a scope, one point per calendar day, upstream
    /// order preserved.
    pub async fn daily(&self, scope: &TierScope, range: &DateRange) -> Result<Vec<DailyPoint>> {
        let options = TierOptions {
            time_increment: Some(DAILY_TIME_INCREMENT),
            ..TierOptions::default()
        };
        let rows = self
            .provider
            .fetch_tier(scope, DAILY_FIELDS, range, &options)
            .await?;
        Ok(rows.iter().map(daily_from_row).collect())
    }
}

fn summary_from_row(row: &ReportRow) -> AccountInsights {
    let actions = row.actions("actions");
    let action_values = row.actions("action_values");

    let spend = row.number("spend");
    let purchases = lookup_any(actions, PURCHASE_LABELS);
    let purchase_value = lookup_any(action_values, PURCHASE_LABELS);
    let ratios = derive_ratios(spend, purchases, purchase_value);

    AccountInsights {
        spend,
        impressions: row.count("impressions"),
        reach: row.count("reach"),
        clicks: row.count("clicks"),
        cpc: row.number("cpc"),
        cpm: row.number("cpm"),
        ctr: row.number("ctr"),
        purchases,
        purchase_value,
        roas: ratios.roas,
        cost_per_purchase: ratios.cost_per_purchase,
        add_to_cart: lookup_any(actions, ADD_TO_CART_LABELS),
        leads: lookup_any(actions, LEAD_LABELS),
    }
}

fn campaign_from_row(row: &ReportRow) -> Option<CampaignInsight> {
    let campaign_id = match row.text("campaign_id") {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            warn!("dropping campaign row without campaign_id");
            return None;
        }
    };

    let summary = summary_from_row(row);
    Some(CampaignInsight {
        campaign_id,
        campaign_name: row.text("campaign_name").unwrap_or_default().to_string(),
        spend: summary.spend,
        impressions: summary.impressions,
        reach: summary.reach,
        clicks: summary.clicks,
        cpc: summary.cpc,
        cpm: summary.cpm,
        ctr: summary.ctr,
        purchases: summary.purchases,
        purchase_value: summary.purchase_value,
        roas: summary.roas,
        cost_per_purchase: summary.cost_per_purchase,
        add_to_cart: summary.add_to_cart,
        leads: summary.leads,
        actions: row.actions("actions").unwrap_or_default().to_vec(),
    })
}

fn daily_from_row(row: &ReportRow) -> DailyPoint {
    let actions = row.actions("actions");
    let action_values = row.actions("action_values");

    DailyPoint {
        date: strip_year(row.text(DATE_FIELD).unwrap_or_default()),
        spend: row.number("spend"),
        impressions: row.count("impressions"),
        clicks: row.count("clicks"),
        purchases: lookup_any(actions, PURCHASE_LABELS),
        revenue: lookup_any(action_values, PURCHASE_LABELS),
        leads: lookup_any(actions, LEAD_LABELS),
    }
}

/// `"2024-03-05"` becomes `"03-05"`; values without a year pass through.
fn strip_year(date: &str) -> String {
    match date.split_once('-') {
        Some((year, rest)) if year.len() == 4 => rest.to_string(),
        _ => date.to_string(),
    }
}
