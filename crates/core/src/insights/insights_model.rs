use serde::{Deserialize, Serialize};

use adlens_reporting::ActionRecord;

/// Normalized numeric snapshot for one scope (account or campaign lens).
///
/// `Default` is the canonical empty snapshot - every field zero, every
/// ratio zero - produced whenever a summary query returns no rows, so
/// consumers never see an absent value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInsights {
    pub spend: f64,
    pub impressions: u64,
    pub reach: u64,
    pub clicks: u64,
    pub cpc: f64,
    pub cpm: f64,
    pub ctr: f64,
    pub purchases: f64,
    pub purchase_value: f64,
    pub roas: f64,
    pub cost_per_purchase: f64,
    pub add_to_cart: f64,
    pub leads: f64,
}

/// One row of the campaign breakdown: the normalized metric set plus the
/// embedded raw action records. `campaign_id` is the identity key, unique
/// within one aggregator result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInsight {
    pub campaign_id: String,
    pub campaign_name: String,
    pub spend: f64,
    pub impressions: u64,
    pub reach: u64,
    pub clicks: u64,
    pub cpc: f64,
    pub cpm: f64,
    pub ctr: f64,
    pub purchases: f64,
    pub purchase_value: f64,
    pub roas: f64,
    pub cost_per_purchase: f64,
    pub add_to_cart: f64,
    pub leads: f64,
    pub actions: Vec<ActionRecord>,
}

/// One point of the per-day series.
///
/// `date` is the upstream `YYYY-MM-DD` value with the year stripped
/// (`MM-DD`), kept in upstream chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    pub date: String,
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub purchases: f64,
    pub revenue: f64,
    pub leads: f64,
}

/// The result of one full account-level cascade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierSnapshot {
    pub account: AccountInsights,
    pub campaigns: Vec<CampaignInsight>,
    pub daily: Vec<DailyPoint>,
}
