//! Query shapes and action-label tables for the insight tiers.

/// Fields of the single-row account summary and of the campaign breakdown.
pub const SUMMARY_FIELDS: &[&str] = &[
    "spend",
    "impressions",
    "reach",
    "clicks",
    "cpc",
    "cpm",
    "ctr",
    "actions",
    "action_values",
];

/// Extra identity fields requested for the campaign breakdown.
pub const CAMPAIGN_IDENTITY_FIELDS: &[&str] = &["campaign_id", "campaign_name"];

/// Reduced field set for the per-day series (no reach/cpm/ctr).
pub const DAILY_FIELDS: &[&str] = &["spend", "impressions", "clicks", "actions", "action_values"];

/// Upstream field carrying the row's calendar date in `YYYY-MM-DD` form.
pub const DATE_FIELD: &str = "date_start";

/// The campaign breakdown is bounded to the first rows in provider order.
pub const CAMPAIGN_LIMIT: u32 = 50;

/// One-day windows for the daily series.
pub const DAILY_TIME_INCREMENT: u32 = 1;

/// Purchase-count labels, highest priority first. The same table indexes
/// `action_values` for purchase revenue.
pub const PURCHASE_LABELS: &[&str] = &[
    "purchase",
    "omni_purchase",
    "offsite_conversion.fb_pixel_purchase",
];

/// Add-to-cart labels, highest priority first.
pub const ADD_TO_CART_LABELS: &[&str] = &[
    "add_to_cart",
    "omni_add_to_cart",
    "offsite_conversion.fb_pixel_add_to_cart",
];

/// Lead-equivalent labels. Messaging-conversation starts count as leads
/// for messaging-objective campaigns, where no pixel lead event exists.
pub const LEAD_LABELS: &[&str] = &[
    "lead",
    "on_facebook_lead",
    "offsite_conversion.fb_pixel_lead",
    "onsite_conversion.messaging_conversation_started_7d",
];
