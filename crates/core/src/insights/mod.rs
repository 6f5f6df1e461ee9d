//! Insights module - metric normalization, models and the tier aggregator.

pub mod action_metrics;
mod insights_aggregator;
#[cfg(test)]
mod insights_aggregator_tests;
pub mod insights_constants;
mod insights_model;

pub use action_metrics::{derive_ratios, lookup, lookup_any, Ratios};
pub use insights_aggregator::InsightsAggregator;
pub use insights_model::{AccountInsights, CampaignInsight, DailyPoint, TierSnapshot};
