//! Core library for the Adlens advertising-analytics dashboard.
//!
//! This crate is the data-acquisition and view-state core behind the
//! dashboard UI. It owns:
//!
//! - the three-tier insight cascade (account summary, per-campaign
//!   breakdown, per-day series) over an injected reporting provider,
//! - normalization of the open-ended action taxonomy into a fixed metric
//!   set with shared ratio derivation,
//! - toggle-based campaign selection over a stable account baseline,
//! - the controller state the presentation layer reads (loading, error,
//!   displayed snapshot, account list).
//!
//! Rendering, column preferences, exports and the date-picker UI are
//! collaborators on top of this crate; transport and authentication live
//! behind [`adlens_reporting::ReportingProvider`].

pub mod controller;
pub mod errors;
pub mod insights;
pub mod selection;

pub use controller::{GraphProviderFactory, InsightsController, ProviderFactory};
pub use errors::{Error, Result};
pub use insights::{
    AccountInsights, CampaignInsight, DailyPoint, InsightsAggregator, TierSnapshot,
};
pub use selection::{SelectionEffect, SelectionState, SelectionTransition};

// Wire types the presentation layer also needs.
pub use adlens_reporting::{ActionRecord, AdAccount, DateRange};
