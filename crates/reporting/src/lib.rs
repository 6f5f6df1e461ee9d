//! Adlens Reporting Crate
//!
//! This crate provides the adapter layer between the dashboard core and the
//! remote ad-platform reporting API.
//!
//! # Overview
//!
//! The reporting crate supports:
//! - Tiered insight queries: account summary, per-campaign breakdown,
//!   per-day time series
//! - Ad account discovery for a connected credential
//! - A provider-agnostic [`ReportingProvider`] trait plus one concrete
//!   Graph-API implementation
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   Domain Core    |  (aggregation, selection, view state)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | ReportingProvider|  (trait: fetch_tier / list_ad_accounts)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  GraphInsights   |  (HTTP, access token, error envelope)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    ReportRow     |  (field -> text | action records)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`ReportRow`] - One row of a tier response, lenient field access
//! - [`ActionRecord`] - A `(type label, numeric-string value)` conversion count
//! - [`TierScope`] - The node a tier query runs against (account or campaign)
//! - [`TierOptions`] - Breakdown level, time increment, row limit
//! - [`DateRange`] - Inclusive calendar date range
//! - [`AdAccount`] - A discoverable ad account

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::ReportingError;
pub use models::{
    ActionRecord, AdAccount, BreakdownLevel, DateRange, FieldValue, ReportRow, TierOptions,
    TierScope,
};
pub use provider::graph::GraphInsightsProvider;
pub use provider::ReportingProvider;
