//! Reporting provider trait definition.
//!
//! This module defines the `ReportingProvider` trait the domain core
//! consumes; transport, authentication and retry mechanics live entirely
//! behind it.

use async_trait::async_trait;

use crate::errors::ReportingError;
use crate::models::{AdAccount, DateRange, ReportRow, TierOptions, TierScope};

/// Trait for ad-platform reporting providers.
///
/// Implement this trait to add support for a new reporting backend. A
/// provider instance is bound to one credential; the core builds a fresh
/// provider whenever the credential changes.
#[async_trait]
pub trait ReportingProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "GRAPH". Used for logging.
    fn id(&self) -> &'static str;

    /// List the ad accounts visible to the bound credential.
    async fn list_ad_accounts(&self) -> Result<Vec<AdAccount>, ReportingError>;

    /// Run one tier query against `scope` for the given date range.
    ///
    /// # Arguments
    ///
    /// * `scope` - The account or campaign node the query runs against
    /// * `fields` - The field names to request
    /// * `range` - Inclusive date range (both ends)
    /// * `options` - Breakdown level, time increment and row limit
    ///
    /// # Returns
    ///
    /// The response rows in upstream order, or a `ReportingError`. An empty
    /// row list is a valid response (no activity in range), not an error.
    async fn fetch_tier(
        &self,
        scope: &TierScope,
        fields: &[&str],
        range: &DateRange,
        options: &TierOptions,
    ) -> Result<Vec<ReportRow>, ReportingError>;
}
