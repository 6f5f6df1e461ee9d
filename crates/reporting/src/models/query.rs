use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ReportingError;

/// An inclusive calendar date range for a tier query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub since: NaiveDate,
    pub until: NaiveDate,
}

impl DateRange {
    pub fn new(since: NaiveDate, until: NaiveDate) -> Self {
        Self { since, until }
    }

    /// Checks that the range is well formed (since on or before until).
    pub fn validate(&self) -> Result<(), ReportingError> {
        if self.since > self.until {
            return Err(ReportingError::InvalidDateRange(format!(
                "{} is after {}",
                self.since, self.until
            )));
        }
        Ok(())
    }
}

/// The node a tier query runs against.
///
/// Account scope covers the whole-account summary, the campaign breakdown
/// and the account-wide daily series; campaign scope serves drill-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierScope {
    Account(String),
    Campaign(String),
}

impl TierScope {
    /// The platform node id the query URL is built from.
    pub fn node_id(&self) -> &str {
        match self {
            TierScope::Account(id) => id,
            TierScope::Campaign(id) => id,
        }
    }
}

/// Breakdown level for a tier query. Absent means the scope's own level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakdownLevel {
    Campaign,
}

impl BreakdownLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakdownLevel::Campaign => "campaign",
        }
    }
}

/// Query shape knobs for one tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierOptions {
    /// Break the result down to this level instead of the scope node.
    pub level: Option<BreakdownLevel>,
    /// Split the range into windows of this many days (1 = daily series).
    pub time_increment: Option<u32>,
    /// Cap on the number of returned rows.
    pub limit: Option<u32>,
}
