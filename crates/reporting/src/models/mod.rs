//! Wire models for the reporting adapter.

mod account;
mod query;
mod row;

pub use account::AdAccount;
pub use query::{BreakdownLevel, DateRange, TierOptions, TierScope};
pub use row::{ActionRecord, FieldValue, ReportRow};
