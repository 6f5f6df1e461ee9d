//! Reporting provider implementations.

pub mod graph;
mod traits;

pub use traits::ReportingProvider;
