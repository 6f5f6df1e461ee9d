//! Controller module - the root of the dashboard core.
//!
//! The controller owns the credential, the cached baseline and the
//! displayed view state, and composes the tier aggregator with the
//! selection state machine.

mod controller_service;
mod controller_state;
mod provider_factory;

pub use controller_service::InsightsController;
pub use controller_state::ControllerState;
pub use provider_factory::{GraphProviderFactory, ProviderFactory};
