//! Selection module - the campaign drill-down state machine.

mod selection_model;

pub use selection_model::{SelectionEffect, SelectionState, SelectionTransition};
