//! Campaign selection state machine.
//!
//! Drill-down is a transient lens over a stable baseline: selecting a
//! campaign swaps the displayed snapshot, re-selecting the same campaign
//! toggles back to the baseline for free, and `clear` always recovers the
//! exact pre-drill-down view.
//!
//! Transitions are pure values; the controller executes the returned
//! effect (fetch vs. restore) and is the only writer of the actual view
//! state. The machine reads the baseline but never mutates it.

use serde::{Deserialize, Serialize};

/// Whether the displayed snapshot is the account baseline or a single
/// selected campaign. At most one campaign is selected at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "state", content = "campaignId")]
pub enum SelectionState {
    #[default]
    Unselected,
    Selected(String),
}

/// The side effect the controller must perform to realize a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEffect {
    /// Fetch campaign-scoped insights and daily data, then display them.
    FetchCampaign(String),
    /// Copy the cached baseline back into the displayed slot. No network.
    RestoreBaseline,
}

/// A computed transition: the next state plus the effect realizing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTransition {
    pub next: SelectionState,
    pub effect: SelectionEffect,
}

impl SelectionState {
    /// Toggle semantics: selecting the already-selected campaign
    /// deselects it; anything else selects the given campaign.
    pub fn toggle(&self, campaign_id: &str) -> SelectionTransition {
        match self {
            SelectionState::Selected(current) if current == campaign_id => SelectionTransition {
                next: SelectionState::Unselected,
                effect: SelectionEffect::RestoreBaseline,
            },
            _ => SelectionTransition {
                next: SelectionState::Selected(campaign_id.to_string()),
                effect: SelectionEffect::FetchCampaign(campaign_id.to_string()),
            },
        }
    }

    /// Unconditional transition back to the baseline. No network.
    pub fn clear(&self) -> SelectionTransition {
        SelectionTransition {
            next: SelectionState::Unselected,
            effect: SelectionEffect::RestoreBaseline,
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        match self {
            SelectionState::Unselected => None,
            SelectionState::Selected(id) => Some(id.as_str()),
        }
    }
}
