use adlens_reporting::{AdAccount, DateRange};

use crate::insights::{AccountInsights, CampaignInsight, DailyPoint, TierSnapshot};
use crate::selection::SelectionState;

/// The mutable state owned by [`InsightsController`](super::InsightsController).
///
/// The baseline and the displayed slot are deliberately separate fields:
/// drill-down replaces the displayed slot only, and restoration is a plain
/// value copy from the baseline, never a partial merge.
#[derive(Debug, Clone, Default)]
pub struct ControllerState {
    pub(crate) credential: Option<String>,
    pub(crate) accounts: Vec<AdAccount>,
    pub(crate) selected_account: Option<AdAccount>,
    pub(crate) date_range: Option<DateRange>,
    /// Account-wide snapshot from the last successful load. Immutable
    /// until the next successful load replaces it wholesale.
    pub(crate) baseline: Option<TierSnapshot>,
    pub(crate) displayed_insights: AccountInsights,
    pub(crate) displayed_daily: Vec<DailyPoint>,
    pub(crate) campaigns: Vec<CampaignInsight>,
    pub(crate) selection: SelectionState,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
}

impl ControllerState {
    /// Installs a freshly loaded baseline, replacing the previous one
    /// wholesale and resetting the selection.
    pub(crate) fn install_baseline(
        &mut self,
        account: AdAccount,
        range: DateRange,
        snapshot: TierSnapshot,
    ) {
        self.displayed_insights = snapshot.account.clone();
        self.displayed_daily = snapshot.daily.clone();
        self.campaigns = snapshot.campaigns.clone();
        self.baseline = Some(snapshot);
        self.selected_account = Some(account);
        self.date_range = Some(range);
        self.selection = SelectionState::Unselected;
        self.error = None;
    }

    /// Copies the cached baseline back into the displayed slot.
    /// No-op on the baseline itself.
    pub(crate) fn restore_baseline(&mut self) {
        if let Some(baseline) = &self.baseline {
            self.displayed_insights = baseline.account.clone();
            self.displayed_daily = baseline.daily.clone();
            self.campaigns = baseline.campaigns.clone();
        }
        self.selection = SelectionState::Unselected;
        self.error = None;
    }
}
