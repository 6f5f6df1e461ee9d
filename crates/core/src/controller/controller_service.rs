//! The insights aggregation controller.
//!
//! All operations are async and cooperative; no cancellation exists.
//! Overlapping calls both run to completion and the last state update
//! wins - callers serialize on the `loading` flag. Locks are never held
//! across an await point.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, error};

use adlens_reporting::{AdAccount, DateRange, ReportingProvider, TierScope};

use super::controller_state::ControllerState;
use super::provider_factory::ProviderFactory;
use crate::errors::{Error, Result};
use crate::insights::{AccountInsights, CampaignInsight, DailyPoint, InsightsAggregator};
use crate::selection::SelectionEffect;

pub struct InsightsController {
    factory: Arc<dyn ProviderFactory>,
    provider: RwLock<Option<Arc<dyn ReportingProvider>>>,
    state: RwLock<ControllerState>,
}

impl InsightsController {
    /// Creates a controller, optionally seeded with a persisted credential.
    ///
    /// A supplied credential makes the controller usable without
    /// re-prompting, but account discovery still requires an explicit
    /// [`connect`](Self::connect) call.
    pub fn new(factory: Arc<dyn ProviderFactory>, saved_credential: Option<String>) -> Self {
        let credential = saved_credential.filter(|c| !c.is_empty());
        let provider = credential.as_deref().map(|c| factory.create(c));
        Self {
            factory,
            provider: RwLock::new(provider),
            state: RwLock::new(ControllerState {
                credential,
                ..ControllerState::default()
            }),
        }
    }

    /// Stores the credential and runs account discovery.
    ///
    /// A missing credential (none supplied, none stored) short-circuits
    /// with a credential error before any network call. Discovery failure
    /// surfaces the error and leaves the prior account list untouched.
    pub async fn connect(&self, credential: Option<String>) -> Result<Vec<AdAccount>> {
        let supplied = credential.filter(|c| !c.is_empty());
        let stored = self.state_read()?.credential.clone();
        let credential = match supplied.or(stored) {
            Some(c) => c,
            None => {
                let message = "No access credential provided".to_string();
                self.state_write()?.error = Some(message.clone());
                return Err(Error::Credential(message));
            }
        };

        let provider = self.factory.create(&credential);
        *self.provider_write()? = Some(provider.clone());
        {
            let mut state = self.state_write()?;
            state.credential = Some(credential);
            state.loading = true;
            state.error = None;
        }

        match provider.list_ad_accounts().await {
            Ok(accounts) => {
                debug!("discovered {} ad accounts", accounts.len());
                let mut state = self.state_write()?;
                state.accounts = accounts.clone();
                state.loading = false;
                Ok(accounts)
            }
            Err(e) => {
                error!("account discovery failed: {}", e);
                let mut state = self.state_write()?;
                state.loading = false;
                state.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Runs the tier cascade and replaces the baseline on success.
    ///
    /// On failure the previously displayed state is left untouched and
    /// the error is surfaced; `loading` is cleared on every path.
    pub async fn load_account(&self, account: &AdAccount, range: DateRange) -> Result<()> {
        range
            .validate()
            .map_err(|e| Error::Validation(e.to_string()))?;
        let provider = self.require_provider()?;

        {
            let mut state = self.state_write()?;
            state.loading = true;
            state.error = None;
        }

        let aggregator = InsightsAggregator::new(provider);
        match aggregator.aggregate(account, &range).await {
            Ok(snapshot) => {
                let mut state = self.state_write()?;
                state.install_baseline(account.clone(), range, snapshot);
                state.loading = false;
                Ok(())
            }
            Err(e) => {
                error!("account load failed for {}: {}", account.id, e);
                let mut state = self.state_write()?;
                state.loading = false;
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Toggles the campaign selection.
    ///
    /// Selecting an unselected campaign fetches its summary and daily
    /// series (concurrently, jointly awaited) and swaps the displayed
    /// slot; re-selecting the current campaign restores the baseline with
    /// no network call. Before any successful load this is a strict
    /// no-op.
    pub async fn select_campaign(&self, campaign_id: &str) -> Result<()> {
        let transition = {
            let state = self.state_read()?;
            if state.baseline.is_none() {
                return Ok(());
            }
            state.selection.toggle(campaign_id)
        };

        let campaign_id = match transition.effect {
            SelectionEffect::RestoreBaseline => {
                let mut state = self.state_write()?;
                state.restore_baseline();
                return Ok(());
            }
            SelectionEffect::FetchCampaign(id) => id,
        };

        let provider = self.require_provider()?;
        let range = self
            .state_read()?
            .date_range
            .ok_or_else(|| Error::State("no date range for selection".to_string()))?;

        {
            let mut state = self.state_write()?;
            state.loading = true;
            state.error = None;
        }

        let aggregator = InsightsAggregator::new(provider);
        let scope = TierScope::Campaign(campaign_id.clone());
        let (summary, daily) = tokio::join!(
            aggregator.summary(&scope, &range),
            aggregator.daily(&scope, &range),
        );

        // Apply whatever succeeded; a failed tier falls back to the empty
        // value and the first failure is surfaced. The baseline is never
        // touched, so clearing the selection always recovers it.
        let mut failure: Option<Error> = None;
        let insights = summary.unwrap_or_else(|e| {
            failure.get_or_insert(e);
            AccountInsights::default()
        });
        let daily = daily.unwrap_or_else(|e| {
            failure.get_or_insert(e);
            Vec::new()
        });

        let mut state = self.state_write()?;
        state.selection = transition.next;
        state.displayed_insights = insights;
        state.displayed_daily = daily;
        state.loading = false;
        match failure {
            Some(e) => {
                error!("campaign drill-down degraded for {}: {}", campaign_id, e);
                state.error = Some(e.to_string());
                drop(state);
                Err(e)
            }
            None => Ok(()),
        }
    }

    /// Restores the baseline view unconditionally. No network call.
    pub fn clear_selection(&self) -> Result<()> {
        let mut state = self.state_write()?;
        state.restore_baseline();
        Ok(())
    }

    /// Clears credential, accounts, baseline, selection and error back to
    /// the initial state.
    pub fn disconnect(&self) -> Result<()> {
        *self.provider_write()? = None;
        *self.state_write()? = ControllerState::default();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Read accessors for the presentation layer
    // ------------------------------------------------------------------

    pub fn has_credential(&self) -> Result<bool> {
        Ok(self.state_read()?.credential.is_some())
    }

    pub fn accounts(&self) -> Result<Vec<AdAccount>> {
        Ok(self.state_read()?.accounts.clone())
    }

    pub fn selected_account(&self) -> Result<Option<AdAccount>> {
        Ok(self.state_read()?.selected_account.clone())
    }

    pub fn date_range(&self) -> Result<Option<DateRange>> {
        Ok(self.state_read()?.date_range)
    }

    /// The currently displayed insights: the account baseline, or the
    /// selected campaign's summary while a drill-down is active.
    pub fn insights(&self) -> Result<AccountInsights> {
        Ok(self.state_read()?.displayed_insights.clone())
    }

    pub fn daily(&self) -> Result<Vec<DailyPoint>> {
        Ok(self.state_read()?.displayed_daily.clone())
    }

    pub fn campaigns(&self) -> Result<Vec<CampaignInsight>> {
        Ok(self.state_read()?.campaigns.clone())
    }

    pub fn selected_campaign_id(&self) -> Result<Option<String>> {
        Ok(self
            .state_read()?
            .selection
            .selected_id()
            .map(str::to_string))
    }

    pub fn is_loading(&self) -> Result<bool> {
        Ok(self.state_read()?.loading)
    }

    pub fn error(&self) -> Result<Option<String>> {
        Ok(self.state_read()?.error.clone())
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn require_provider(&self) -> Result<Arc<dyn ReportingProvider>> {
        self.provider_read()?
            .clone()
            .ok_or_else(|| Error::Credential("Not connected".to_string()))
    }

    fn state_read(&self) -> Result<RwLockReadGuard<'_, ControllerState>> {
        self.state.read().map_err(|e| Error::State(e.to_string()))
    }

    fn state_write(&self) -> Result<RwLockWriteGuard<'_, ControllerState>> {
        self.state.write().map_err(|e| Error::State(e.to_string()))
    }

    fn provider_read(&self) -> Result<RwLockReadGuard<'_, Option<Arc<dyn ReportingProvider>>>> {
        self.provider
            .read()
            .map_err(|e| Error::State(e.to_string()))
    }

    fn provider_write(&self) -> Result<RwLockWriteGuard<'_, Option<Arc<dyn ReportingProvider>>>> {
        self.provider
            .write()
            .map_err(|e| Error::State(e.to_string()))
    }
}
