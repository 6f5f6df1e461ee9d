//! Graph API reporting provider implementation.
//!
//! This module fetches insights from the ad platform's Graph-style HTTP
//! API:
//! - Tier queries via the `/{node}/insights` edge
//! - Ad account discovery via the `/me/adaccounts` edge
//!
//! Every response arrives in a `{"data": [...]}` envelope; failures come
//! back as a structured `{"error": {"message": ...}}` body whose message
//! is surfaced verbatim to the caller.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::errors::ReportingError;
use crate::models::{AdAccount, DateRange, ReportRow, TierOptions, TierScope};
use crate::provider::ReportingProvider;

const BASE_URL: &str = "https://graph.facebook.com";
const API_VERSION: &str = "v19.0";
const PROVIDER_ID: &str = "GRAPH";

const ACCOUNT_FIELDS: &str = "id,account_id,name,currency";

/// Graph API reporting provider.
///
/// Bound to one access token; the token travels as a query parameter the
/// way the platform expects.
pub struct GraphInsightsProvider {
    client: Client,
    access_token: String,
    base_url: String,
}

// ============================================================================
// Response structures for the Graph API
// ============================================================================

#[derive(Debug, Deserialize)]
struct GraphEnvelope<T> {
    data: Option<Vec<T>>,
    error: Option<GraphErrorBody>,
}

#[derive(Debug, Deserialize)]
struct GraphErrorBody {
    message: String,
    #[serde(rename = "type")]
    #[allow(dead_code)]
    kind: Option<String>,
    #[allow(dead_code)]
    code: Option<i64>,
}

impl GraphInsightsProvider {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            access_token: access_token.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Override the API host, for tests and gateway setups.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the query parameters for one tier query.
    fn tier_params(
        &self,
        fields: &[&str],
        range: &DateRange,
        options: &TierOptions,
    ) -> Vec<(String, String)> {
        let time_range = json!({
            "since": range.since.format("%Y-%m-%d").to_string(),
            "until": range.until.format("%Y-%m-%d").to_string(),
        });

        let mut params = vec![
            ("fields".to_string(), fields.join(",")),
            ("time_range".to_string(), time_range.to_string()),
        ];
        if let Some(level) = options.level {
            params.push(("level".to_string(), level.as_str().to_string()));
        }
        if let Some(increment) = options.time_increment {
            params.push(("time_increment".to_string(), increment.to_string()));
        }
        if let Some(limit) = options.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params.push(("access_token".to_string(), self.access_token.clone()));
        params
    }

    /// Make a GET request and decode the data envelope.
    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<Vec<T>, ReportingError> {
        let url = format!("{}/{}/{}", self.base_url, API_VERSION, path);

        debug!("Graph request: {} with {} params", path, params.len());

        let response = self.client.get(&url).query(params).send().await?;
        let body = response.text().await?;

        let envelope: GraphEnvelope<T> = serde_json::from_str(&body)
            .map_err(|e| ReportingError::Parse(format!("{} ({})", e, path)))?;

        if let Some(error) = envelope.error {
            return Err(ReportingError::Provider {
                message: error.message,
            });
        }

        Ok(envelope.data.unwrap_or_default())
    }
}

#[async_trait]
impl ReportingProvider for GraphInsightsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn list_ad_accounts(&self) -> Result<Vec<AdAccount>, ReportingError> {
        if self.access_token.is_empty() {
            return Err(ReportingError::MissingCredential);
        }
        let params = vec![
            ("fields".to_string(), ACCOUNT_FIELDS.to_string()),
            ("access_token".to_string(), self.access_token.clone()),
        ];
        self.fetch("me/adaccounts", &params).await
    }

    async fn fetch_tier(
        &self,
        scope: &TierScope,
        fields: &[&str],
        range: &DateRange,
        options: &TierOptions,
    ) -> Result<Vec<ReportRow>, ReportingError> {
        if self.access_token.is_empty() {
            return Err(ReportingError::MissingCredential);
        }
        range.validate()?;

        let path = format!("{}/insights", scope.node_id());
        let params = self.tier_params(fields, range, options);
        self.fetch(&path, &params).await
    }
}
