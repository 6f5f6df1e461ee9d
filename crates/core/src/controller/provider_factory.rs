use std::sync::Arc;

use adlens_reporting::{GraphInsightsProvider, ReportingProvider};

/// Builds a reporting provider bound to a credential.
///
/// The controller goes through this seam whenever the credential changes,
/// so tests can inject a mock provider and the transport stays out of the
/// core.
pub trait ProviderFactory: Send + Sync {
    fn create(&self, credential: &str) -> Arc<dyn ReportingProvider>;
}

/// Default factory producing the Graph API provider.
#[derive(Debug, Clone, Default)]
pub struct GraphProviderFactory;

impl ProviderFactory for GraphProviderFactory {
    fn create(&self, credential: &str) -> Arc<dyn ReportingProvider> {
        Arc::new(GraphInsightsProvider::new(credential))
    }
}
