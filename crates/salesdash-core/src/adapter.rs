// ── HTTP adapter ──
//
// Implements every `ResourcePort` against the dashboard backend through
// one shared `DashboardClient`, mapping wire DTOs into domain types.

use std::future::Future;
use std::sync::Arc;

use salesdash_api::DashboardClient;
use tracing::debug;

use crate::error::CoreError;
use crate::model::{Integration, RegisteredUsers, SaleMetric, SaleRegion, SalesOverview};
use crate::port::ResourcePort;
use crate::resource::{
    IntegrationsResource, MetricsResource, OverviewResource, RegionsResource, UsersResource,
};

/// Backend-backed port for all five domains.
#[derive(Debug, Clone)]
pub struct HttpAdapter {
    client: Arc<DashboardClient>,
}

impl HttpAdapter {
    pub fn new(client: Arc<DashboardClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &DashboardClient {
        &self.client
    }
}

impl ResourcePort<MetricsResource> for HttpAdapter {
    fn fetch(&self) -> impl Future<Output = Result<Vec<SaleMetric>, CoreError>> + Send {
        let client = Arc::clone(&self.client);
        async move {
            let rows = client.sales_metrics().await?;
            debug!(count = rows.len(), "fetched sales metrics");
            Ok(rows.into_iter().map(SaleMetric::from).collect())
        }
    }
}

impl ResourcePort<OverviewResource> for HttpAdapter {
    fn fetch(&self) -> impl Future<Output = Result<SalesOverview, CoreError>> + Send {
        let client = Arc::clone(&self.client);
        async move { Ok(SalesOverview::from(client.sales_overview().await?)) }
    }
}

impl ResourcePort<RegionsResource> for HttpAdapter {
    fn fetch(&self) -> impl Future<Output = Result<Vec<SaleRegion>, CoreError>> + Send {
        let client = Arc::clone(&self.client);
        async move {
            let rows = client.sales_region().await?;
            debug!(count = rows.len(), "fetched region stats");
            Ok(rows.into_iter().map(SaleRegion::from).collect())
        }
    }
}

impl ResourcePort<UsersResource> for HttpAdapter {
    fn fetch(&self) -> impl Future<Output = Result<RegisteredUsers, CoreError>> + Send {
        let client = Arc::clone(&self.client);
        async move { Ok(RegisteredUsers::from(client.registered_users().await?)) }
    }
}

impl ResourcePort<IntegrationsResource> for HttpAdapter {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Integration>, CoreError>> + Send {
        let client = Arc::clone(&self.client);
        async move {
            let rows = client.integrations().await?;
            debug!(count = rows.len(), "fetched integrations");
            Ok(rows.into_iter().map(Integration::from).collect())
        }
    }
}
