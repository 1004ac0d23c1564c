// ── Dashboard composition root ──
//
// Wires one client, one adapter and one store per domain. Consumers
// (the CLI) hold a `Dashboard` and read stores or build views from it.

use std::sync::Arc;

use salesdash_api::DashboardClient;
use tracing::{debug, info};

use crate::adapter::HttpAdapter;
use crate::collection::CollectionView;
use crate::config::DashboardConfig;
use crate::error::CoreError;
use crate::model::Integration;
use crate::resource::{
    IntegrationsResource, MetricsResource, OverviewResource, RegionsResource, Resource,
    UsersResource,
};
use crate::store::{
    IntegrationsStore, MetricsStore, OverviewStore, RegionsStore, ResourceStore, UsersStore,
    ViewStatus,
};
use crate::usecase::UseCase;

/// All five stores of the sales dashboard, backed by one HTTP client.
pub struct Dashboard {
    config: DashboardConfig,
    client: Arc<DashboardClient>,
    metrics: Arc<MetricsStore>,
    overview: Arc<OverviewStore>,
    regions: Arc<RegionsStore>,
    users: Arc<UsersStore>,
    integrations: Arc<IntegrationsStore>,
}

impl Dashboard {
    /// Build the HTTP client from `config` and wire every store.
    pub fn new(config: DashboardConfig) -> Result<Self, CoreError> {
        let client = DashboardClient::new(
            config.api_url.clone(),
            config.endpoints.clone(),
            &config.transport(),
        )?;
        Ok(Self::with_client(config, client))
    }

    /// Wire every store around an existing client.
    pub fn with_client(config: DashboardConfig, client: DashboardClient) -> Self {
        let client = Arc::new(client);
        let adapter = HttpAdapter::new(Arc::clone(&client));
        debug!(api_url = %config.api_url, "dashboard wired");

        Self {
            metrics: wire_store::<MetricsResource>(&adapter),
            overview: wire_store::<OverviewResource>(&adapter),
            regions: wire_store::<RegionsResource>(&adapter),
            users: wire_store::<UsersResource>(&adapter),
            integrations: wire_store::<IntegrationsResource>(&adapter),
            config,
            client,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn client(&self) -> &DashboardClient {
        &self.client
    }

    // ── Stores ───────────────────────────────────────────────────────

    pub fn metrics(&self) -> &Arc<MetricsStore> {
        &self.metrics
    }

    pub fn overview(&self) -> &Arc<OverviewStore> {
        &self.overview
    }

    pub fn regions(&self) -> &Arc<RegionsStore> {
        &self.regions
    }

    pub fn users(&self) -> &Arc<UsersStore> {
        &self.users
    }

    pub fn integrations(&self) -> &Arc<IntegrationsStore> {
        &self.integrations
    }

    /// A table view over the integrations store's current rows.
    pub fn integrations_view(&self) -> CollectionView<Integration> {
        CollectionView::with_rows(self.integrations.data(), self.config.page_size)
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Load every store concurrently and wait for all of them to settle.
    pub async fn load_all(&self) {
        futures_util::join!(
            self.metrics.load(),
            self.overview.load(),
            self.regions.load(),
            self.users.load(),
            self.integrations.load(),
        );
        let failed = self
            .statuses()
            .iter()
            .filter(|(_, s)| matches!(s, ViewStatus::Failed(_)))
            .count();
        info!(failed, "dashboard load finished");
    }

    /// `(resource name, status)` for every store, in display order.
    pub fn statuses(&self) -> Vec<(&'static str, ViewStatus)> {
        vec![
            (MetricsResource::NAME, self.metrics.status()),
            (OverviewResource::NAME, self.overview.status()),
            (RegionsResource::NAME, self.regions.status()),
            (UsersResource::NAME, self.users.status()),
            (IntegrationsResource::NAME, self.integrations.status()),
        ]
    }

    /// Cancel in-flight loads on every store.
    pub fn shutdown(&self) {
        self.metrics.shutdown();
        self.overview.shutdown();
        self.regions.shutdown();
        self.users.shutdown();
        self.integrations.shutdown();
    }
}

fn wire_store<R>(adapter: &HttpAdapter) -> Arc<ResourceStore<R>>
where
    R: Resource,
    HttpAdapter: crate::port::ResourcePort<R>,
{
    Arc::new(ResourceStore::new(UseCase::new(adapter.clone())))
}
