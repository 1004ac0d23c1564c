//! Reactive data layer between `salesdash-api` and the CLI.
//!
//! - **[`ResourceStore`]**: async load state machine for one data domain.
//!   Holds [`ResourceState`] (`data`, `loading`, `error`, `loaded_at`) in a
//!   `tokio::sync::watch` channel. Generation counters make the most
//!   recently started load authoritative; [`shutdown`](ResourceStore::shutdown)
//!   cancels anything in flight.
//!
//! - **Ports and use cases** ([`ResourcePort`], [`UseCase`]): the fetch
//!   seam. [`HttpAdapter`] implements every port against the backend.
//!
//! - **[`CollectionView`]**: sort, paginate and multi-select over a
//!   store's rows (the integrations table).
//!
//! - **[`Dashboard`]**: composition root wiring one store per domain.
//!
//! - **Domain model** ([`model`]): `SaleMetric`, `SalesOverview`,
//!   `SaleRegion`, `RegisteredUsers`, `Integration`.

pub mod adapter;
pub mod collection;
pub mod config;
pub mod convert;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod port;
pub mod resource;
pub mod store;
pub mod stream;
pub mod usecase;

// ── Primary re-exports ──────────────────────────────────────────────
pub use adapter::HttpAdapter;
pub use collection::{
    CollectionView, DEFAULT_PAGE_SIZE, IntegrationSortKey, PAGE_SIZES, SortDir, SortValue,
    TableRow,
};
pub use config::{DEFAULT_API_URL, DashboardConfig, TlsVerification};
pub use dashboard::Dashboard;
pub use error::CoreError;
pub use port::ResourcePort;
pub use resource::{
    IntegrationsResource, MetricsResource, OverviewResource, RegionsResource, Resource,
    ResourceData, UsersResource,
};
pub use store::{
    IntegrationsStore, MetricsStore, OverviewStore, RegionsStore, ResourceState, ResourceStore,
    UsersStore, ViewStatus,
};
pub use stream::ResourceStream;
pub use usecase::{
    GetIntegrations, GetRegisteredUsers, GetSalesMetrics, GetSalesOverview, GetSalesRegion,
    UseCase,
};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    ChangeType, Integration, RegisteredUsers, SaleMetric, SaleRegion, SalesDataPoint,
    SalesOverview,
};

// The api crate's endpoint table is part of `DashboardConfig`.
pub use salesdash_api::Endpoints;
