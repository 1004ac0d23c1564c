// ── Resource stores ──
//
// One `ResourceStore` per data domain, each owning a `watch` channel of
// `ResourceState`. Views read snapshots or subscribe for changes.

mod resource_store;
mod state;

pub use resource_store::ResourceStore;
pub use state::{ResourceState, ViewStatus};

use crate::adapter::HttpAdapter;
use crate::resource::{
    IntegrationsResource, MetricsResource, OverviewResource, RegionsResource, UsersResource,
};

pub type MetricsStore<P = HttpAdapter> = ResourceStore<MetricsResource, P>;
pub type OverviewStore<P = HttpAdapter> = ResourceStore<OverviewResource, P>;
pub type RegionsStore<P = HttpAdapter> = ResourceStore<RegionsResource, P>;
pub type UsersStore<P = HttpAdapter> = ResourceStore<UsersResource, P>;
pub type IntegrationsStore<P = HttpAdapter> = ResourceStore<IntegrationsResource, P>;
