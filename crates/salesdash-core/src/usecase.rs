// ── Use cases ──
//
// One use case per domain, delegating 1:1 to its port.

use std::future::Future;
use std::marker::PhantomData;

use crate::adapter::HttpAdapter;
use crate::error::CoreError;
use crate::port::ResourcePort;
use crate::resource::{
    IntegrationsResource, MetricsResource, OverviewResource, RegionsResource, Resource,
    UsersResource,
};

pub struct UseCase<R: Resource, P: ResourcePort<R>> {
    port: P,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource, P: ResourcePort<R>> UseCase<R, P> {
    pub fn new(port: P) -> Self {
        Self {
            port,
            _resource: PhantomData,
        }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// Start the fetch. The port is invoked before the future is returned.
    pub fn execute(&self) -> impl Future<Output = Result<R::Payload, CoreError>> + Send + '_ {
        self.port.fetch()
    }
}

pub type GetSalesMetrics<P = HttpAdapter> = UseCase<MetricsResource, P>;
pub type GetSalesOverview<P = HttpAdapter> = UseCase<OverviewResource, P>;
pub type GetSalesRegion<P = HttpAdapter> = UseCase<RegionsResource, P>;
pub type GetRegisteredUsers<P = HttpAdapter> = UseCase<UsersResource, P>;
pub type GetIntegrations<P = HttpAdapter> = UseCase<IntegrationsResource, P>;
