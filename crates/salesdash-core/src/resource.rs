// ── Resource definitions ──
//
// A `Resource` ties together one data domain: what the port delivers
// (`Payload`), what the store holds (`Data`), and how one becomes the
// other. Marker types below are never instantiated.

use std::sync::Arc;

use crate::model::{Integration, RegisteredUsers, SaleMetric, SaleRegion, SalesOverview};

/// Value a store can hold. `Default` is the "nothing loaded" value.
pub trait ResourceData: Default + Clone + Send + Sync + 'static {
    fn is_empty_value(&self) -> bool;
}

impl<T: Clone + Send + Sync + 'static> ResourceData for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Clone + Send + Sync + 'static> ResourceData for Arc<Vec<T>> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Clone + Send + Sync + 'static> ResourceData for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.is_none()
    }
}

/// One data domain of the dashboard.
pub trait Resource: Send + Sync + 'static {
    /// What the port resolves with.
    type Payload: Send + 'static;
    /// What the store exposes.
    type Data: ResourceData;

    /// Short name used in log fields.
    const NAME: &'static str;
    /// Recorded when a failure carries no usable message.
    const DEFAULT_ERROR: &'static str;

    fn transform(payload: Self::Payload) -> Self::Data;

    fn empty() -> Self::Data {
        Self::Data::default()
    }

    fn is_empty(data: &Self::Data) -> bool {
        data.is_empty_value()
    }
}

// ── Domains ──────────────────────────────────────────────────────────

/// Headline metric cards.
#[derive(Debug)]
pub enum MetricsResource {}

impl Resource for MetricsResource {
    type Payload = Vec<SaleMetric>;
    type Data = Vec<SaleMetric>;

    const NAME: &'static str = "sales_metrics";
    // The Spanish dashboard UI shows "Error al cargar métricas de ventas";
    // fallbacks here are English across every resource.
    const DEFAULT_ERROR: &'static str = "Failed to load sales metrics";

    fn transform(payload: Self::Payload) -> Self::Data {
        payload
    }
}

/// Monthly revenue vs. target.
#[derive(Debug)]
pub enum OverviewResource {}

impl Resource for OverviewResource {
    type Payload = SalesOverview;
    type Data = Option<SalesOverview>;

    const NAME: &'static str = "sales_overview";
    const DEFAULT_ERROR: &'static str = "Failed to load sales overview";

    fn transform(payload: Self::Payload) -> Self::Data {
        Some(payload)
    }
}

/// Sales by region.
#[derive(Debug)]
pub enum RegionsResource {}

impl Resource for RegionsResource {
    type Payload = Vec<SaleRegion>;
    type Data = Vec<SaleRegion>;

    const NAME: &'static str = "sales_region";
    const DEFAULT_ERROR: &'static str = "Failed to load sales by region";

    fn transform(payload: Self::Payload) -> Self::Data {
        payload
    }
}

/// Registered user totals.
#[derive(Debug)]
pub enum UsersResource {}

impl Resource for UsersResource {
    type Payload = RegisteredUsers;
    type Data = Option<RegisteredUsers>;

    const NAME: &'static str = "registered_users";
    const DEFAULT_ERROR: &'static str = "Failed to load registered users";

    fn transform(payload: Self::Payload) -> Self::Data {
        Some(payload)
    }
}

/// Integration partner table. Rows are shared with collection views.
#[derive(Debug)]
pub enum IntegrationsResource {}

impl Resource for IntegrationsResource {
    type Payload = Vec<Integration>;
    type Data = Arc<Vec<Integration>>;

    const NAME: &'static str = "integrations";
    const DEFAULT_ERROR: &'static str = "Failed to load integrations";

    fn transform(payload: Self::Payload) -> Self::Data {
        Arc::new(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_report_empty() {
        assert!(MetricsResource::is_empty(&MetricsResource::empty()));
        assert!(OverviewResource::is_empty(&OverviewResource::empty()));
        assert!(IntegrationsResource::is_empty(&IntegrationsResource::empty()));
    }

    #[test]
    fn single_value_domains_wrap_in_some() {
        let users = UsersResource::transform(RegisteredUsers {
            total: 0,
            premium: 0,
            basic: 0,
        });
        // A zero-valued payload is still data.
        assert!(!UsersResource::is_empty(&users));
    }
}
