// ── Domain model ──
//
// Canonical dashboard types, built from the backend DTOs in `convert`.

pub mod format;
pub mod integration;
pub mod registered_users;
pub mod sales_metric;
pub mod sales_overview;
pub mod sales_region;

pub use integration::Integration;
pub use registered_users::RegisteredUsers;
pub use sales_metric::{ChangeType, SaleMetric};
pub use sales_overview::{SalesDataPoint, SalesOverview};
pub use sales_region::SaleRegion;
