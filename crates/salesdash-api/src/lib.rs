//! Async HTTP client for the sales dashboard backend.
//!
//! Thin transport layer: builds `reqwest` clients ([`TransportConfig`]),
//! fetches the five dashboard resources through [`DashboardClient`], and
//! exposes the raw wire types in [`models`]. Mapping into domain entities
//! happens in `salesdash-core`.

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{DashboardClient, Endpoints};
pub use error::Error;
pub use models::{
    IntegrationDto, RegionStatDto, RegisteredUsersDto, SalesDataPointDto, SalesMetricDto,
    SalesOverviewDto,
};
pub use transport::{TlsMode, TransportConfig};
