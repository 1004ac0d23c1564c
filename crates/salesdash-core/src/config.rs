// ── Runtime dashboard configuration ──
//
// These types describe *where* the backend lives and how to reach it.
// They never touch disk: the CLI builds a `DashboardConfig` (usually via
// `salesdash-config`) and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use salesdash_api::{Endpoints, TlsMode, TransportConfig};
use url::Url;

use crate::collection::DEFAULT_PAGE_SIZE;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed local backends).
    DangerAcceptInvalid,
}

/// Configuration for one dashboard backend.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Backend base URL (e.g., `https://api.example.com`).
    pub api_url: Url,
    /// Resource ids for the five data domains.
    pub endpoints: Endpoints,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
    /// Initial page size for integration tables.
    pub page_size: usize,
}

impl DashboardConfig {
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            endpoints: Endpoints::default(),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Translate into the api crate's transport settings.
    pub fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}

impl Default for DashboardConfig {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_API_URL).expect("default API URL is valid"))
    }
}
