// Dashboard backend HTTP client
//
// Wraps `reqwest::Client` with resource-id URL construction, envelope
// unwrapping and error mapping. Each data domain lives behind its own
// resource id on the backend (`GET {base}/c/{id}`).

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::{
    IntegrationDto, IntegrationsEnvelope, RegionStatDto, RegionStatsEnvelope, RegisteredUsersDto,
    RegisteredUsersEnvelope, SalesMetricDto, SalesMetricsEnvelope, SalesOverviewDto,
    SalesOverviewEnvelope,
};
use crate::transport::TransportConfig;

/// Longest body prefix carried into error messages.
const BODY_PREVIEW: usize = 200;

/// Backend resource ids, one per data domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub sales_metrics: String,
    pub sales_overview: String,
    pub sales_region: String,
    pub registered_users: String,
    pub integrations: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            sales_metrics: "1dbe-8a86-4247-8d53".into(),
            sales_overview: "66ff-e4d9-4d77-80c1".into(),
            sales_region: "7e36-14ca-4b32-a6b4".into(),
            registered_users: "e3d8-2efc-4e24-a7bc".into(),
            integrations: "3bde-f00f-4eb3-a567".into(),
        }
    }
}

/// HTTP client for the dashboard backend.
///
/// All methods return unwrapped payloads -- the single-key envelope is
/// stripped before the caller sees it.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: Url,
    endpoints: Endpoints,
    timeout: Duration,
}

impl DashboardClient {
    /// Create a client from a `TransportConfig`.
    pub fn new(base_url: Url, endpoints: Endpoints, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            endpoints,
            timeout: transport.timeout,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, endpoints: Endpoints) -> Self {
        Self {
            http,
            base_url,
            endpoints,
            timeout: TransportConfig::default().timeout,
        }
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured resource ids.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // ── Endpoints ────────────────────────────────────────────────────

    pub async fn sales_metrics(&self) -> Result<Vec<SalesMetricDto>, Error> {
        let env: SalesMetricsEnvelope = self.get(&self.endpoints.sales_metrics).await?;
        Ok(env.stats)
    }

    pub async fn sales_overview(&self) -> Result<SalesOverviewDto, Error> {
        let env: SalesOverviewEnvelope = self.get(&self.endpoints.sales_overview).await?;
        Ok(env.sales_overview)
    }

    pub async fn sales_region(&self) -> Result<Vec<RegionStatDto>, Error> {
        let env: RegionStatsEnvelope = self.get(&self.endpoints.sales_region).await?;
        Ok(env.region_stats)
    }

    pub async fn registered_users(&self) -> Result<RegisteredUsersDto, Error> {
        let env: RegisteredUsersEnvelope = self.get(&self.endpoints.registered_users).await?;
        Ok(env.users)
    }

    pub async fn integrations(&self) -> Result<Vec<IntegrationDto>, Error> {
        let env: IntegrationsEnvelope = self.get(&self.endpoints.integrations).await?;
        Ok(env.integrations)
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build the URL for a resource id: `{base}/c/{id}`.
    pub(crate) fn resource_url(&self, resource_id: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let id = resource_id.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/c/{id}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, resource_id: &str) -> Result<T, Error> {
        let url = self.resource_url(resource_id)?;
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(|e| self.map_send_error(e))?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                message: preview(&body).to_owned(),
            });
        }

        let body = resp.text().await.map_err(|e| self.map_send_error(e))?;
        trace!(bytes = body.len(), "response body received");

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body,
        })
    }

    fn map_send_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            Error::Transport(err)
        }
    }
}

fn preview(body: &str) -> &str {
    match body.char_indices().nth(BODY_PREVIEW) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> DashboardClient {
        DashboardClient::with_client(
            reqwest::Client::new(),
            Url::parse(base).unwrap(),
            Endpoints::default(),
        )
    }

    #[test]
    fn resource_url_joins_without_double_slash() {
        let c = client("https://api.example.com/");
        let url = c.resource_url("abc-123").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/c/abc-123");
    }

    #[test]
    fn resource_url_keeps_base_path() {
        let c = client("https://api.example.com/v1");
        let url = c.resource_url("/abc").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/c/abc");
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        let long = "é".repeat(300);
        assert_eq!(preview(&long).chars().count(), BODY_PREVIEW);
        assert_eq!(preview("short"), "short");
    }
}
