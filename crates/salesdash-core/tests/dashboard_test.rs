#![allow(clippy::unwrap_used)]
// End-to-end tests: wiremock backend -> HttpAdapter -> ResourceStore.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use salesdash_core::{
    ChangeType, Dashboard, DashboardConfig, Endpoints, IntegrationSortKey, MetricsResource,
    Resource, ViewStatus,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Dashboard) {
    let server = MockServer::start().await;
    let mut config = DashboardConfig::new(Url::parse(&server.uri()).unwrap());
    config.timeout = Duration::from_secs(5);
    config.page_size = 2;
    let dashboard = Dashboard::new(config).unwrap();
    (server, dashboard)
}

async fn mount_json(server: &MockServer, id: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/c/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_all(server: &MockServer) {
    let ids = Endpoints::default();
    mount_json(
        server,
        &ids.sales_metrics,
        json!({ "stats": [{
            "title": "Total Sales",
            "value": 150_000,
            "currency": "USD",
            "percentageChange": 12.5,
            "changeType": "up",
            "description": "vs last month"
        }]}),
    )
    .await;
    mount_json(
        server,
        &ids.sales_overview,
        json!({ "salesOverview": {
            "totalRevenue": 45_000,
            "totalTarget": 50_000,
            "data": [{ "month": "Jan", "revenue": 45_000, "target": 50_000 }]
        }}),
    )
    .await;
    mount_json(
        server,
        &ids.sales_region,
        json!({ "regionStats": [{ "name": "Europe", "value": 1200 }] }),
    )
    .await;
    mount_json(
        server,
        &ids.registered_users,
        json!({ "users": { "total": 100, "premium": 25, "basic": 75 } }),
    )
    .await;
    mount_json(
        server,
        &ids.integrations,
        json!({ "integrations": [
            { "id": "a", "application": "Stripe", "logo": "", "type": "Finance", "rate": 75, "profit": 10998.28 },
            { "id": "b", "application": "Zapier", "logo": "", "type": "CRM", "rate": 45, "profit": 8998.59, "isSelected": true },
            { "id": "c", "application": "Shopify", "logo": "", "type": "Marketplace", "rate": 90, "profit": 13331.24 }
        ]}),
    )
    .await;
}

// ── Tests ───────────────────────────────────────────────────────────

#[tokio::test]
async fn metrics_load_populates_store() {
    let (server, dashboard) = setup().await;
    mount_all(&server).await;

    dashboard.metrics().load().await;

    let snap = dashboard.metrics().snapshot();
    assert!(snap.has_data());
    assert!(!snap.loading);
    assert!((snap.data[0].value - 150_000.0).abs() < f64::EPSILON);
    assert_eq!(snap.data[0].change_type, ChangeType::Up);
}

#[tokio::test]
async fn load_all_settles_every_store() {
    let (server, dashboard) = setup().await;
    mount_all(&server).await;

    dashboard.load_all().await;

    for (name, status) in dashboard.statuses() {
        assert_eq!(status, ViewStatus::Ready, "{name}");
    }
    let users = dashboard.users().data().unwrap();
    assert!((users.premium_percentage() - 25.0).abs() < f64::EPSILON);
    let overview = dashboard.overview().data().unwrap();
    assert!(!overview.is_target_met());
}

#[tokio::test]
async fn integrations_view_sorts_and_pages() {
    let (server, dashboard) = setup().await;
    mount_all(&server).await;
    dashboard.integrations().load().await;

    let mut view = dashboard.integrations_view();
    assert_eq!(view.page_size(), 2);
    assert!(view.is_selected("b"));
    assert!(view.some_checked());

    view.sort_by(IntegrationSortKey::Rate);
    let order: Vec<&str> = view.sorted_rows().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(order, ["b", "a", "c"]);
    assert_eq!(view.page_count(), 2);
    view.next();
    assert_eq!(view.paged_rows().len(), 1);
}

#[tokio::test]
async fn server_error_lands_in_store_error() {
    let (server, dashboard) = setup().await;
    Mock::given(method("GET"))
        .and(path(format!("/c/{}", Endpoints::default().sales_metrics)))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    dashboard.metrics().load().await;

    let snap = dashboard.metrics().snapshot();
    assert!(!snap.loading);
    assert!(snap.data.is_empty());
    let error = snap.error.unwrap();
    assert!(error.contains("500"), "{error}");
    assert_ne!(error, MetricsResource::DEFAULT_ERROR);
}

#[tokio::test]
async fn empty_payload_is_not_an_error() {
    let (server, dashboard) = setup().await;
    mount_json(
        &server,
        &Endpoints::default().sales_region,
        json!({ "regionStats": [] }),
    )
    .await;

    dashboard.regions().load().await;

    assert!(dashboard.regions().is_empty());
    assert!(!dashboard.regions().has_error());
    assert_eq!(dashboard.regions().status(), ViewStatus::Empty);
}

#[tokio::test]
async fn shutdown_stops_further_loads() {
    let (server, dashboard) = setup().await;
    mount_all(&server).await;

    dashboard.shutdown();
    dashboard.load_all().await;

    for (name, status) in dashboard.statuses() {
        assert_eq!(status, ViewStatus::Empty, "{name}");
    }
}
