// Wire types for the dashboard backend.
//
// Every endpoint wraps its payload in a single-key envelope
// (`{ "stats": [...] }`, `{ "users": {...} }`, ...). The client strips the
// envelope, so callers only see the inner DTOs.

use serde::{Deserialize, Deserializer, Serialize};

// ── Sales metrics ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesMetricDto {
    pub title: String,
    pub value: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub percentage_change: f64,
    /// `"up"`, `"down"` or `"equal"`. Kept as a string here; the core
    /// crate decides how to treat unknown values.
    pub change_type: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SalesMetricsEnvelope {
    pub stats: Vec<SalesMetricDto>,
}

// ── Sales overview ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesDataPointDto {
    pub month: String,
    pub revenue: f64,
    pub target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOverviewDto {
    pub total_revenue: f64,
    pub total_target: f64,
    #[serde(default)]
    pub data: Vec<SalesDataPointDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SalesOverviewEnvelope {
    pub sales_overview: SalesOverviewDto,
}

// ── Sales by region ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStatDto {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegionStatsEnvelope {
    pub region_stats: Vec<RegionStatDto>,
}

// ── Registered users ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUsersDto {
    pub total: u64,
    pub premium: u64,
    pub basic: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisteredUsersEnvelope {
    pub users: RegisteredUsersDto,
}

// ── Integrations ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationDto {
    /// Opaque identifier. Some fixtures send numbers, so both are accepted.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub application: String,
    #[serde(default)]
    pub logo: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub rate: f64,
    pub profit: f64,
    #[serde(default)]
    pub is_selected: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IntegrationsEnvelope {
    pub integrations: Vec<IntegrationDto>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integration_accepts_numeric_id_and_missing_selection() {
        let dto: IntegrationDto = serde_json::from_value(json!({
            "id": 7,
            "application": "Stripe",
            "logo": "stripe.svg",
            "type": "Finance",
            "rate": 33,
            "profit": 10998.28
        }))
        .unwrap();

        assert_eq!(dto.id, "7");
        assert_eq!(dto.kind, "Finance");
        assert_eq!(dto.is_selected, None);
    }

    #[test]
    fn metric_uses_camel_case_fields() {
        let dto: SalesMetricDto = serde_json::from_value(json!({
            "title": "Total Sales",
            "value": 150_000,
            "currency": "USD",
            "percentageChange": 12.5,
            "changeType": "up",
            "description": "vs last month"
        }))
        .unwrap();

        assert!((dto.percentage_change - 12.5).abs() < f64::EPSILON);
        assert_eq!(dto.change_type, "up");
    }

    #[test]
    fn overview_envelope_unwraps_inner_object() {
        let env: SalesOverviewEnvelope = serde_json::from_value(json!({
            "salesOverview": {
                "totalRevenue": 120.0,
                "totalTarget": 100.0,
                "data": [{ "month": "Jan", "revenue": 60.0, "target": 50.0 }]
            }
        }))
        .unwrap();

        assert_eq!(env.sales_overview.data.len(), 1);
        assert_eq!(env.sales_overview.data[0].month, "Jan");
    }
}
