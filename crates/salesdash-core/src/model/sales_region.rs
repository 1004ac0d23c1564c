// ── Sales by region domain type ──

use serde::{Deserialize, Serialize};

/// Sales volume for one region (one radar-chart axis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRegion {
    pub name: String,
    pub value: f64,
}
