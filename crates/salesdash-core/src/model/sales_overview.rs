// ── Sales overview domain type ──

use serde::{Deserialize, Serialize};

/// Revenue versus target for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesDataPoint {
    pub month: String,
    pub revenue: f64,
    pub target: f64,
}

/// Yearly revenue against target, plus the monthly series behind the
/// line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOverview {
    pub total_revenue: f64,
    pub total_target: f64,
    pub data: Vec<SalesDataPoint>,
}

impl SalesOverview {
    /// `total_revenue / total_target`, or 0 when there is no target.
    pub fn revenue_target_ratio(&self) -> f64 {
        if self.total_target == 0.0 {
            0.0
        } else {
            self.total_revenue / self.total_target
        }
    }

    pub fn is_target_met(&self) -> bool {
        self.total_revenue >= self.total_target
    }

    /// Amount still missing to reach the target (negative when exceeded).
    pub fn target_gap(&self) -> f64 {
        self.total_target - self.total_revenue
    }

    pub fn target_gap_percentage(&self) -> f64 {
        if self.total_target == 0.0 {
            0.0
        } else {
            self.target_gap() / self.total_target * 100.0
        }
    }

    // ── Chart series ─────────────────────────────────────────────────

    pub fn months(&self) -> Vec<&str> {
        self.data.iter().map(|p| p.month.as_str()).collect()
    }

    pub fn revenue_series(&self) -> Vec<f64> {
        self.data.iter().map(|p| p.revenue).collect()
    }

    pub fn target_series(&self) -> Vec<f64> {
        self.data.iter().map(|p| p.target).collect()
    }
}
