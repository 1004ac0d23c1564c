// ── Integration domain type ──

use serde::{Deserialize, Serialize};

use super::format;

/// Upper bound for [`Integration::rate`].
pub const MAX_RATE: f64 = 100.0;

/// One integration partner row (Stripe, Zapier, Shopify, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    /// Opaque identifier, unique within one result set.
    pub id: String,
    pub application: String,
    pub logo: String,
    /// Integration category ("Finance", "CRM", ...). `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    /// Conversion rate in percent, `0..=100`.
    pub rate: f64,
    /// Profit in USD, never negative after an update.
    pub profit: f64,
    /// Selection flag as delivered by the backend.
    pub is_selected: bool,
}

impl Integration {
    /// `$10,998.28`
    pub fn formatted_profit(&self) -> String {
        if self.profit < 0.0 {
            format!("-${}", format::en_us(-self.profit))
        } else {
            format!("${}", format::en_us(self.profit))
        }
    }

    /// `33%`
    pub fn formatted_rate(&self) -> String {
        format!("{}%", self.rate)
    }

    /// Rate as a progress-bar fraction.
    pub fn rate_progress(&self) -> f64 {
        self.rate / MAX_RATE
    }

    pub fn toggle_selection(&mut self) {
        self.is_selected = !self.is_selected;
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }

    /// Set the rate, clamped into `0..=100`.
    pub fn update_rate(&mut self, rate: f64) {
        self.rate = rate.clamp(0.0, MAX_RATE);
    }

    /// Set the profit, clamped to be non-negative.
    pub fn update_profit(&mut self, profit: f64) {
        self.profit = profit.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripe() -> Integration {
        Integration {
            id: "1".into(),
            application: "Stripe".into(),
            logo: "stripe.svg".into(),
            kind: "Finance".into(),
            rate: 33.0,
            profit: 10_998.28,
            is_selected: false,
        }
    }

    #[test]
    fn formats_profit_and_rate() {
        let row = stripe();
        assert_eq!(row.formatted_profit(), "$10,998.28");
        assert_eq!(row.formatted_rate(), "33%");
        assert!((row.rate_progress() - 0.33).abs() < 1e-9);
    }

    #[test]
    fn rate_clamps_to_percent_range() {
        let mut row = stripe();
        row.update_rate(150.0);
        assert!((row.rate - 100.0).abs() < f64::EPSILON);
        row.update_rate(-5.0);
        assert!(row.rate.abs() < f64::EPSILON);
        row.update_rate(42.5);
        assert!((row.rate - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn profit_never_negative() {
        let mut row = stripe();
        row.update_profit(-1.0);
        assert!(row.profit.abs() < f64::EPSILON);
        row.update_profit(12.0);
        assert!((row.profit - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn selection_toggles() {
        let mut row = stripe();
        row.toggle_selection();
        assert!(row.is_selected);
        row.set_selected(false);
        assert!(!row.is_selected);
    }
}
