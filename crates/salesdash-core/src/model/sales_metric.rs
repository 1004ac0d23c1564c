// ── Sales metric domain type ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::format;

/// Direction of a metric compared with the previous period.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ChangeType {
    Up,
    Down,
    #[default]
    Equal,
}

/// One headline metric card (total sales, conversion rate, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleMetric {
    pub title: String,
    pub value: f64,
    /// `""`, `"%"`, `"$"` or an ISO code such as `"USD"`.
    pub currency: String,
    pub percentage_change: f64,
    pub change_type: ChangeType,
    pub description: String,
}

impl SaleMetric {
    /// Display value following the card rules: bare numbers get US
    /// grouping, `%` uses German grouping with a trailing percent sign,
    /// `$` is prefixed, anything else is printed as-is.
    pub fn formatted_value(&self) -> String {
        match self.currency.as_str() {
            "" => format::en_us(self.value),
            "%" => format!("{}%", format::de_de(self.value)),
            "$" => format!("$ {}", format::en_us(self.value)),
            _ => self.value.to_string(),
        }
    }

    /// Signed percentage change, e.g. `+12.5%`.
    pub fn formatted_change(&self) -> String {
        let sign = match self.change_type {
            ChangeType::Up => "+",
            ChangeType::Down => "-",
            ChangeType::Equal => "",
        };
        format!("{sign}{}%", self.percentage_change.abs())
    }
}
