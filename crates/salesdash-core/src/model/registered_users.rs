// ── Registered users domain type ──

use serde::{Deserialize, Serialize};

/// Registered user counts split by plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUsers {
    pub total: u64,
    pub premium: u64,
    pub basic: u64,
}

#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
impl RegisteredUsers {
    /// Share of premium users in `[0, 1]`; 0 when there are no users.
    pub fn premium_ratio(&self) -> f64 {
        self.ratio(self.premium)
    }

    pub fn basic_ratio(&self) -> f64 {
        self.ratio(self.basic)
    }

    pub fn premium_percentage(&self) -> f64 {
        self.premium_ratio() * 100.0
    }

    pub fn basic_percentage(&self) -> f64 {
        self.basic_ratio() * 100.0
    }

    fn ratio(&self, part: u64) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            part as f64 / self.total as f64
        }
    }
}
