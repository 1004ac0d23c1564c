// ── Store state ──

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::resource::ResourceData;

/// What a view should render for a store. Exactly one applies to any
/// state, checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum ViewStatus {
    Loading,
    Failed(String),
    Empty,
    Ready,
}

/// Snapshot of one store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
    /// Time of the last successful settlement.
    pub loaded_at: Option<DateTime<Utc>>,
}

impl<T: ResourceData> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            data: T::default(),
            loading: false,
            error: None,
            loaded_at: None,
        }
    }
}

impl<T: ResourceData> ResourceState<T> {
    pub fn has_data(&self) -> bool {
        !self.data.is_empty_value()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// No data and nothing on the way.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty_value() && !self.loading
    }

    pub fn status(&self) -> ViewStatus {
        if self.loading {
            ViewStatus::Loading
        } else if let Some(msg) = &self.error {
            ViewStatus::Failed(msg.clone())
        } else if self.data.is_empty_value() {
            ViewStatus::Empty
        } else {
            ViewStatus::Ready
        }
    }
}
