// ── Integration table columns ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::sort::{SortValue, TableRow};
use crate::model::Integration;

/// Sortable columns of the integrations table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IntegrationSortKey {
    #[default]
    #[strum(to_string = "application", serialize = "name")]
    Application,
    Type,
    Rate,
    Profit,
}

impl TableRow for Integration {
    type Key = IntegrationSortKey;

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_value(&self, key: IntegrationSortKey) -> SortValue<'_> {
        match key {
            IntegrationSortKey::Application => SortValue::Text(&self.application),
            IntegrationSortKey::Type => SortValue::Text(&self.kind),
            IntegrationSortKey::Rate => SortValue::Number(self.rate),
            IntegrationSortKey::Profit => SortValue::Number(self.profit),
        }
    }

    fn initially_selected(&self) -> bool {
        self.is_selected
    }
}
