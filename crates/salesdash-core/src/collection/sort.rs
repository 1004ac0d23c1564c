// ── Row ordering ──

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Sort direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Value a row exposes for one sort key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl SortValue<'_> {
    /// Text compares case-insensitively first, lowercase before uppercase
    /// on ties. Numbers use IEEE total order. Numbers sort before text.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| b.cmp(a)),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

/// A row a [`CollectionView`](super::CollectionView) can display.
pub trait TableRow: Clone {
    /// Sortable columns.
    type Key: Copy + Eq + Default + fmt::Debug;

    /// Identity, unique within one row set.
    fn id(&self) -> &str;

    fn sort_value(&self, key: Self::Key) -> SortValue<'_>;

    /// Whether the row arrives already selected.
    fn initially_selected(&self) -> bool {
        false
    }
}
