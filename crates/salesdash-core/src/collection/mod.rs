// ── Collection views ──
//
// Sort / paginate / multi-select over a store's current rows. Views are
// owned by a single consumer and never fail: out-of-range input clamps.

mod integrations;
mod sort;
mod view;

pub use integrations::IntegrationSortKey;
pub use sort::{SortDir, SortValue, TableRow};
pub use view::CollectionView;

/// Page sizes a table offers.
pub const PAGE_SIZES: [usize; 3] = [5, 10, 20];

/// Page size a fresh view starts with.
pub const DEFAULT_PAGE_SIZE: usize = 5;
