// ── Collection view ──
//
// Sorted, paginated, multi-select window over a shared row snapshot.
// The sort order is cached as an index permutation and recomputed on
// every mutation that can change it, so reads never re-sort.

use std::collections::HashSet;
use std::sync::Arc;

use super::DEFAULT_PAGE_SIZE;
use super::sort::{SortDir, TableRow};

/// Table state for one consumer.
#[derive(Debug, Clone)]
pub struct CollectionView<R: TableRow> {
    rows: Arc<Vec<R>>,
    /// Indices into `rows` in display order.
    order: Vec<usize>,
    sort_key: R::Key,
    sort_dir: SortDir,
    page: usize,
    page_size: usize,
    selected: HashSet<String>,
}

impl<R: TableRow> Default for CollectionView<R> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<R: TableRow> CollectionView<R> {
    pub fn new(page_size: usize) -> Self {
        Self {
            rows: Arc::new(Vec::new()),
            order: Vec::new(),
            sort_key: R::Key::default(),
            sort_dir: SortDir::default(),
            page: 1,
            page_size: page_size.max(1),
            selected: HashSet::new(),
        }
    }

    pub fn with_rows(rows: Arc<Vec<R>>, page_size: usize) -> Self {
        let mut view = Self::new(page_size);
        view.set_rows(rows);
        view
    }

    /// Replace the row snapshot. Selection is reseeded from the rows'
    /// own flags; the page is left as is.
    pub fn set_rows(&mut self, rows: Arc<Vec<R>>) {
        self.selected = rows
            .iter()
            .filter(|r| r.initially_selected())
            .map(|r| r.id().to_owned())
            .collect();
        self.rows = rows;
        self.recompute_order();
    }

    pub fn rows(&self) -> &Arc<Vec<R>> {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // ── Sorting ──────────────────────────────────────────────────────

    pub fn sort_key(&self) -> R::Key {
        self.sort_key
    }

    pub fn sort_dir(&self) -> SortDir {
        self.sort_dir
    }

    /// Same key flips the direction; a new key starts ascending.
    pub fn sort_by(&mut self, key: R::Key) {
        if self.sort_key == key {
            self.sort_dir = self.sort_dir.toggled();
        } else {
            self.sort_key = key;
            self.sort_dir = SortDir::Asc;
        }
        self.recompute_order();
    }

    /// Direction of `key` if it is the active sort column.
    pub fn is_sorted(&self, key: R::Key) -> Option<SortDir> {
        (self.sort_key == key).then_some(self.sort_dir)
    }

    pub fn sorted_rows(&self) -> Vec<&R> {
        self.order.iter().map(|&i| &self.rows[i]).collect()
    }

    /// Stable ascending sort, reversed as a whole for `Desc` so that
    /// flipping the direction always yields the exact mirror order.
    fn recompute_order(&mut self) {
        let key = self.sort_key;
        let rows = &self.rows;
        let mut order: Vec<usize> = (0..rows.len()).collect();
        order.sort_by(|&a, &b| rows[a].sort_value(key).compare(&rows[b].sort_value(key)));
        if self.sort_dir == SortDir::Desc {
            order.reverse();
        }
        self.order = order;
    }

    // ── Pagination ───────────────────────────────────────────────────

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `max(1, ceil(total / page_size))`.
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.page_size).max(1)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    pub fn next(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Page size is at least 1; the current page is re-clamped.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.set_page(self.page);
    }

    /// Rows on the current page. Empty when the page lies past the end.
    pub fn paged_rows(&self) -> Vec<&R> {
        let start = (self.page - 1).saturating_mul(self.page_size);
        self.order
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&i| &self.rows[i])
            .collect()
    }

    // ── Selection ────────────────────────────────────────────────────

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Ids not present in the current rows are ignored.
    pub fn set_selected(&mut self, id: &str, selected: bool) {
        if selected {
            if self.rows.iter().any(|r| r.id() == id) {
                self.selected.insert(id.to_owned());
            }
        } else {
            self.selected.remove(id);
        }
    }

    pub fn toggle_selection(&mut self, id: &str) {
        let next = !self.is_selected(id);
        self.set_selected(id, next);
    }

    /// False for an empty collection.
    pub fn all_checked(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|r| self.selected.contains(r.id()))
    }

    pub fn some_checked(&self) -> bool {
        !self.all_checked() && self.rows.iter().any(|r| self.selected.contains(r.id()))
    }

    /// Applies to every row, not just the current page.
    pub fn toggle_all(&mut self, checked: bool) {
        if checked {
            self.selected = self.rows.iter().map(|r| r.id().to_owned()).collect();
        } else {
            self.selected.clear();
        }
    }

    /// Selected rows in source order.
    pub fn selected_rows(&self) -> Vec<&R> {
        self.rows
            .iter()
            .filter(|r| self.selected.contains(r.id()))
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    // ── Row edits ────────────────────────────────────────────────────

    /// Edit one row in place. The shared snapshot is cloned first if
    /// anyone else still holds it. Returns false when `id` is unknown.
    pub fn update_row(&mut self, id: &str, f: impl FnOnce(&mut R)) -> bool {
        let Some(idx) = self.rows.iter().position(|r| r.id() == id) else {
            return false;
        };
        f(&mut Arc::make_mut(&mut self.rows)[idx]);
        self.recompute_order();
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::collection::IntegrationSortKey;
    use crate::model::Integration;

    fn row(id: &str, application: &str, rate: f64) -> Integration {
        Integration {
            id: id.into(),
            application: application.into(),
            logo: String::new(),
            kind: "Finance".into(),
            rate,
            profit: rate * 100.0,
            is_selected: false,
        }
    }

    fn ids(rows: &[&Integration]) -> Vec<String> {
        rows.iter().map(|r| r.id.clone()).collect()
    }

    fn five_rows() -> Arc<Vec<Integration>> {
        Arc::new(
            (1..=5)
                .map(|n| row(&format!("r{n}"), &format!("App {n}"), f64::from(n)))
                .collect(),
        )
    }

    #[test]
    fn rate_sort_then_reverse() {
        let rows = Arc::new(vec![row("A", "A", 75.0), row("B", "B", 45.0), row("C", "C", 90.0)]);
        let mut view = CollectionView::with_rows(rows, 5);

        view.sort_by(IntegrationSortKey::Rate);
        assert_eq!(ids(&view.sorted_rows()), ["B", "A", "C"]);
        assert_eq!(view.is_sorted(IntegrationSortKey::Rate), Some(SortDir::Asc));

        view.sort_by(IntegrationSortKey::Rate);
        assert_eq!(ids(&view.sorted_rows()), ["C", "A", "B"]);
        assert_eq!(view.is_sorted(IntegrationSortKey::Application), None);
    }

    #[test]
    fn new_key_resets_to_ascending() {
        let mut view = CollectionView::with_rows(five_rows(), 5);
        view.sort_by(IntegrationSortKey::Rate);
        view.sort_by(IntegrationSortKey::Rate);
        view.sort_by(IntegrationSortKey::Profit);
        assert_eq!(view.sort_dir(), SortDir::Asc);
        assert_eq!(view.sort_key(), IntegrationSortKey::Profit);
    }

    #[test]
    fn toggling_twice_reverses_for_every_key() {
        let mut crm = row("4", "Stripe", 33.0);
        crm.kind = "CRM".into();
        let rows = Arc::new(vec![
            row("1", "Stripe", 33.0),
            row("2", "zapier", 27.0),
            row("3", "Shopify", 40.0),
            crm,
        ]);
        for key in IntegrationSortKey::iter() {
            let mut view = CollectionView::with_rows(Arc::clone(&rows), 5);
            if view.sort_key() != key {
                view.sort_by(key);
            }
            assert_eq!(view.sort_dir(), SortDir::Asc);
            let mut asc = ids(&view.sorted_rows());
            view.sort_by(key);
            asc.reverse();
            assert_eq!(ids(&view.sorted_rows()), asc, "key {key:?}");
        }
    }

    #[test]
    fn tied_keys_keep_source_order_ascending_and_mirror_descending() {
        let rows = Arc::new(vec![
            row("1", "Stripe", 50.0),
            row("2", "Zapier", 50.0),
            row("3", "Shopify", 10.0),
            row("4", "Slack", 50.0),
        ]);
        let mut view = CollectionView::with_rows(rows, 5);

        view.sort_by(IntegrationSortKey::Type);
        assert_eq!(ids(&view.sorted_rows()), ["1", "2", "3", "4"]);
        view.sort_by(IntegrationSortKey::Type);
        assert_eq!(ids(&view.sorted_rows()), ["4", "3", "2", "1"]);

        view.sort_by(IntegrationSortKey::Rate);
        assert_eq!(ids(&view.sorted_rows()), ["3", "1", "2", "4"]);
        view.sort_by(IntegrationSortKey::Rate);
        assert_eq!(ids(&view.sorted_rows()), ["4", "2", "1", "3"]);
    }

    #[test]
    fn starts_sorted_by_application() {
        let rows = Arc::new(vec![
            row("1", "Stripe", 33.0),
            row("2", "Zapier", 27.0),
            row("3", "Shopify", 40.0),
        ]);
        let view = CollectionView::with_rows(rows, 5);
        assert_eq!(ids(&view.sorted_rows()), ["3", "1", "2"]);
        assert_eq!(view.rows()[0].id, "1");
    }

    #[test]
    fn five_rows_two_per_page() {
        let mut view = CollectionView::with_rows(five_rows(), 2);
        assert_eq!(view.page_count(), 3);
        assert_eq!(ids(&view.paged_rows()), ["r1", "r2"]);
        view.next();
        assert_eq!(ids(&view.paged_rows()), ["r3", "r4"]);
        view.next();
        assert_eq!(ids(&view.paged_rows()), ["r5"]);
        view.next();
        assert_eq!(view.page(), 3);
    }

    #[test]
    fn pages_cover_sorted_rows() {
        for size in 1..=6 {
            let mut view = CollectionView::with_rows(five_rows(), size);
            let mut seen = Vec::new();
            for page in 1..=view.page_count() {
                view.set_page(page);
                seen.extend(ids(&view.paged_rows()));
            }
            assert_eq!(seen, ids(&view.sorted_rows()), "page size {size}");
        }
    }

    #[test]
    fn empty_collection_has_one_page() {
        let mut view = CollectionView::<Integration>::new(5);
        assert_eq!(view.page_count(), 1);
        assert!(view.paged_rows().is_empty());
        view.set_page(7);
        assert_eq!(view.page(), 1);
        view.prev();
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn page_size_clamps_and_reclamps_page() {
        let mut view = CollectionView::with_rows(five_rows(), 1);
        view.set_page(5);
        view.set_page_size(2);
        assert_eq!(view.page(), 3);
        view.set_page_size(0);
        assert_eq!(view.page_size(), 1);
    }

    #[test]
    fn set_rows_keeps_page_past_end() {
        let mut view = CollectionView::with_rows(five_rows(), 2);
        view.set_page(3);
        view.set_rows(Arc::new(vec![row("x", "X", 1.0)]));
        assert_eq!(view.page(), 3);
        assert!(view.paged_rows().is_empty());
    }

    #[test]
    fn empty_collection_is_neither_all_nor_some_checked() {
        let view = CollectionView::<Integration>::new(5);
        assert!(!view.all_checked());
        assert!(!view.some_checked());
    }

    #[test]
    fn selection_tracks_ids() {
        let mut view = CollectionView::with_rows(five_rows(), 2);
        view.toggle_selection("r2");
        assert!(view.is_selected("r2"));
        assert!(view.some_checked());
        assert!(!view.all_checked());

        view.toggle_all(true);
        assert!(view.all_checked());
        assert!(!view.some_checked());
        assert_eq!(view.selected_count(), 5);

        view.set_selected("r4", false);
        assert_eq!(ids(&view.selected_rows()), ["r1", "r2", "r3", "r5"]);

        view.toggle_all(false);
        assert_eq!(view.selected_count(), 0);

        view.set_selected("missing", true);
        assert!(!view.is_selected("missing"));
    }

    #[test]
    fn set_rows_seeds_selection_from_rows() {
        let mut picked = row("b", "B", 2.0);
        picked.is_selected = true;
        let view = CollectionView::with_rows(Arc::new(vec![row("a", "A", 1.0), picked]), 5);
        assert!(view.is_selected("b"));
        assert!(!view.is_selected("a"));
    }

    #[test]
    fn update_row_copies_shared_snapshot() {
        let rows = five_rows();
        let mut view = CollectionView::with_rows(Arc::clone(&rows), 5);
        view.sort_by(IntegrationSortKey::Rate);

        assert!(view.update_row("r1", |r| r.update_rate(150.0)));
        assert!((view.rows()[0].rate - 100.0).abs() < f64::EPSILON);
        assert!((rows[0].rate - 1.0).abs() < f64::EPSILON);
        assert_eq!(ids(&view.sorted_rows()).last().map(String::as_str), Some("r1"));

        assert!(!view.update_row("missing", |r| r.update_profit(-1.0)));
    }
}
