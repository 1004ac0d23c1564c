//! Integrations table handler.
//!
//! Loads the integrations store, drives a `CollectionView` from the
//! flags, and renders the current page.

use serde::Serialize;
use tabled::Tabled;

use salesdash_core::{
    CollectionView, Dashboard, Integration, IntegrationSortKey, PAGE_SIZES, SortDir,
};

use crate::cli::{GlobalOpts, IntegrationsArgs, offered_page_sizes};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct IntegrationRow {
    #[tabled(rename = "")]
    selected: &'static str,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Application")]
    application: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Profit")]
    profit: String,
}

impl IntegrationRow {
    fn new(row: &Integration, selected: bool) -> Self {
        Self {
            selected: if selected { "[x]" } else { "[ ]" },
            id: row.id.clone(),
            application: row.application.clone(),
            kind: row.kind.clone(),
            rate: row.formatted_rate(),
            profit: row.formatted_profit(),
        }
    }
}

/// One row of a structured page. `is_selected` reflects the view's
/// selection, not the flag the backend sent.
#[derive(Serialize)]
struct PageRow<'a> {
    id: &'a str,
    application: &'a str,
    logo: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    rate: f64,
    profit: f64,
    is_selected: bool,
}

impl<'a> PageRow<'a> {
    fn new(row: &'a Integration, view: &CollectionView<Integration>) -> Self {
        Self {
            id: &row.id,
            application: &row.application,
            logo: &row.logo,
            kind: &row.kind,
            rate: row.rate,
            profit: row.profit,
            is_selected: view.is_selected(&row.id),
        }
    }
}

/// Structured form of one rendered page.
#[derive(Serialize)]
struct IntegrationPage<'a> {
    page: usize,
    page_count: usize,
    page_size: usize,
    total: usize,
    sort: IntegrationSortKey,
    dir: SortDir,
    selected: Vec<&'a str>,
    rows: Vec<PageRow<'a>>,
}

impl<'a> IntegrationPage<'a> {
    fn new(view: &'a CollectionView<Integration>) -> Self {
        Self {
            page: view.page(),
            page_count: view.page_count(),
            page_size: view.page_size(),
            total: view.len(),
            sort: view.sort_key(),
            dir: view.sort_dir(),
            selected: view.selected_rows().iter().map(|r| r.id.as_str()).collect(),
            rows: view
                .paged_rows()
                .into_iter()
                .map(|r| PageRow::new(r, view))
                .collect(),
        }
    }
}

// ── View driving ────────────────────────────────────────────────────

/// Apply the sort, paging and selection flags to `view`.
fn apply_args(
    view: &mut CollectionView<Integration>,
    args: &IntegrationsArgs,
) -> Result<(), CliError> {
    if let Some(size) = args.page_size {
        let size = usize::from(size);
        if !PAGE_SIZES.contains(&size) {
            tracing::info!(size, offered = %offered_page_sizes(), "non-standard page size");
        }
        view.set_page_size(size);
    }

    if view.sort_key() != args.sort {
        view.sort_by(args.sort);
    }
    if args.desc {
        view.sort_by(args.sort);
    }

    if args.select_all {
        view.toggle_all(true);
    }
    for id in &args.select {
        if !view.rows().iter().any(|r| r.id == *id) {
            return Err(CliError::NotFound {
                resource_type: "integration".into(),
                identifier: id.clone(),
                list_command: "integrations".into(),
            });
        }
        view.set_selected(id, true);
    }

    view.set_page(args.page);
    Ok(())
}

fn footer(view: &CollectionView<Integration>) -> String {
    let selection = if view.all_checked() {
        "all selected".to_owned()
    } else if view.some_checked() {
        format!("{} selected", view.selected_count())
    } else {
        "none selected".to_owned()
    };
    format!(
        "Page {}/{} · {} integrations · sorted by {} {} · {}",
        view.page(),
        view.page_count(),
        view.len(),
        view.sort_key(),
        view.sort_dir(),
        selection
    )
}

fn detail(view: &CollectionView<Integration>) -> String {
    let rows: Vec<IntegrationRow> = view
        .paged_rows()
        .into_iter()
        .map(|r| IntegrationRow::new(r, view.is_selected(&r.id)))
        .collect();
    format!("{}\n{}", output::render_table(&rows), footer(view))
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    dashboard: &Dashboard,
    args: IntegrationsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let rows = util::load(dashboard.integrations()).await?;
    if util::empty_notice("integrations", rows.is_empty(), global) {
        return Ok(());
    }

    let mut view = dashboard.integrations_view();
    apply_args(&mut view, &args)?;

    let out = match global.output {
        crate::cli::OutputFormat::Table => detail(&view),
        _ => output::render_single(
            &global.output,
            &IntegrationPage::new(&view),
            |_| String::new(),
            |page| {
                page.rows
                    .iter()
                    .map(|r| r.id)
                    .collect::<Vec<_>>()
                    .join("\n")
            },
        )?,
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn row(id: &str, rate: f64) -> Integration {
        Integration {
            id: id.into(),
            application: format!("App {id}"),
            logo: String::new(),
            kind: "CRM".into(),
            rate,
            profit: 1.0,
            is_selected: false,
        }
    }

    fn args() -> IntegrationsArgs {
        IntegrationsArgs {
            sort: IntegrationSortKey::Application,
            desc: false,
            page: 1,
            page_size: None,
            select: Vec::new(),
            select_all: false,
        }
    }

    fn view() -> CollectionView<Integration> {
        CollectionView::with_rows(
            Arc::new(vec![row("A", 75.0), row("B", 45.0), row("C", 90.0)]),
            5,
        )
    }

    #[test]
    fn desc_on_default_key_reverses() {
        let mut v = view();
        apply_args(&mut v, &IntegrationsArgs { desc: true, ..args() }).unwrap();
        let ids: Vec<&str> = v.sorted_rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["C", "B", "A"]);
    }

    #[test]
    fn rate_sort_and_selection() {
        let mut v = view();
        let a = IntegrationsArgs {
            sort: IntegrationSortKey::Rate,
            select: vec!["A".into()],
            ..args()
        };
        apply_args(&mut v, &a).unwrap();
        let ids: Vec<&str> = v.sorted_rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["B", "A", "C"]);
        assert!(v.is_selected("A"));
        assert!(footer(&v).contains("1 selected"));
    }

    #[test]
    fn unknown_selection_is_not_found() {
        let mut v = view();
        let a = IntegrationsArgs {
            select: vec!["Z".into()],
            ..args()
        };
        assert!(matches!(
            apply_args(&mut v, &a),
            Err(CliError::NotFound { .. })
        ));
    }

    #[test]
    fn structured_rows_agree_with_selection() {
        let mut v = view();
        apply_args(&mut v, &IntegrationsArgs { select_all: true, ..args() }).unwrap();
        let page = serde_json::to_value(IntegrationPage::new(&v)).unwrap();
        assert_eq!(page["selected"], serde_json::json!(["A", "B", "C"]));
        let flagged: Vec<&str> = page["rows"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|r| r["is_selected"] == true)
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(flagged, ["A", "B", "C"]);

        let mut v = view();
        let a = IntegrationsArgs {
            select: vec!["B".into()],
            ..args()
        };
        apply_args(&mut v, &a).unwrap();
        let page = serde_json::to_value(IntegrationPage::new(&v)).unwrap();
        assert_eq!(page["rows"][0]["is_selected"], false);
        assert_eq!(page["rows"][1]["id"], "B");
        assert_eq!(page["rows"][1]["is_selected"], true);
        assert_eq!(page["rows"][1]["type"], "CRM");
    }

    #[test]
    fn page_is_clamped() {
        let mut v = view();
        let a = IntegrationsArgs {
            page: 9,
            page_size: Some(2),
            ..args()
        };
        apply_args(&mut v, &a).unwrap();
        assert_eq!(v.page(), 2);
        assert_eq!(v.paged_rows().len(), 1);
    }
}
