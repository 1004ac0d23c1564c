//! Whole-dashboard status report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::Tabled;

use salesdash_core::{Dashboard, ViewStatus};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct StatusEntry {
    resource: &'static str,
    #[serde(flatten)]
    status: ViewStatus,
    loaded_at: Option<DateTime<Utc>>,
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Resource")]
    resource: &'static str,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Loaded")]
    loaded_at: String,
}

fn status_label(status: &ViewStatus, color: bool) -> String {
    match status {
        ViewStatus::Loading => "loading".into(),
        ViewStatus::Failed(msg) => output::paint_error(&format!("failed: {msg}"), color),
        ViewStatus::Empty => "empty".into(),
        ViewStatus::Ready => "ready".into(),
    }
}

pub async fn handle(dashboard: &Dashboard, global: &GlobalOpts) -> Result<(), CliError> {
    dashboard.load_all().await;

    let loaded = [
        dashboard.metrics().snapshot().loaded_at,
        dashboard.overview().snapshot().loaded_at,
        dashboard.regions().snapshot().loaded_at,
        dashboard.users().snapshot().loaded_at,
        dashboard.integrations().snapshot().loaded_at,
    ];
    let entries: Vec<StatusEntry> = dashboard
        .statuses()
        .into_iter()
        .zip(loaded)
        .map(|((resource, status), loaded_at)| StatusEntry {
            resource,
            status,
            loaded_at,
        })
        .collect();

    let color = output::should_color(&global.color);
    let out = output::render_list(
        &global.output,
        &entries,
        |e| StatusRow {
            resource: e.resource,
            status: status_label(&e.status, color),
            loaded_at: e
                .loaded_at
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "-".into()),
        },
        |e| format!("{}\t{}", e.resource, status_label(&e.status, false)),
    )?;
    output::print_output(&out, global.quiet);

    let failed = entries
        .iter()
        .filter(|e| matches!(e.status, ViewStatus::Failed(_)))
        .count();
    if failed > 0 {
        return Err(CliError::PartialFailure {
            failed,
            total: entries.len(),
        });
    }
    Ok(())
}
