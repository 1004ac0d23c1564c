//! Sales metric card handlers.

use tabled::Tabled;

use salesdash_core::{Dashboard, SaleMetric};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    title: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl MetricRow {
    fn new(m: &SaleMetric, color: bool) -> Self {
        Self {
            title: m.title.clone(),
            value: m.formatted_value(),
            change: output::paint_change(&m.formatted_change(), m.change_type, color),
            description: m.description.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(dashboard: &Dashboard, global: &GlobalOpts) -> Result<(), CliError> {
    let metrics = util::load(dashboard.metrics()).await?;
    if util::empty_notice("sales metrics", metrics.is_empty(), global) {
        return Ok(());
    }

    let color = output::should_color(&global.color);
    let out = output::render_list(
        &global.output,
        &metrics,
        |m| MetricRow::new(m, color),
        |m| format!("{}\t{}", m.title, m.formatted_value()),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
