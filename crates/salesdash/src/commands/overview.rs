//! Revenue overview handler.

use std::fmt::Write;

use tabled::Tabled;

use salesdash_core::model::format;
use salesdash_core::{Dashboard, SalesOverview};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "Target")]
    target: String,
}

fn detail(o: &SalesOverview) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total revenue: ${}", format::en_us(o.total_revenue));
    let _ = writeln!(out, "Total target:  ${}", format::en_us(o.total_target));
    let _ = writeln!(
        out,
        "Achieved:      {}% ({})",
        format::en_us(o.revenue_target_ratio() * 100.0),
        if o.is_target_met() { "target met" } else { "below target" }
    );
    if !o.is_target_met() {
        let _ = writeln!(
            out,
            "Gap:           ${} ({}%)",
            format::en_us(o.target_gap()),
            format::en_us(o.target_gap_percentage())
        );
    }
    if !o.data.is_empty() {
        let rows: Vec<MonthRow> = o
            .data
            .iter()
            .map(|p| MonthRow {
                month: p.month.clone(),
                revenue: format::en_us(p.revenue),
                target: format::en_us(p.target),
            })
            .collect();
        let _ = write!(out, "\n{}", output::render_table(&rows));
    }
    out
}

pub async fn handle(dashboard: &Dashboard, global: &GlobalOpts) -> Result<(), CliError> {
    let overview = util::load(dashboard.overview()).await?;
    let Some(overview) = overview else {
        util::empty_notice("sales overview", true, global);
        if !global.output.is_human() {
            output::print_output("null", global.quiet);
        }
        return Ok(());
    };

    let out = output::render_single(&global.output, &overview, detail, |o| {
        o.months()
            .iter()
            .zip(o.revenue_series())
            .zip(o.target_series())
            .map(|((m, r), t)| format!("{m}\t{r}\t{t}"))
            .collect::<Vec<_>>()
            .join("\n")
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
