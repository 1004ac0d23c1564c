//! Sales-by-region handler.

use tabled::Tabled;

use salesdash_core::model::format;
use salesdash_core::{Dashboard, SaleRegion};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct RegionRow {
    #[tabled(rename = "Region")]
    name: String,
    #[tabled(rename = "Sales")]
    value: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Percentage of `value` in `total`, 0 when there is nothing to share.
fn share(value: f64, total: f64) -> f64 {
    if total > 0.0 { value / total * 100.0 } else { 0.0 }
}

pub async fn handle(dashboard: &Dashboard, global: &GlobalOpts) -> Result<(), CliError> {
    let regions = util::load(dashboard.regions()).await?;
    if util::empty_notice("regional sales", regions.is_empty(), global) {
        return Ok(());
    }

    let total: f64 = regions.iter().map(|r| r.value).sum();
    let out = output::render_list(
        &global.output,
        &regions,
        |r: &SaleRegion| RegionRow {
            name: r.name.clone(),
            value: format::en_us(r.value),
            share: format!("{:.1}%", share(r.value, total)),
        },
        |r| format!("{}\t{}", r.name, r.value),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_of_empty_total_is_zero() {
        assert!(share(5.0, 0.0).abs() < f64::EPSILON);
        assert!((share(25.0, 100.0) - 25.0).abs() < f64::EPSILON);
    }
}
