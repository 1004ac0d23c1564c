//! Registered users handler.

use std::fmt::Write;

use salesdash_core::{Dashboard, RegisteredUsers};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

fn detail(u: &RegisteredUsers) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total:   {}", u.total);
    let _ = writeln!(out, "Premium: {} ({:.1}%)", u.premium, u.premium_percentage());
    let _ = write!(out, "Basic:   {} ({:.1}%)", u.basic, u.basic_percentage());
    out
}

pub async fn handle(dashboard: &Dashboard, global: &GlobalOpts) -> Result<(), CliError> {
    let users = util::load(dashboard.users()).await?;
    let Some(users) = users else {
        util::empty_notice("registered users", true, global);
        if !global.output.is_human() {
            output::print_output("null", global.quiet);
        }
        return Ok(());
    };

    let out = output::render_single(&global.output, &users, detail, |u| {
        format!("{}\t{}\t{}", u.total, u.premium, u.basic)
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
