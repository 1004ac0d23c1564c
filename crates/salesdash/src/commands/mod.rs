//! Command dispatch: bridges CLI args -> dashboard stores -> output formatting.

pub mod config_cmd;
pub mod integrations;
pub mod metrics;
pub mod overview;
pub mod regions;
pub mod summary;
pub mod users;
pub mod util;

use salesdash_core::Dashboard;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    dashboard: &Dashboard,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Metrics => metrics::handle(dashboard, global).await,
        Command::Overview => overview::handle(dashboard, global).await,
        Command::Regions => regions::handle(dashboard, global).await,
        Command::Users => users::handle(dashboard, global).await,
        Command::Integrations(args) => integrations::handle(dashboard, args, global).await,
        Command::Summary => summary::handle(dashboard, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
