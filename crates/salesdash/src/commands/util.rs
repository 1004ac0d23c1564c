//! Shared helpers for command handlers.

use salesdash_core::{Resource, ResourcePort, ResourceStore, ViewStatus};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// Load `store` and hand back its data, or its error as a `CliError`.
pub async fn load<R, P>(store: &ResourceStore<R, P>) -> Result<R::Data, CliError>
where
    R: Resource,
    P: ResourcePort<R>,
{
    store.load().await;
    match store.status() {
        ViewStatus::Failed(message) => Err(CliError::LoadFailed {
            resource: R::NAME.into(),
            message,
        }),
        _ => Ok(store.data()),
    }
}

/// Print the empty-state line for human formats. Returns true when the
/// caller should stop rendering.
pub fn empty_notice(what: &str, is_empty: bool, global: &GlobalOpts) -> bool {
    if !is_empty || !global.output.is_human() {
        return false;
    }
    output::print_output(&format!("No {what} available."), global.quiet);
    true
}
