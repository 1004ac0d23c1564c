//! CLI configuration -- thin wrapper around `salesdash_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--api-url, --insecure, --timeout).

use std::time::Duration;

use salesdash_core::{DashboardConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use salesdash_config::{
    Config, ConfigError, Profile, config_path, load_config, load_config_or_default,
    profile_to_dashboard_config, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Build a `DashboardConfig` from the config file, profile, and flags.
///
/// Flag overrides take priority over profile values, which take priority
/// over `[defaults]`.
pub fn resolve_dashboard_config(global: &GlobalOpts) -> Result<DashboardConfig, CliError> {
    let cfg = load_config()?;
    let (name, profile) = cfg
        .resolve_profile(global.profile.as_deref())
        .map_err(|err| match err {
            ConfigError::UnknownProfile { name } => CliError::ProfileNotFound {
                name,
                available: available_profiles(&cfg),
            },
            other => other.into(),
        })?;
    tracing::debug!(profile = %name, "resolved profile");

    let mut dash = profile_to_dashboard_config(&profile, &cfg.defaults)?;
    apply_overrides(&mut dash, global)?;
    Ok(dash)
}

fn apply_overrides(dash: &mut DashboardConfig, global: &GlobalOpts) -> Result<(), CliError> {
    if let Some(ref raw) = global.api_url {
        dash.api_url = raw.parse().map_err(|_| CliError::Validation {
            field: "api-url".into(),
            reason: format!("invalid URL: {raw}"),
        })?;
    }
    if global.insecure {
        dash.tls = TlsVerification::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        dash.timeout = Duration::from_secs(secs);
    }
    Ok(())
}

/// Comma-separated profile names, sorted.
pub fn available_profiles(cfg: &Config) -> String {
    let mut names: Vec<&str> = cfg.profiles.keys().map(String::as_str).collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort_unstable();
    names.join(", ")
}
