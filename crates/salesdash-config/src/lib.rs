//! Shared configuration for the salesdash CLI.
//!
//! TOML profiles layered with `SALESDASH_` environment variables, and
//! translation to `salesdash_core::DashboardConfig`. The CLI adds
//! flag-aware overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use salesdash_core::{
    DEFAULT_API_URL, DEFAULT_PAGE_SIZE, DashboardConfig, Endpoints, TlsVerification,
};

/// Environment variable that points at an alternate config file.
pub const CONFIG_ENV: &str = "SALESDASH_CONFIG";

/// Prefix for environment overrides. Nested keys use `__`
/// (`SALESDASH_DEFAULTS__TIMEOUT=5`).
pub const ENV_PREFIX: &str = "SALESDASH_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found in config")]
    UnknownProfile { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Starter config written by `config init`.
    pub fn starter() -> Self {
        let mut cfg = Self::default();
        cfg.profiles.insert("default".into(), Profile::default());
        cfg
    }

    /// Pick a profile: the explicit name, else `default_profile`, else
    /// `"default"`. An explicitly requested profile must exist; the
    /// implicit one falls back to built-in values.
    pub fn resolve_profile(&self, name: Option<&str>) -> Result<(String, Profile), ConfigError> {
        if let Some(name) = name {
            return self
                .profiles
                .get(name)
                .cloned()
                .map(|p| (name.to_owned(), p))
                .ok_or_else(|| ConfigError::UnknownProfile { name: name.into() });
        }
        let name = self
            .default_profile
            .clone()
            .unwrap_or_else(|| "default".into());
        let profile = self.profiles.get(&name).cloned().unwrap_or_default();
        Ok((name, profile))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
            page_size: default_page_size(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// A named backend profile.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    /// Backend base URL (e.g., "https://api.example.com").
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Resource id overrides; unset ids use the built-in table.
    #[serde(default)]
    pub endpoints: EndpointOverrides,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,

    /// Override integrations page size.
    pub page_size: Option<usize>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            endpoints: EndpointOverrides::default(),
            ca_cert: None,
            insecure: None,
            timeout: None,
            page_size: None,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.into()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointOverrides {
    pub sales_metrics: Option<String>,
    pub sales_overview: Option<String>,
    pub sales_region: Option<String>,
    pub registered_users: Option<String>,
    pub integrations: Option<String>,
}

impl EndpointOverrides {
    /// Built-in ids with any overrides applied.
    pub fn resolve(&self) -> Endpoints {
        let base = Endpoints::default();
        Endpoints {
            sales_metrics: self.sales_metrics.clone().unwrap_or(base.sales_metrics),
            sales_overview: self.sales_overview.clone().unwrap_or(base.sales_overview),
            sales_region: self.sales_region.clone().unwrap_or(base.sales_region),
            registered_users: self
                .registered_users
                .clone()
                .unwrap_or(base.registered_users),
            integrations: self.integrations.clone().unwrap_or(base.integrations),
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path: `SALESDASH_CONFIG` if set, else the
/// platform config directory.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    ProjectDirs::from("com", "salesdash", "salesdash").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("salesdash");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` + environment. A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Runtime translation ─────────────────────────────────────────────

/// Build a `DashboardConfig` from a profile and the global defaults.
pub fn profile_to_dashboard_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<DashboardConfig, ConfigError> {
    let api_url: url::Url = profile
        .api_url
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("invalid URL: {}", profile.api_url),
        })?;

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let page_size = profile.page_size.unwrap_or(defaults.page_size);
    if page_size == 0 {
        return Err(ConfigError::Validation {
            field: "page_size".into(),
            reason: "must be at least 1".into(),
        });
    }

    Ok(DashboardConfig {
        api_url,
        endpoints: profile.endpoints.resolve(),
        tls,
        timeout: Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout)),
        page_size,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::*;

    fn load(jail: &Jail) -> figment::error::Result<Config> {
        load_config_from(&jail.directory().join("config.toml")).map_err(|e| e.to_string().into())
    }

    #[test]
    fn defaults_apply_without_file() {
        Jail::expect_with(|jail| {
            let cfg = load(jail)?;
            assert_eq!(cfg, Config::default());
            assert_eq!(cfg.defaults.timeout, 30);
            assert_eq!(cfg.defaults.page_size, DEFAULT_PAGE_SIZE);
            Ok(())
        });
    }

    #[test]
    fn file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                default_profile = "staging"

                [defaults]
                timeout = 10

                [profiles.staging]
                api_url = "https://staging.example.com"
                page_size = 20

                [profiles.staging.endpoints]
                integrations = "abcd-0000"
                "#,
            )?;
            let cfg = load(jail)?;
            assert_eq!(cfg.defaults.timeout, 10);
            assert_eq!(cfg.defaults.output, "table");

            let (name, profile) = cfg.resolve_profile(None).map_err(|e| e.to_string())?;
            assert_eq!(name, "staging");
            assert_eq!(profile.page_size, Some(20));
            assert_eq!(profile.endpoints.resolve().integrations, "abcd-0000");
            assert_eq!(
                profile.endpoints.resolve().sales_metrics,
                Endpoints::default().sales_metrics
            );
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[defaults]\ntimeout = 10\n")?;
            jail.set_env("SALESDASH_DEFAULTS__TIMEOUT", "5");
            jail.set_env("SALESDASH_DEFAULT_PROFILE", "local");
            let cfg = load(jail)?;
            assert_eq!(cfg.defaults.timeout, 5);
            assert_eq!(cfg.default_profile.as_deref(), Some("local"));
            Ok(())
        });
    }

    #[test]
    fn explicit_unknown_profile_is_an_error() {
        let cfg = Config::default();
        assert!(matches!(
            cfg.resolve_profile(Some("prod")),
            Err(ConfigError::UnknownProfile { .. })
        ));
        let (name, profile) = cfg.resolve_profile(None).unwrap();
        assert_eq!(name, "default");
        assert_eq!(profile.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn profile_translation() {
        let defaults = Defaults {
            insecure: false,
            timeout: 12,
            ..Defaults::default()
        };
        let profile = Profile {
            api_url: "https://api.example.com".into(),
            ca_cert: Some(PathBuf::from("/etc/ca.pem")),
            ..Profile::default()
        };
        let cfg = profile_to_dashboard_config(&profile, &defaults).unwrap();
        assert_eq!(cfg.api_url.as_str(), "https://api.example.com/");
        assert_eq!(cfg.timeout, Duration::from_secs(12));
        assert_eq!(cfg.tls, TlsVerification::CustomCa(PathBuf::from("/etc/ca.pem")));

        let insecure = Profile {
            insecure: Some(true),
            ..profile.clone()
        };
        let cfg = profile_to_dashboard_config(&insecure, &defaults);
        assert!(matches!(
            cfg.map(|c| c.tls),
            Ok(TlsVerification::DangerAcceptInvalid)
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let bad_url = Profile {
            api_url: "not a url".into(),
            ..Profile::default()
        };
        assert!(matches!(
            profile_to_dashboard_config(&bad_url, &Defaults::default()),
            Err(ConfigError::Validation { .. })
        ));

        let zero_page = Profile {
            page_size: Some(0),
            ..Profile::default()
        };
        assert!(matches!(
            profile_to_dashboard_config(&zero_page, &Defaults::default()),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn save_then_load_keeps_profiles() {
        Jail::expect_with(|jail| {
            let path = jail.directory().join("nested").join("config.toml");
            let cfg = Config::starter();
            save_config_to(&cfg, &path).map_err(|e| e.to_string())?;
            let loaded = load_config_from(&path).map_err(|e| e.to_string())?;
            assert_eq!(loaded, cfg);
            Ok(())
        });
    }
}
