//! Clap derive structures for the `salesdash` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

use salesdash_config::Defaults;
use salesdash_core::{IntegrationSortKey, PAGE_SIZES};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// salesdash -- sales dashboard data in the terminal
#[derive(Debug, Parser)]
#[command(
    name = "salesdash",
    version,
    about = "Inspect sales dashboard data from the command line",
    long_about = "Fetches the sales dashboard resources (metrics, revenue overview,\n\
        regional sales, registered users, integrations) from the dashboard\n\
        backend and renders them as tables, JSON or YAML.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "SALESDASH_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend base URL (overrides profile)
    #[arg(long, short = 'u', env = "SALESDASH_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format (default: table, or `defaults.output` from config)
    #[arg(
        id = "output",
        long = "output",
        short = 'o',
        env = "SALESDASH_OUTPUT",
        global = true
    )]
    pub output_flag: Option<OutputFormat>,

    /// When to use color output (default: auto, or `defaults.color`)
    #[arg(id = "color", long = "color", global = true)]
    pub color_flag: Option<ColorMode>,

    /// Effective output format, set by [`GlobalOpts::resolve_display`].
    #[arg(skip)]
    pub output: OutputFormat,

    /// Effective color mode, set by [`GlobalOpts::resolve_display`].
    #[arg(skip)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "SALESDASH_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "SALESDASH_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOpts {
    /// Settle `output` and `color`: an explicit flag (or its env var)
    /// wins, then the config file's `[defaults]`, then the built-ins.
    pub fn resolve_display(&mut self, defaults: &Defaults) {
        self.output = self
            .output_flag
            .clone()
            .unwrap_or_else(|| config_setting("output", &defaults.output));
        self.color = self
            .color_flag
            .clone()
            .unwrap_or_else(|| config_setting("color", &defaults.color));
    }
}

/// Parse a `[defaults]` string, falling back to the built-in value when
/// it names no known variant.
fn config_setting<T: ValueEnum + Default>(field: &str, raw: &str) -> T {
    T::from_str(raw, true).unwrap_or_else(|reason| {
        tracing::warn!(field, value = raw, %reason, "ignoring invalid config default");
        T::default()
    })
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

impl OutputFormat {
    /// Formats meant for people rather than parsers.
    pub fn is_human(&self) -> bool {
        matches!(self, Self::Table | Self::Plain)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    #[default]
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show headline sales metrics
    #[command(alias = "m")]
    Metrics,

    /// Show monthly revenue against target
    #[command(alias = "ov")]
    Overview,

    /// Show sales by region
    #[command(alias = "reg")]
    Regions,

    /// Show registered user totals
    Users,

    /// List integrations with sorting, paging and selection
    #[command(alias = "int")]
    Integrations(IntegrationsArgs),

    /// Load everything and report the state of each resource
    Summary,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Integrations ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct IntegrationsArgs {
    /// Sort column: application (name), type, rate, profit
    #[arg(long, short = 's', default_value = "application", value_parser = parse_sort_key)]
    pub sort: IntegrationSortKey,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Page to show (clamped to the available pages)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to the profile's page size)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: Option<u16>,

    /// Mark an integration as selected (repeatable)
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,

    /// Select every integration
    #[arg(long, conflicts_with = "select")]
    pub select_all: bool,
}

fn parse_sort_key(raw: &str) -> Result<IntegrationSortKey, String> {
    raw.parse()
        .map_err(|_| format!("unknown column '{raw}' (expected application, type, rate or profit)"))
}

/// Page sizes the table offers, for help text and validation messages.
pub fn offered_page_sizes() -> String {
    PAGE_SIZES
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a starter config file
    Init {
        /// Backend URL for the default profile
        #[arg(long)]
        api_url: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Display current resolved configuration
    Show,

    /// Print the config file location
    Path,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> GlobalOpts {
        Cli::try_parse_from(args).unwrap().global
    }

    fn defaults(output: &str, color: &str) -> Defaults {
        Defaults {
            output: output.into(),
            color: color.into(),
            ..Defaults::default()
        }
    }

    #[test]
    fn config_defaults_apply_without_flags() {
        let mut global = parse(&["salesdash", "metrics"]);
        global.resolve_display(&defaults("json", "never"));
        assert_eq!(global.output, OutputFormat::Json);
        assert_eq!(global.color, ColorMode::Never);
    }

    #[test]
    fn flags_beat_config_defaults() {
        let mut global = parse(&["salesdash", "metrics", "-o", "yaml", "--color", "always"]);
        global.resolve_display(&defaults("json", "never"));
        assert_eq!(global.output, OutputFormat::Yaml);
        assert_eq!(global.color, ColorMode::Always);
    }

    #[test]
    fn unknown_config_values_fall_back_to_builtins() {
        let mut global = parse(&["salesdash", "metrics"]);
        global.resolve_display(&defaults("xml", "sometimes"));
        assert_eq!(global.output, OutputFormat::Table);
        assert_eq!(global.color, ColorMode::Auto);

        global.resolve_display(&defaults("JSON-compact", "auto"));
        assert_eq!(global.output, OutputFormat::JsonCompact);
    }
}
