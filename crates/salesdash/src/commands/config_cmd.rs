//! Config subcommand handlers.

use tracing::debug;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = match global.output {
                OutputFormat::Table | OutputFormat::Plain => toml::to_string_pretty(&cfg)
                    .map_err(|e| CliError::Render(e.to_string()))?,
                _ => output::render_single(&global.output, &cfg, |_| String::new(), |_| {
                    String::new()
                })?,
            };
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init { api_url, force } => {
            let path = config::config_path();
            if path.exists() && !force {
                return Err(CliError::Validation {
                    field: "config".into(),
                    reason: format!("{} already exists (use --force to overwrite)", path.display()),
                });
            }

            let mut cfg = Config::starter();
            if let Some(url) = api_url {
                url::Url::parse(&url).map_err(|_| CliError::Validation {
                    field: "api-url".into(),
                    reason: format!("invalid URL: {url}"),
                })?;
                if let Some(profile) = cfg.profiles.get_mut("default") {
                    profile.api_url = url;
                }
            }

            let written = config::save_config(&cfg)?;
            debug!(path = %written.display(), "config written");
            output::print_output(
                &format!("Config written to {}", written.display()),
                global.quiet,
            );
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load_config()?;
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            let mut names: Vec<&String> = cfg.profiles.keys().collect();
            names.sort();
            let lines: Vec<String> = names
                .into_iter()
                .map(|name| {
                    let marker = if name == default { "*" } else { " " };
                    format!("{marker} {name}\t{}", cfg.profiles[name].api_url)
                })
                .collect();
            if lines.is_empty() {
                output::print_output("No profiles configured.", global.quiet);
            } else {
                output::print_output(&lines.join("\n"), global.quiet);
            }
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;
            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: config::available_profiles(&cfg),
                    name,
                });
            }
            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            output::print_output(&format!("Default profile set to '{name}'"), global.quiet);
            Ok(())
        }
    }
}
