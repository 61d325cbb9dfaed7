use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Run options merged from CLI args, env vars, the config file and defaults.
/// The rest of the config file is read by `docsplit_core::Config`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocsplitConfig {
    pub run: RunConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunConfig {
    /// Markdown document to split
    pub input: String,
    /// Directory the pages are written to
    pub output: String,
    /// Manifest file, relative to the output directory
    pub manifest: String,
    /// Configuration file path
    pub config: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: "./README.md".to_string(),
            output: ".".to_string(),
            manifest: "toc.yaml".to_string(),
            config: "./docsplit.toml".to_string(),
        }
    }
}

const OVERRIDABLE: [&str; 4] = ["input", "output", "manifest", "config"];

impl DocsplitConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (DOCSPLIT_*)
    /// 3. `[run]` table of the configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let defaults = Self::default();
        let config_file = cli_value(args, "config").unwrap_or(defaults.run.config.clone());

        let mut builder = ConfigBuilder::builder().add_source(ConfigBuilder::try_from(&defaults)?);

        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::new(&config_file, FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("DOCSPLIT")
                .prefix_separator("_")
                .separator("__"), // Use double underscore for nested keys
        );

        for key in OVERRIDABLE {
            if let Some(value) = cli_value(args, key) {
                builder = builder.set_override(format!("run.{key}"), value)?;
            }
        }

        let config: DocsplitConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    pub fn run_config(&self) -> &RunConfig {
        &self.run
    }
}

/// Subcommands don't all define every argument, so a missing one is not an error.
fn cli_value(args: &ArgMatches, id: &str) -> Option<String> {
    args.try_get_one::<String>(id).ok().flatten().cloned()
}
