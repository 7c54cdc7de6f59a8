//! Tool configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. It holds
//! the defaults `chainkit quick` falls back to and output preferences; the
//! per-project `chainkit.json` is a separate document owned by the core crate.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site)
//! 2. `CHAINKIT__SECTION__KEY` environment variables
//! 3. Config file (`--config FILE`, else the platform config dir)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use chainkit_core::domain::{NetworkSelector, PackageManager};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Keys accepted by `chainkit config get`.
pub const KEYS: &[&str] = &[
    "defaults.solidity_version",
    "defaults.network",
    "defaults.package_manager",
    "output.no_color",
    "output.format",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub defaults: Defaults,
    pub output: OutputConfig,
}

/// Fallbacks for `chainkit quick` flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub solidity_version: String,
    pub network: String,
    pub package_manager: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                solidity_version: "0.8.6".into(),
                network: "all".into(),
                package_manager: "yarn".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Layer defaults, the config file and the environment.
    ///
    /// An explicit `--config` path must exist; the platform default is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> CliResult<Self> {
        let defaults = Self::default();

        let config = Config::builder()
            .set_default("defaults.solidity_version", defaults.defaults.solidity_version)
            .and_then(|b| b.set_default("defaults.network", defaults.defaults.network))
            .and_then(|b| {
                b.set_default("defaults.package_manager", defaults.defaults.package_manager)
            })
            .and_then(|b| b.set_default("output.no_color", defaults.output.no_color))
            .and_then(|b| b.set_default("output.format", defaults.output.format))
            .map_err(config_error)?
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix("CHAINKIT")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .map_err(config_error)?;

        let loaded: Self = config.try_deserialize().map_err(config_error)?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Path to the default configuration file.
    ///
    /// Falls back to `.chainkit.toml` in the current directory when no home
    /// directory can be determined.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "chainkit", "chainkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".chainkit.toml"))
    }

    /// Look up a dotted key for `chainkit config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.solidity_version" => self.defaults.solidity_version.clone(),
            "defaults.network" => self.defaults.network.clone(),
            "defaults.package_manager" => self.defaults.package_manager.clone(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return None,
        };
        Some(value)
    }

    pub fn network(&self) -> CliResult<NetworkSelector> {
        self.defaults.network.parse().map_err(|e| CliError::ConfigError {
            message: format!("defaults.network: {e}"),
            source: None,
        })
    }

    pub fn package_manager(&self) -> CliResult<PackageManager> {
        self.defaults
            .package_manager
            .parse()
            .map_err(|e| CliError::ConfigError {
                message: format!("defaults.package_manager: {e}"),
                source: None,
            })
    }

    // ----- Internal Helpers -----

    fn validate(&self) -> CliResult<()> {
        self.network()?;
        self.package_manager()?;
        if self.defaults.solidity_version.trim().is_empty() {
            return Err(CliError::ConfigError {
                message: "defaults.solidity_version cannot be empty".into(),
                source: None,
            });
        }
        Ok(())
    }
}

impl OutputConfig {
    /// Output format requested by the config file; unknown values mean auto.
    pub fn format_hint(&self) -> OutputFormat {
        match self.format.to_ascii_lowercase().as_str() {
            "human" => OutputFormat::Human,
            "plain" => OutputFormat::Plain,
            "json" => OutputFormat::Json,
            _ => OutputFormat::Auto,
        }
    }
}

fn config_error(err: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}
