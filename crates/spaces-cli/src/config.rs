//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SPACES_<SECTION>__<KEY>`, e.g. `SPACES_IDENTITY__USER`
//! 3. Config file (`--config`, else [`AppConfig::config_path`] when present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "SPACES";

/// Application configuration.
///
/// Every section is optional in a file: a missing one takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the spaces live.
    pub store: StoreConfig,
    /// Who is acting when `--as` is omitted.
    pub identity: IdentityConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                data_file: Self::default_data_file(),
            },
            identity: IdentityConfig::default(),
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => config::File::from(path.as_path()).required(true),
            None => config::File::from(Self::config_path()).required(false),
        };

        Self::load_from(file, Self::environment())
    }

    fn load_from(
        file: config::File<config::FileSourceFile, config::FileFormat>,
        env: config::Environment,
    ) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to seed configuration defaults")?;

        config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.spaces.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "spaces", "spaces")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".spaces.toml"))
    }

    /// Path to the default data file.
    pub fn default_data_file() -> PathBuf {
        directories::ProjectDirs::from("com", "spaces", "spaces")
            .map(|d| d.data_dir().join("spaces.json"))
            .unwrap_or_else(|| PathBuf::from("spaces.json"))
    }

    /// The data file to use, honouring a `--data` override.
    pub fn data_file<'a>(&'a self, overridden: Option<&'a Path>) -> &'a Path {
        overridden.unwrap_or(&self.store.data_file)
    }
}
