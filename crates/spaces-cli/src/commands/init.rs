//! `spaces init`: write the demo data file and a default configuration.

use std::path::Path;

use tracing::{debug, instrument};

use spaces_adapters::{JsonFileSpaceStore, Snapshot};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Create the data file and the configuration file.
///
/// Existing files are left alone unless `--force` is given; each file is
/// handled on its own so a half-initialised setup can be completed.
#[instrument(skip_all, fields(force = args.force))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    output.info("Initialising spaces...")?;

    let data_file = config.data_file(global.data_file.as_deref()).to_path_buf();

    if data_file.exists() && !args.force {
        output.warning(&format!(
            "Data file already exists at {}  (use --force to overwrite)",
            data_file.display(),
        ))?;
    } else {
        let store = JsonFileSpaceStore::create(&data_file, Snapshot::demo())?;
        debug!(path = %store.path().display(), spaces = store.list()?.len(), "Data file written");
        output.success(&format!("Demo data written to {}", data_file.display()))?;
    }

    let config_path = AppConfig::config_path();

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let mut written = AppConfig::default();
    written.store.data_file = data_file;
    write_config(&written, &config_path)?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

fn write_config(config: &AppConfig, path: &Path) -> CliResult<()> {
    let toml = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(path, &toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", path.display()),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn written_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.store.data_file = dir.path().join("spaces.json");
        write_config(&config, &path).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.store.data_file, config.store.data_file);
        assert!(loaded.identity.user.is_none());
    }
}
