//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into calls on the core services and
//! render the result. No business rule lives here.

use spaces_adapters::JsonFileSpaceStore;
use tracing::debug;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

pub mod completions;
pub mod config;
pub mod delete;
pub mod init;
pub mod list;
pub mod play_next;

/// Open the data file selected by `--data` or `store.data_file`.
fn open_store(global: &GlobalArgs, config: &AppConfig) -> CliResult<JsonFileSpaceStore> {
    let path = config.data_file(global.data_file.as_deref());
    debug!(path = %path.display(), "Opening data file");
    Ok(JsonFileSpaceStore::open(path)?)
}
