//! Implementation of the `spaces play-next` command.

use tracing::instrument;

use spaces_adapters::InMemoryPlaylist;
use spaces_core::application::PlayNextService;

use crate::{
    cli::{GlobalArgs, PlayNextArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(current = %args.current))]
pub fn execute(
    args: PlayNextArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let store = super::open_store(&global, &config)?;
    let playlist = InMemoryPlaylist::from(store.playlist()?);
    let service = PlayNextService::new(Box::new(playlist));

    match service.play_next(&args.current)? {
        Some(next) => output.data(next.as_str())?,
        None => output.info(&format!("Nothing to play after '{}'", args.current))?,
    }

    Ok(())
}
