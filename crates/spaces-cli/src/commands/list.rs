//! Implementation of the `spaces list` command.

use spaces_core::domain::UserId;

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let store = super::open_store(&global, &config)?;

    let spaces = match args.owner.as_deref() {
        Some(owner) => store.list_owned_by(&UserId::from(owner))?,
        None => store.list()?,
    };

    match args.format {
        ListFormat::Table => {
            if spaces.is_empty() {
                output.info("No spaces found")?;
                return Ok(());
            }
            output.header(&format!("Spaces in {}:", store.path().display()))?;
            for space in &spaces {
                output.space_row(space)?;
            }
        }

        ListFormat::Json => {
            // JSON must stay parseable in pipes and in quiet mode.
            let json = serde_json::to_string_pretty(&spaces).map_err(std::io::Error::from)?;
            output.data(&json)?;
        }

        ListFormat::List => {
            for space in &spaces {
                output.data(space.id().as_str())?;
            }
        }
    }

    Ok(())
}
