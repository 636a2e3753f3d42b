//! Implementation of the `spaces delete` command.
//!
//! Responsibility: resolve who is acting, open the data file, and hand the
//! request to [`DeleteSpaceService`]. The service decides; this module only
//! asks for confirmation and reports.

use tracing::{info, instrument};

use spaces_core::{
    application::DeleteSpaceService,
    domain::{Space, SpaceId, UserId},
};

use crate::{
    cli::{DeleteArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `spaces delete` command.
///
/// Dispatch sequence:
/// 1. Resolve the acting user (`--as`, else `identity.user`)
/// 2. Open the data file
/// 3. `--dry-run`: run every check and report, remove nothing
/// 4. Confirm with the user unless `--yes`
/// 5. Delete via the service
#[instrument(skip_all, fields(space = %args.id))]
pub fn execute(
    args: DeleteArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let acting_user = resolve_acting_user(args.acting_user.as_deref(), &config)?;
    let id = SpaceId::new(args.id);

    let store = super::open_store(&global, &config)?;
    let service = DeleteSpaceService::new(Box::new(store));

    if args.dry_run {
        let space = service.check(&id, &acting_user)?;
        output.info(&format!(
            "Dry run: '{}' can be deleted by {}",
            space.id(),
            acting_user,
        ))?;
        return Ok(());
    }

    // Only --yes skips the prompt; --quiet silences output, not the question.
    if !args.yes {
        // Surfaces refusals before prompting; delete() still re-checks.
        let space = service.check(&id, &acting_user)?;
        show_space(&space, output)?;
        if !confirm(&space)? {
            return Err(CliError::Cancelled);
        }
    }

    service.delete(&id, &acting_user)?;
    info!(space = %id, user = %acting_user, "Delete command finished");

    output.success(&format!("Space '{id}' deleted"))?;
    Ok(())
}

/// The user named by `--as`, falling back to `identity.user`.
fn resolve_acting_user(flag: Option<&str>, config: &AppConfig) -> CliResult<UserId> {
    flag.or(config.identity.user.as_deref())
        .map(str::trim)
        .filter(|user| !user.is_empty())
        .map(UserId::from)
        .ok_or(CliError::MissingIdentity)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_space(space: &Space, out: &OutputManager) -> CliResult<()> {
    out.header("About to delete")?;
    out.print(&format!("  Space:  {}", space.id()))?;
    out.print(&format!("  Name:   {}", space.name()))?;
    out.print(&format!("  Owner:  {}", space.owner_id()))?;
    out.print("")?;
    Ok(())
}

fn confirm(space: &Space) -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Delete '{}'? [y/N] ", space.id());
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    Ok(is_affirmative(&input))
}

/// Deletion is destructive, so only an explicit yes counts.
fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
