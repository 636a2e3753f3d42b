//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "spaces",
    bin_name = "spaces",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Delete spaces safely",
    long_about = "Spaces removes a space only when the acting user owns it, \
                  it holds no resources, and it is not the owner's default space.",
    after_help = "EXAMPLES:\n\
        \x20 spaces init\n\
        \x20 spaces list --owner alice\n\
        \x20 spaces delete alice-scratch --as alice --yes\n\
        \x20 spaces play-next intro\n\
        \x20 spaces completions bash > /usr/share/bash-completion/completions/spaces",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Delete a space.
    #[command(
        visible_alias = "rm",
        about = "Delete a space",
        after_help = "EXAMPLES:\n\
            \x20 spaces delete alice-scratch --as alice\n\
            \x20 spaces delete alice-scratch --as alice --yes\n\
            \x20 spaces delete alice-projects --as alice --dry-run"
    )]
    Delete(DeleteArgs),

    /// List stored spaces.
    #[command(
        visible_alias = "ls",
        about = "List spaces",
        after_help = "EXAMPLES:\n\
            \x20 spaces list\n\
            \x20 spaces list --owner bob\n\
            \x20 spaces list --format json"
    )]
    List(ListArgs),

    /// Pick the video that follows the current one.
    #[command(
        about = "Show the next video in the playlist",
        after_help = "EXAMPLES:\n\
            \x20 spaces play-next intro"
    )]
    PlayNext(PlayNextArgs),

    /// Write the demo data file and a default configuration.
    #[command(
        about = "Initialise data and configuration",
        after_help = "EXAMPLES:\n\
            \x20 spaces init\n\
            \x20 spaces init --force\n\
            \x20 spaces --data ./spaces.json init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 spaces completions bash > ~/.local/share/bash-completion/completions/spaces\n\
            \x20 spaces completions zsh  > ~/.zfunc/_spaces\n\
            \x20 spaces completions fish > ~/.config/fish/completions/spaces.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 spaces config get identity.user\n\
            \x20 spaces config list\n\
            \x20 spaces config path"
    )]
    Config(ConfigCommands),
}

// ── delete ────────────────────────────────────────────────────────────────────

/// Arguments for `spaces delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Identifier of the space to delete.
    #[arg(value_name = "SPACE_ID", help = "Space to delete")]
    pub id: String,

    /// User performing the deletion.
    #[arg(
        long = "as",
        value_name = "USER",
        help = "Act as this user (defaults to identity.user)"
    )]
    pub acting_user: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and delete immediately")]
    pub yes: bool,

    /// Run every check without removing anything.
    #[arg(long = "dry-run", help = "Check whether the space could be deleted")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `spaces list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show spaces owned by this user.
    #[arg(short = 'o', long = "owner", value_name = "USER", help = "Filter by owner")]
    pub owner: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
}

// ── play-next ─────────────────────────────────────────────────────────────────

/// Arguments for `spaces play-next`.
#[derive(Debug, Args)]
pub struct PlayNextArgs {
    /// Video currently playing.
    #[arg(value_name = "VIDEO_ID", help = "Video currently playing")]
    pub current: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `spaces init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite existing files.
    #[arg(short = 'f', long = "force", help = "Overwrite existing data and configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `spaces completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `spaces config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `identity.user`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
