//! Flags accepted before or after any subcommand.
//!
//! Two of them pick the files the CLI works on:
//!
//! * `--config FILE` replaces the platform config path.
//! * `--data FILE` replaces `store.data_file`; it is where the spaces and
//!   the playlist live, and what `spaces init` writes.
//!
//! The rest only shape what gets printed: `-v`/`-q` drive the diagnostic
//! level, `--no-color` and `--output-format` the stdout rendering.

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// More diagnostics on stderr; repeatable.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More diagnostics on stderr (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,

    /// Only results and errors. Does not answer the delete prompt.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only results and errors"
    )]
    pub quiet: bool,

    /// Plain glyphs, no ANSI escapes. Set by a non-empty `NO_COLOR`.
    #[arg(long = "no-color", global = true, env = "NO_COLOR", help = "Disable colour")]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the default location"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        short = 'd',
        long = "data",
        global = true,
        value_name = "FILE",
        help = "Spaces data file (takes precedence over store.data_file)"
    )]
    pub data_file: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Rendering of status lines on stdout"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of stdout status lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, Plain when piped.
    #[default]
    Auto,
    /// Glyphs and colour.
    Human,
    /// Glyphs only, never colour.
    Plain,
}
