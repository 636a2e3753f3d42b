//! Diagnostics on stderr via `tracing-subscriber`.
//!
//! The library crates emit events; this binary is the single place that
//! installs a subscriber. Diagnostics never go to stdout, which is reserved
//! for command results (ids, JSON, the next video).
//!
//! Level selection, from strongest to weakest:
//!
//! 1. `RUST_LOG`, parsed as an [`EnvFilter`] directive string.
//! 2. `--quiet`: errors only.
//! 3. `-v` count: 0 warn, 1 info, 2 debug, 3+ trace.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Targets that follow the `-v` level; dependencies stay silent.
const OUR_TARGETS: [&str; 3] = ["spaces", "spaces_core", "spaces_adapters"];

/// What the global flags ask of the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogSettings {
    level: LevelFilter,
    ansi: bool,
}

impl LogSettings {
    fn from_args(args: &GlobalArgs, stderr_is_tty: bool) -> Self {
        let level = if args.quiet {
            LevelFilter::ERROR
        } else {
            match args.verbose {
                0 => LevelFilter::WARN,
                1 => LevelFilter::INFO,
                2 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
        };

        Self {
            level,
            ansi: stderr_is_tty && !args.no_color,
        }
    }

    /// `spaces=<lvl>,spaces_core=<lvl>,spaces_adapters=<lvl>`
    fn directives(&self) -> String {
        let level = self.level.to_string().to_ascii_lowercase();
        OUR_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the global subscriber. Call once, first thing after parsing.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let settings = LogSettings::from_args(args, std::io::stderr().is_terminal());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.directives()));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_ansi(settings.ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}
