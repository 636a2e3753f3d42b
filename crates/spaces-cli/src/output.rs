//! Output management and formatting.
//!
//! Status lines go to stdout through [`OutputManager`]; failures are
//! rendered on stderr by [`OutputManager::report`].

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use spaces_core::domain::Space;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliError;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
    err_term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = resolve_format(args, config, io::stdout().is_terminal());

        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || format == OutputFormat::Plain,
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Machine-readable payload (ids, JSON). Written even in quiet mode so
    /// scripts can rely on it.
    pub fn data(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// One table row describing `space`.
    pub fn space_row(&self, space: &Space) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = format_space_row(space);
        if self.no_color || !space.is_the_default() {
            self.term.write_line(&line)
        } else {
            self.term.write_line(&line.dimmed().to_string())
        }
    }

    /// Render `err` with its suggestions on stderr. Never suppressed by
    /// quiet mode.
    pub fn report(&self, err: &CliError, verbose: bool) -> io::Result<()> {
        let msg = if self.no_color || !self.err_term.is_term() {
            err.format_plain(verbose)
        } else {
            err.format_colored(verbose)
        };
        self.err_term.write_str(&msg)
    }
}

/// The effective format: the flag, else `output.format` from the config,
/// else Human on a terminal and Plain otherwise.
fn resolve_format(args: &GlobalArgs, config: &AppConfig, stdout_is_tty: bool) -> OutputFormat {
    let requested = match args.output_format {
        OutputFormat::Auto => match config.output.format.to_ascii_lowercase().as_str() {
            "human" => OutputFormat::Human,
            "plain" => OutputFormat::Plain,
            _ => OutputFormat::Auto,
        },
        explicit => explicit,
    };

    match requested {
        OutputFormat::Auto if stdout_is_tty => OutputFormat::Human,
        OutputFormat::Auto => OutputFormat::Plain,
        resolved => resolved,
    }
}

/// `  <id>  <owner>  <name>  <n> resource(s)[  (default)]`
pub fn format_space_row(space: &Space) -> String {
    let count = space.resources().len();
    let noun = if count == 1 { "resource" } else { "resources" };
    let marker = if space.is_the_default() { "  (default)" } else { "" };

    format!(
        "  {:<20} {:<12} {:<16} {count} {noun}{marker}",
        space.id().as_str(),
        space.owner_id().as_str(),
        space.name(),
    )
}

// ── tests ─────────────────────────────────────────────────────────────────────
