//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use docscaff_core::domain::{Action, EntryKind, ScaffoldReport, SkipReason};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_config(&config.output.format),
            explicit => explicit,
        };
        // Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
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

    /// Pretty JSON to stdout. Written even in quiet mode: it is the result,
    /// not progress.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value).map_err(|e| CliError::IoError {
            message: "Failed to serialise output".into(),
            source: io::Error::other(e),
        })?;
        self.term.write_line(&text)?;
        Ok(())
    }

    /// One line per created / existing / planned path, one per warning-worthy
    /// skip, then a summary.
    pub fn report(&self, report: &ScaffoldReport) -> io::Result<()> {
        for outcome in report.outcomes() {
            let path = outcome.path.display();
            match (outcome.action, outcome.kind) {
                (Action::Created, EntryKind::File) => self.success(&format!("Created file: {path}"))?,
                (Action::Created, EntryKind::Directory) => {
                    self.success(&format!("Created folder: {path}"))?
                }
                (Action::Exists, EntryKind::File) => self.warning(&format!("File exists: {path}"))?,
                // Existing folders are expected on every re-run.
                (Action::Exists, EntryKind::Directory) => {}
                (Action::WouldCreate, EntryKind::File) => {
                    self.info(&format!("Would create file: {path}"))?
                }
                (Action::WouldCreate, EntryKind::Directory) => {
                    self.info(&format!("Would create folder: {path}"))?
                }
            }
        }

        for skipped in report.warnings() {
            match &skipped.reason {
                SkipReason::InvalidKey(reason) => {
                    self.warning(&format!("Skipped invalid key: {} ({reason})", skipped.key))?
                }
                _ => self.warning(&format!("Skipped unknown format for: {}", skipped.key))?,
            }
        }

        let warnings = report.warnings().count();
        let summary = if report.is_dry_run() {
            format!(
                "Dry run: {} to create, {} existing, {} skipped",
                report.planned(),
                report.existing(),
                warnings
            )
        } else {
            format!(
                "{} created, {} existing, {} skipped",
                report.created(),
                report.existing(),
                warnings
            )
        };
        self.print("")?;
        if report.is_clean() {
            self.header(&summary)
        } else {
            self.warning(&summary)
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
