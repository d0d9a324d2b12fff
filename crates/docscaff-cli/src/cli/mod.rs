//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "docscaff",
    bin_name = "docscaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4da} Documentation page scaffolding",
    long_about = "docscaff reads a _meta.json / _meta.toml topic tree and creates \
                  one placeholder page per topic, with a directory and index page \
                  for every topic that has children. Existing pages are never touched.",
    after_help = "EXAMPLES:\n\
        \x20 docscaff generate pages/python/_meta.json\n\
        \x20 docscaff generate pages --dry-run\n\
        \x20 docscaff check pages --strict\n\
        \x20 docscaff completions bash > /usr/share/bash-completion/completions/docscaff",
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
    /// Create placeholder pages from a meta file.
    #[command(
        visible_alias = "gen",
        about = "Create placeholder pages from meta files",
        after_help = "EXAMPLES:\n\
            \x20 docscaff generate pages/python/_meta.json\n\
            \x20 docscaff generate pages/python/_meta.json -o site/python --ext md\n\
            \x20 docscaff generate pages            # every _meta file beneath pages/"
    )]
    Generate(GenerateArgs),

    /// Validate meta files without writing anything.
    #[command(
        about = "Validate meta files",
        after_help = "EXAMPLES:\n\
            \x20 docscaff check pages/python/_meta.json\n\
            \x20 docscaff check pages --strict"
    )]
    Check(CheckArgs),

    /// Print the topic outline of a meta file.
    #[command(
        about = "Print the topic outline",
        after_help = "EXAMPLES:\n\
            \x20 docscaff tree pages/python/_meta.json\n\
            \x20 docscaff tree pages --format json"
    )]
    Tree(TreeArgs),

    /// Initialise a docscaff configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 docscaff init           # global config\n\
            \x20 docscaff init --local   # .docscaff.toml in CWD"
    )]
    Init(InitArgs),

    /// Manage the docscaff configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 docscaff config get scaffold.extension\n\
            \x20 docscaff config set scaffold.extension md\n\
            \x20 docscaff config list"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 docscaff completions bash > ~/.local/share/bash-completion/completions/docscaff\n\
            \x20 docscaff completions zsh  > ~/.zfunc/_docscaff\n\
            \x20 docscaff completions fish > ~/.config/fish/completions/docscaff.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `docscaff generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// A meta file, or a directory to search for meta files.
    #[arg(value_name = "PATH", help = "Meta file or directory of meta files")]
    pub path: PathBuf,

    /// Where to create pages (single meta file only).
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: the meta file's directory)"
    )]
    pub output: Option<PathBuf>,

    /// Page file extension.
    #[arg(
        short = 'e',
        long = "ext",
        value_name = "EXT",
        help = "Page file extension (default from config: mdx)"
    )]
    pub extension: Option<String>,

    /// Stem of the index page inside each branch directory.
    #[arg(
        long = "index",
        value_name = "NAME",
        help = "Index page name (default from config: index)"
    )]
    pub index_name: Option<String>,

    /// Report what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `docscaff check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// A meta file, or a directory to search for meta files.
    #[arg(value_name = "PATH", help = "Meta file or directory of meta files")]
    pub path: PathBuf,

    /// Fail when any entry would be skipped with a warning.
    #[arg(long = "strict", help = "Exit with an error if any warnings are found")]
    pub strict: bool,
}

// ── tree ──────────────────────────────────────────────────────────────────────

/// Arguments for `docscaff tree`.
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// A meta file, or a directory to search for meta files.
    #[arg(value_name = "PATH", help = "Meta file or directory of meta files")]
    pub path: PathBuf,

    /// Outline format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "tree",
        help = "Output format"
    )]
    pub format: TreeFormat,
}

/// Output format for the `tree` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreeFormat {
    /// Indented outline.
    Tree,
    /// The parsed tree as JSON.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `docscaff init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.docscaff.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `docscaff completions`.
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

/// Subcommands for `docscaff config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `scaffold.extension`.
        key: String,
    },
    /// Set a configuration key in the active config file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
