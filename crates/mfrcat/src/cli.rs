//! Clap derive structures for the `mfrcat` CLI.
//!
//! Defines the command tree, global flags, and shared enums.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// mfrcat -- vehicle manufacturer catalog for the command line
#[derive(Debug, Parser)]
#[command(
    name = "mfrcat",
    version,
    about = "Browse NHTSA vPIC vehicle manufacturers from the command line",
    long_about = "Fetches the vehicle manufacturer catalog from the public NHTSA vPIC API,\n\
        filters it by name substring and vehicle type, and shows extended\n\
        detail records for individual manufacturers.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// vPIC API base URL (overrides config file)
    #[arg(long, env = "MFRCAT_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides config file)
    #[arg(long, env = "MFRCAT_TIMEOUT_SECS", global = true)]
    pub timeout: Option<u64>,

    /// Output format (overrides config file; default "table")
    #[arg(long, short = 'o', env = "MFRCAT_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output (overrides config file; default "auto")
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List manufacturers, optionally filtered
    #[command(alias = "ls", alias = "l")]
    List(ListArgs),

    /// Show one manufacturer's extended detail record
    #[command(alias = "get")]
    Show(ShowArgs),

    /// List the distinct vehicle types across the catalog
    Types,

    /// Inspect configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Per-Command Args ─────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive name substring filter
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Keep only manufacturers producing this vehicle type (exact name)
    #[arg(long, short = 't', value_name = "TYPE")]
    pub vehicle_type: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Manufacturer id (vPIC Mfr_ID)
    pub id: u32,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
