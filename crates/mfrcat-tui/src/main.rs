//! `mfrcat-tui` — Interactive terminal browser for the NHTSA vPIC
//! vehicle manufacturer catalog.
//!
//! Built on [ratatui](https://ratatui.rs) with reactive data from
//! `mfrcat-core`'s [`Browser`](mfrcat_core::Browser) watch channels. The
//! catalog loads once at startup; filtering is incremental and detail
//! records are fetched on demand when a row is opened.
//!
//! Logs are written to a file (default `/tmp/mfrcat-tui.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app launch.

mod action;
mod app;
mod browser_bridge;
mod component;
mod event;
mod screens;
mod theme;
mod tui;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use mfrcat_api::VpicClient;
use mfrcat_core::Browser;

use crate::app::App;

/// Terminal browser for the NHTSA vPIC vehicle manufacturer catalog.
#[derive(Parser, Debug)]
#[command(name = "mfrcat-tui", version, about)]
struct Cli {
    /// vPIC API base URL (overrides config file)
    #[arg(long, env = "MFRCAT_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides config file)
    #[arg(long, env = "MFRCAT_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Log file path (defaults to /tmp/mfrcat-tui.log)
    #[arg(long, default_value = "/tmp/mfrcat-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mfrcat_tui={log_level}")));

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("mfrcat-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

/// Build a [`Browser`] from the config file plus CLI overrides.
fn build_browser(cli: &Cli) -> Result<Browser> {
    let cfg = mfrcat_config::load_config_or_default();

    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| cfg.base_url.clone());
    let timeout_secs = cli.timeout.unwrap_or(cfg.timeout_secs);

    let transport = mfrcat_api::TransportConfig::with_timeout_secs(timeout_secs);
    let client = VpicClient::new(&base_url, &transport)
        .map_err(|e| eyre!("invalid base URL {base_url:?}: {e}"))?;

    Ok(Browser::new(client))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    info!(
        base_url = cli.base_url.as_deref().unwrap_or("(from config)"),
        "starting mfrcat-tui"
    );

    let browser = build_browser(&cli)?;
    let mut app = App::new(browser);
    app.run().await?;

    Ok(())
}
