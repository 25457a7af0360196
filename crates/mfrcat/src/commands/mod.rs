//! Command handlers and shared execution context.

pub mod config_cmd;
pub mod list;
pub mod show;
pub mod types;

use std::io::{self, IsTerminal};
use std::time::Duration;

use clap::ValueEnum;
use indicatif::ProgressBar;

use mfrcat_api::VpicClient;
use mfrcat_core::CoreError;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Resolved execution context for API-backed commands.
///
/// Resolution order for every knob: CLI flag > environment > config file >
/// built-in default.
pub struct Context {
    pub client: VpicClient,
    pub base_url: String,
    pub timeout_secs: u64,
    pub output: OutputFormat,
    pub color: ColorMode,
    pub quiet: bool,
}

impl Context {
    pub fn from_cli(global: &GlobalOpts) -> Result<Self, CliError> {
        let cfg = mfrcat_config::load_config_or_default();

        let base_url = global
            .base_url
            .clone()
            .unwrap_or_else(|| cfg.base_url.clone());
        let timeout_secs = global.timeout.unwrap_or(cfg.timeout_secs);

        let output = match global.output {
            Some(format) => format,
            None => parse_enum::<OutputFormat>(&cfg.output, "output")?,
        };
        let color = match global.color {
            Some(mode) => mode,
            None => parse_enum::<ColorMode>(&cfg.color, "color")?,
        };

        let transport = mfrcat_api::TransportConfig::with_timeout_secs(timeout_secs);
        let client = VpicClient::new(&base_url, &transport).map_err(|_| CliError::Validation {
            field: "base_url".into(),
            reason: format!("invalid URL: {base_url}"),
        })?;

        Ok(Self {
            client,
            base_url,
            timeout_secs,
            output,
            color,
            quiet: global.quiet,
        })
    }

    /// Translate a core error, attaching this context for help text.
    pub(crate) fn core_err(&self, err: CoreError) -> CliError {
        CliError::from_core(err, &self.base_url, self.timeout_secs)
    }

    /// Translate a raw API error through the core mapping.
    pub(crate) fn api_err(&self, err: mfrcat_api::Error) -> CliError {
        self.core_err(CoreError::from(err))
    }
}

/// Parse a config-file enum value through its clap `ValueEnum` definition,
/// so the config file accepts exactly the strings the flag does.
fn parse_enum<T: ValueEnum>(raw: &str, field: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("unrecognized value '{raw}' in config file"),
    })
}

/// Show a fetch spinner on stderr for interactive runs.
///
/// Suppressed when quiet or when stderr is not a terminal, so scripted
/// invocations stay clean.
pub(crate) fn fetch_spinner(ctx: &Context, message: &str) -> Option<ProgressBar> {
    if ctx.quiet || !io::stderr().is_terminal() {
        return None;
    }
    let bar = ProgressBar::new_spinner();
    bar.set_message(message.to_owned());
    bar.enable_steady_tick(Duration::from_millis(80));
    Some(bar)
}

/// Finish and erase a spinner, if one was shown.
pub(crate) fn clear_spinner(bar: Option<ProgressBar>) {
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
}
