//! `mfrcat config` — configuration inspection.

use mfrcat_config::ConfigError;

use crate::cli::{ConfigAction, ConfigArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.action {
        ConfigAction::Path => {
            output::print_output(
                &mfrcat_config::config_path().display().to_string(),
                global.quiet,
            );
            Ok(())
        }
        ConfigAction::Show => {
            let cfg = mfrcat_config::load_config()?;
            let rendered =
                toml::to_string_pretty(&cfg).map_err(ConfigError::Serialization)?;
            output::print_output(rendered.trim_end(), global.quiet);
            Ok(())
        }
    }
}
