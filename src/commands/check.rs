//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckConfig;
use crate::error::EulerError;

impl FromCommand for CheckConfig {
    fn from_command(command: Commands) -> Result<Self, EulerError> {
        match command {
            Commands::Check {
                common,
                format,
                details,
                error_on_failure,
            } => CheckConfig::builder()
                .with_paths(common.get_paths())
                .with_format(format.format)
                .with_error_on_failure(error_on_failure)
                .with_max_details(details.max_details)
                .build(),
            _ => Err(EulerError::ConfigurationError {
                message: "Invalid command type for CheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckConfig);

/// Execute the check command over every discovered graph file
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckConfig::from_command(command)
        .wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
