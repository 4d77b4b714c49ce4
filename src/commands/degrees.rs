//! Degrees command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::DegreesConfig;
use crate::error::EulerError;

impl FromCommand for DegreesConfig {
    fn from_command(command: Commands) -> Result<Self, EulerError> {
        match command {
            Commands::Degrees {
                file,
                format,
                unbalanced_only,
            } => DegreesConfig::builder()
                .with_file(file)
                .with_format(format)
                .with_unbalanced_only(unbalanced_only)
                .build(),
            _ => Err(EulerError::ConfigurationError {
                message: "Invalid command type for DegreesConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(DegreesConfig);

/// Execute the degrees command for one graph
pub fn execute_degrees_command(command: Commands) -> Result<()> {
    let config = DegreesConfig::from_command(command)
        .wrap_err("Failed to parse degrees command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::degrees::DegreesExecutor;
    DegreesExecutor::execute(config)
}
