//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderOptions;
use crate::error::EulerError;

impl FromCommand for RenderOptions {
    fn from_command(command: Commands) -> Result<Self, EulerError> {
        match command {
            Commands::Render {
                file,
                format,
                output,
                highlight,
            } => RenderOptions::builder()
                .with_file(file)
                .with_format(format)
                .with_output(output)
                .with_highlight(highlight)
                .build(),
            _ => Err(EulerError::ConfigurationError {
                message: "Invalid command type for RenderOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderOptions);

/// Execute the render command for drawing one graph
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderOptions::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
