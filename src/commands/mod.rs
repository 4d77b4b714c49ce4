//! Command implementations for the eulerian-check CLI
//!
//! - check: decide every discovered graph file and print a report
//! - render: draw one graph with its failing vertices marked
//! - degrees: per-vertex degree table for one graph

pub mod check;
pub mod degrees;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Check { .. } => check::execute_check_command(command),
        Commands::Render { .. } => render::execute_render_command(command),
        Commands::Degrees { .. } => degrees::execute_degrees_command(command),
    }
}
