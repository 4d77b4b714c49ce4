use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, DetailArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "eulerian-check",
    about = "Decide whether directed graphs have an Eulerian cycle",
    long_about = "eulerian-check reads directed graphs from TOML or JSON files and decides \
                  whether each one has a closed walk that uses every edge exactly once. It \
                  explains failing graphs by listing unbalanced vertices or the vertices that \
                  fall outside the strongly connected component of the edges.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check graph files for Eulerian cycles
    ///
    /// Discovers graph files, decides each one, and prints a report.
    #[command(
        long_about = "Decide for every discovered graph file whether it has an Eulerian cycle. \
                      Paths may be files, directories (searched recursively for .toml and .json \
                      files) or glob patterns. A graph passes when every vertex has equal \
                      in-degree and out-degree and all vertices with edges are mutually \
                      reachable."
    )]
    Check {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        details: DetailArgs,

        /// Exit with error code if any graph lacks an Eulerian cycle
        #[arg(long, env = "EULERIAN_CHECK_ERROR_ON_FAILURE")]
        error_on_failure: bool,
    },

    /// Draw a single graph
    ///
    /// Renders the graph as ASCII, Mermaid or Graphviz DOT, optionally
    /// marking the vertices that prevent an Eulerian cycle.
    #[command(
        long_about = "Render one graph file in ASCII, Mermaid or Graphviz DOT format. With \
                      highlighting on, unbalanced vertices and vertices missed by the \
                      connectivity search are marked so the reason a graph fails is visible."
    )]
    Render {
        /// Graph file to render
        #[arg(value_name = "FILE", env = "EULERIAN_CHECK_FILE")]
        file: PathBuf,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "EULERIAN_CHECK_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "EULERIAN_CHECK_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight vertices that break the Eulerian condition
        #[arg(
            long,
            default_value = "true",
            action = clap::ArgAction::Set,
            env = "EULERIAN_CHECK_HIGHLIGHT"
        )]
        highlight: bool,
    },

    /// Show in-degree and out-degree of every vertex
    #[command(
        long_about = "Print a table of in-degree, out-degree and total degree for each vertex \
                      of one graph file. Use --unbalanced-only to list just the vertices whose \
                      in-degree and out-degree differ."
    )]
    Degrees {
        /// Graph file to inspect
        #[arg(value_name = "FILE", env = "EULERIAN_CHECK_FILE")]
        file: PathBuf,

        /// Output format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_FORMAT,
            env = "EULERIAN_CHECK_FORMAT"
        )]
        format: DegreeFormat,

        /// Only list vertices with in-degree != out-degree
        #[arg(long, env = "EULERIAN_CHECK_UNBALANCED_ONLY")]
        unbalanced_only: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum DegreeFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_with_flags() {
        let cli = Cli::try_parse_from([
            "eulerian-check",
            "check",
            "graphs",
            "--format",
            "json",
            "--max-details",
            "3",
            "--error-on-failure",
        ])
        .unwrap();

        match cli.command {
            Commands::Check {
                common,
                format,
                details,
                error_on_failure,
            } => {
                assert_eq!(common.paths, vec![PathBuf::from("graphs")]);
                assert_eq!(format.format, OutputFormat::Json);
                assert_eq!(details.max_details, Some(3));
                assert!(error_on_failure);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["eulerian-check", "render", "g.toml"]).unwrap();

        match cli.command {
            Commands::Render {
                file,
                format,
                output,
                highlight,
            } => {
                assert_eq!(file, PathBuf::from("g.toml"));
                assert_eq!(format, GraphFormat::Ascii);
                assert!(output.is_none());
                assert!(highlight);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_render_highlight_can_be_disabled() {
        let cli = Cli::try_parse_from([
            "eulerian-check",
            "render",
            "g.toml",
            "--highlight",
            "false",
            "-f",
            "dot",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Commands::Render {
                highlight: false,
                format: GraphFormat::Dot,
                ..
            }
        ));
    }

    #[test]
    fn test_degrees_rejects_junit() {
        let result =
            Cli::try_parse_from(["eulerian-check", "degrees", "g.toml", "--format", "junit"]);
        assert!(result.is_err());
    }
}
