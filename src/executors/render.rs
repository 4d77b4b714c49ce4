//! Render command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::algo::analyze;
use crate::analyzer::GraphAnalyzer;
use crate::cli::GraphFormat;
use crate::config::RenderOptions;
use crate::executors::CommandExecutor;
use crate::graph::{DirectedGraph, GraphRenderer};

pub struct RenderExecutor;

impl RenderExecutor {
    /// Draw `graph` in `format`, deciding it first so failing vertices can be
    /// marked
    pub fn render(
        graph: &DirectedGraph,
        format: GraphFormat,
        highlight: bool,
        output: &mut dyn Write,
    ) -> Result<()> {
        let verdict = analyze(graph);
        let renderer = GraphRenderer::new(highlight);

        match format {
            GraphFormat::Ascii => renderer
                .render_ascii(graph, &verdict, output)
                .wrap_err("Failed to render ASCII graph"),
            GraphFormat::Mermaid => renderer
                .render_mermaid(graph, &verdict, output)
                .wrap_err("Failed to render Mermaid graph"),
            GraphFormat::Dot => renderer
                .render_dot(graph, &verdict, output)
                .wrap_err("Failed to render DOT graph"),
        }
    }
}

impl CommandExecutor for RenderExecutor {
    type Config = RenderOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering {} as {}...",
            style("📊").cyan(),
            style(config.file.display()).bold(),
            format!("{:?}", config.format).to_lowercase()
        );

        let loaded = GraphAnalyzer::load_graph(&config.file)?;

        // Determine output destination
        let mut output_writer: Box<dyn Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        Self::render(
            loaded.graph(),
            config.format,
            config.highlight,
            output_writer.as_mut(),
        )?;
        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush rendered graph")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
