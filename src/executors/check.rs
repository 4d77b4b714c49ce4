//! Check command executor

use console::style;
use miette::{Result, WrapErr};
use rayon::prelude::*;

use crate::analyzer::GraphAnalyzer;
use crate::cli::OutputFormat;
use crate::common::ConfigBuilder;
use crate::config::CheckConfig;
use crate::detector::{EulerianDetector, GraphAnalysis};
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator,
};

pub struct CheckExecutor;

impl CheckExecutor {
    /// Decide every loaded graph, in parallel, keeping load order
    pub fn detect(
        analyzer: &GraphAnalyzer,
        progress: Option<&ProgressReporter>,
    ) -> Result<EulerianDetector> {
        let analyses = analyzer
            .graphs()
            .par_iter()
            .map(|loaded| {
                let analysis = GraphAnalysis::builder()
                    .with_name(loaded.name())
                    .with_path(Some(loaded.path().to_path_buf()))
                    .with_graph(loaded.graph())
                    .build();
                if let Some(p) = progress {
                    p.update_analysis(loaded.name());
                }
                analysis
            })
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("Failed to analyse graphs")?;

        let mut detector = EulerianDetector::new();
        for analysis in analyses {
            detector.add_analysis(analysis);
        }
        detector.sort();
        Ok(detector)
    }

    pub fn generate_report(config: &CheckConfig, detector: &EulerianDetector) -> Result<String> {
        let report_result = match config.format {
            OutputFormat::Human => {
                let generator = HumanReportGenerator::new(config.max_details);
                generator.generate_report(detector)
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new();
                generator.generate_report(detector)
            }
            OutputFormat::Junit => {
                let generator = JunitReportGenerator::new();
                generator.generate_report(detector)
            }
            OutputFormat::GitHub => {
                let generator = GitHubReportGenerator::new();
                generator.generate_report(detector)
            }
        };

        report_result.wrap_err("Failed to generate report")
    }
}

impl CommandExecutor for CheckExecutor {
    type Config = CheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking graphs for Eulerian cycles...\n",
            style("🔁").cyan()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        let mut analyzer = GraphAnalyzer::new();
        analyzer
            .discover_graphs(&config.paths, progress.as_mut())
            .wrap_err("Failed to discover and load graph files")?;

        if analyzer.graphs().is_empty() && analyzer.failures().is_empty() {
            eprintln!("{} No graph files found to check", style("ℹ").blue());
            return Ok(());
        }

        if let Some(p) = progress.as_mut() {
            p.start_analysis(analyzer.graphs().len());
        }

        let detector = Self::detect(&analyzer, progress.as_ref())?;

        if let Some(p) = progress.as_mut() {
            p.finish_analysis(detector.eulerian_count(), detector.graph_count());
        }

        let report = Self::generate_report(&config, &detector)?;
        print!("{report}");

        if !analyzer.failures().is_empty() {
            eprintln!(
                "{} {} graph file(s) could not be loaded",
                style("⚠").yellow(),
                analyzer.failures().len()
            );
        }

        // Exit with error code if a graph failed and that was requested
        if config.error_on_failure && (detector.has_failures() || !analyzer.failures().is_empty())
        {
            std::process::exit(1);
        }

        Ok(())
    }
}
