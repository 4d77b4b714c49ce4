//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{ReportGenerator, verdict_summary};
use crate::algo::EulerianVerdict;
use crate::detector::{EulerianDetector, GraphAnalysis};
use crate::error::EulerError;
use crate::utils::string::{pluralize, vertex_count_label};

pub struct HumanReportGenerator {
    max_details: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_details: Option<usize>) -> Self {
        Self { max_details }
    }

    fn write_analysis(&self, output: &mut String, analysis: &GraphAnalysis) -> Result<(), EulerError> {
        let marker = if analysis.is_eulerian() {
            style("✅").green().bold()
        } else {
            style("❌").red().bold()
        };

        writeln!(
            output,
            "{} {} {}",
            marker,
            style(analysis.name()).bold(),
            style(format!(
                "({}, {} {})",
                vertex_count_label(analysis.vertex_count()),
                analysis.edge_count(),
                pluralize("edge", analysis.edge_count())
            ))
            .dim()
        )?;

        if let Some(path) = analysis.path() {
            writeln!(output, "   {} {}", style("📄").blue(), style(path.display()).dim())?;
        }

        writeln!(
            output,
            "   {} {}",
            style("→").dim(),
            verdict_summary(analysis.verdict(), self.max_details)
        )?;

        if let EulerianVerdict::Unbalanced { imbalances } = analysis.verdict() {
            let limit = self.max_details.unwrap_or(imbalances.len());
            for imbalance in imbalances.iter().take(limit) {
                writeln!(
                    output,
                    "     {} vertex {}: in {}, out {} ({:+})",
                    style("•").dim(),
                    style(imbalance.vertex).yellow(),
                    imbalance.in_degree,
                    imbalance.out_degree,
                    imbalance.difference()
                )?;
            }
        }

        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, detector: &EulerianDetector) -> Result<String, EulerError> {
        let mut output = String::new();

        if detector.graph_count() == 0 {
            writeln!(output, "\n{} No graphs to check.", style("ℹ️").blue())?;
            return Ok(output);
        }

        writeln!(output)?;
        for analysis in detector.analyses() {
            self.write_analysis(&mut output, analysis)?;
            writeln!(output)?;
        }

        if !detector.has_failures() {
            writeln!(
                output,
                "{} All {} {} have an Eulerian cycle.",
                style("✅").green().bold(),
                style(detector.graph_count()).green().bold(),
                pluralize("graph", detector.graph_count())
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "{} {} of {} {} lack an Eulerian cycle.",
            style("❌").red().bold(),
            style(detector.failure_count()).red().bold(),
            detector.graph_count(),
            pluralize("graph", detector.graph_count())
        )?;

        if let Some(limit) = self.max_details {
            writeln!(
                output,
                "{} Vertex lists are capped at {}. Use --max-details to see more.",
                style("ℹ️").blue(),
                style(limit).yellow()
            )?;
        }

        writeln!(
            output,
            "\n{} A closed walk over every edge needs in-degree == out-degree at every vertex.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} All vertices with edges must also lie in one strongly connected component.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}
