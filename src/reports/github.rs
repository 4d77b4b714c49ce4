//! GitHub Actions format report generation

use std::fmt::Write;

use super::{ReportGenerator, verdict_summary};
use crate::detector::EulerianDetector;
use crate::error::EulerError;
use crate::utils::string::pluralize;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, detector: &EulerianDetector) -> Result<String, EulerError> {
        let mut output = String::new();

        if !detector.has_failures() {
            writeln!(
                output,
                "::notice title=Eulerian Check::All {} {} have an Eulerian cycle ✅",
                detector.graph_count(),
                pluralize("graph", detector.graph_count())
            )?;
            return Ok(output);
        }

        for analysis in detector.failures() {
            let file = analysis
                .path()
                .map(|p| format!("file={},", p.display()))
                .unwrap_or_default();
            writeln!(
                output,
                "::error {}title=No Eulerian cycle in {}::{}",
                file,
                analysis.name(),
                verdict_summary(analysis.verdict(), None)
            )?;
        }

        writeln!(
            output,
            "::notice title=Eulerian Check::{} of {} {} lack an Eulerian cycle",
            detector.failure_count(),
            detector.graph_count(),
            pluralize("graph", detector.graph_count())
        )?;

        Ok(output)
    }
}
