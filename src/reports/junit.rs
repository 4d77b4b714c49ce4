//! JUnit XML format report generation

use std::fmt::Write;

use super::{ReportGenerator, verdict_summary};
use crate::detector::EulerianDetector;
use crate::error::EulerError;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, detector: &EulerianDetector) -> Result<String, EulerError> {
        let mut output = String::new();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="eulerian-check" tests="{}" failures="{}">"#,
            detector.graph_count(),
            detector.failure_count()
        )?;
        writeln!(
            output,
            r#"  <testsuite name="eulerian-cycles" tests="{}" failures="{}">"#,
            detector.graph_count(),
            detector.failure_count()
        )?;

        for analysis in detector.analyses() {
            let name = escape_xml(analysis.name());
            if analysis.is_eulerian() {
                writeln!(
                    output,
                    r#"    <testcase name="{name}" classname="eulerian-check" />"#
                )?;
                continue;
            }

            writeln!(
                output,
                r#"    <testcase name="{name}" classname="eulerian-check">"#
            )?;
            writeln!(
                output,
                r#"      <failure message="No Eulerian cycle ({})">"#,
                analysis.verdict().kind()
            )?;
            writeln!(
                output,
                "{}",
                escape_xml(&verdict_summary(analysis.verdict(), None))
            )?;
            writeln!(output, r#"      </failure>"#)?;
            writeln!(output, r#"    </testcase>"#)?;
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}
