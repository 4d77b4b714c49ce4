//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions annotations

pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use crate::algo::{EulerianVerdict, SearchPass};
use crate::detector::EulerianDetector;
use crate::error::EulerError;
use crate::utils::string::format_vertex_list;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from the collected verdicts
    fn generate_report(&self, detector: &EulerianDetector) -> Result<String, EulerError>;
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;

/// One-line plain-text reason for a verdict
pub(crate) fn verdict_summary(verdict: &EulerianVerdict, max_details: Option<usize>) -> String {
    match verdict {
        EulerianVerdict::Eulerian { root: None } => "has no edges (trivially Eulerian)".to_string(),
        EulerianVerdict::Eulerian { root: Some(_) } => "has an Eulerian cycle".to_string(),
        EulerianVerdict::Unbalanced { imbalances } => {
            let vertices: Vec<usize> = imbalances.iter().map(|i| i.vertex).collect();
            format!(
                "in-degree differs from out-degree at vertices {}",
                format_vertex_list(&vertices, max_details)
            )
        }
        EulerianVerdict::Disconnected {
            root,
            pass,
            unreached,
        } => {
            let vertices = format_vertex_list(unreached, max_details);
            match pass {
                SearchPass::Forward => {
                    format!("vertices {vertices} are not reachable from vertex {root}")
                }
                SearchPass::Reverse => format!("vertices {vertices} cannot reach vertex {root}"),
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::DegreeImbalance;

    #[test]
    fn test_verdict_summary_variants() {
        assert_eq!(
            verdict_summary(&EulerianVerdict::Eulerian { root: None }, None),
            "has no edges (trivially Eulerian)"
        );

        let unbalanced = EulerianVerdict::Unbalanced {
            imbalances: vec![
                DegreeImbalance {
                    vertex: 0,
                    in_degree: 0,
                    out_degree: 1,
                },
                DegreeImbalance {
                    vertex: 2,
                    in_degree: 1,
                    out_degree: 0,
                },
            ],
        };
        assert_eq!(
            verdict_summary(&unbalanced, Some(1)),
            "in-degree differs from out-degree at vertices 0 (+1 more)"
        );

        let reverse = EulerianVerdict::Disconnected {
            root: 0,
            pass: SearchPass::Reverse,
            unreached: vec![2],
        };
        assert_eq!(
            verdict_summary(&reverse, None),
            "vertices 2 cannot reach vertex 0"
        );
    }
}
