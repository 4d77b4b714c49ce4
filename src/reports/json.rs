//! JSON format report generation

use serde_json::{Value, json};

use super::ReportGenerator;
use crate::algo::EulerianVerdict;
use crate::detector::{EulerianDetector, GraphAnalysis};
use crate::error::EulerError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn verdict_json(verdict: &EulerianVerdict) -> Value {
    match verdict {
        EulerianVerdict::Eulerian { root } => json!({
            "kind": verdict.kind(),
            "root": root,
        }),
        EulerianVerdict::Unbalanced { imbalances } => json!({
            "kind": verdict.kind(),
            "imbalances": imbalances
                .iter()
                .map(|i| json!({
                    "vertex": i.vertex,
                    "in_degree": i.in_degree,
                    "out_degree": i.out_degree,
                    "difference": i.difference(),
                }))
                .collect::<Vec<_>>(),
        }),
        EulerianVerdict::Disconnected {
            root,
            pass,
            unreached,
        } => json!({
            "kind": verdict.kind(),
            "root": root,
            "pass": pass,
            "unreached": unreached,
        }),
    }
}

fn analysis_json(analysis: &GraphAnalysis) -> Value {
    json!({
        "name": analysis.name(),
        "path": analysis.path().map(|p| p.display().to_string()),
        "vertices": analysis.vertex_count(),
        "edges": analysis.edge_count(),
        "has_eulerian_cycle": analysis.is_eulerian(),
        "verdict": verdict_json(analysis.verdict()),
    })
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, detector: &EulerianDetector) -> Result<String, EulerError> {
        let mut analyses: Vec<&GraphAnalysis> = detector.analyses().iter().collect();
        // Sort by name, then path, for consistent ordering
        analyses.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.path().cmp(&b.path())));

        let report = json!({
            "all_eulerian": !detector.has_failures(),
            "graph_count": detector.graph_count(),
            "failure_count": detector.failure_count(),
            "graphs": analyses.into_iter().map(analysis_json).collect::<Vec<_>>(),
        });

        serde_json::to_string_pretty(&report).map_err(EulerError::Json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::reports::test_support::mixed_detector;

    #[test]
    fn test_json_report_empty() {
        let report = JsonReportGenerator::new()
            .generate_report(&EulerianDetector::new())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["all_eulerian"], true);
        assert_eq!(json["graph_count"], 0);
        assert_eq!(json["graphs"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_report_sorted_by_name() {
        let report = JsonReportGenerator::new()
            .generate_report(&mixed_detector())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        let names: Vec<&str> = json["graphs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["path", "split", "square"]);
        assert_eq!(json["failure_count"], 2);
        assert_eq!(json["all_eulerian"], false);
    }

    #[test]
    fn test_json_verdict_details() {
        let report = JsonReportGenerator::new()
            .generate_report(&mixed_detector())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();
        let graphs = json["graphs"].as_array().unwrap();

        let path = &graphs[0]["verdict"];
        assert_eq!(path["kind"], "unbalanced");
        assert_eq!(path["imbalances"][0]["vertex"], 0);
        assert_eq!(path["imbalances"][0]["difference"], 1);
        assert_eq!(path["imbalances"][1]["difference"], -1);

        let split = &graphs[1]["verdict"];
        assert_eq!(split["kind"], "disconnected");
        assert_eq!(split["pass"], "forward");
        assert_eq!(split["unreached"], json!([2, 3]));

        let square = &graphs[2];
        assert_eq!(square["has_eulerian_cycle"], true);
        assert_eq!(square["verdict"]["root"], 0);
        assert_eq!(square["path"], Value::Null);
    }
}
