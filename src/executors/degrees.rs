//! Degrees command executor

use std::fmt::Write;

use console::style;
use miette::{Result, WrapErr};
use serde::Serialize;

use crate::analyzer::GraphAnalyzer;
use crate::cli::DegreeFormat;
use crate::config::DegreesConfig;
use crate::error::EulerError;
use crate::executors::CommandExecutor;
use crate::graph::DirectedGraph;

/// Degree counts of one vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VertexDegrees {
    pub vertex: usize,
    pub in_degree: usize,
    pub out_degree: usize,
    pub total_degree: usize,
}

impl VertexDegrees {
    pub fn is_balanced(&self) -> bool {
        self.in_degree == self.out_degree
    }
}

pub fn degree_table(graph: &DirectedGraph, unbalanced_only: bool) -> Vec<VertexDegrees> {
    graph
        .vertices()
        .map(|vertex| VertexDegrees {
            vertex,
            in_degree: graph.in_degree(vertex),
            out_degree: graph.out_degree(vertex),
            total_degree: graph.total_degree(vertex),
        })
        .filter(|row| !unbalanced_only || !row.is_balanced())
        .collect()
}

pub fn format_degree_table(
    rows: &[VertexDegrees],
    format: DegreeFormat,
) -> Result<String, EulerError> {
    match format {
        DegreeFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        DegreeFormat::Human => {
            let mut output = String::new();
            writeln!(
                output,
                "{:>8}  {:>6}  {:>6}  {:>6}",
                "vertex", "in", "out", "total"
            )?;
            for row in rows {
                let line = format!(
                    "{:>8}  {:>6}  {:>6}  {:>6}",
                    row.vertex, row.in_degree, row.out_degree, row.total_degree
                );
                if row.is_balanced() {
                    writeln!(output, "{line}")?;
                } else {
                    writeln!(output, "{}", style(line).yellow())?;
                }
            }
            Ok(output)
        }
    }
}

pub struct DegreesExecutor;

impl CommandExecutor for DegreesExecutor {
    type Config = DegreesConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let loaded = GraphAnalyzer::load_graph(&config.file)?;
        let rows = degree_table(loaded.graph(), config.unbalanced_only);

        let table =
            format_degree_table(&rows, config.format).wrap_err("Failed to format degree table")?;
        print!("{table}");

        if config.unbalanced_only && rows.is_empty() {
            eprintln!(
                "{} Every vertex of '{}' has in-degree == out-degree",
                style("✓").green(),
                loaded.name()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_degree_table_counts_self_loops_twice() {
        let graph = DirectedGraph::from_pairs(3, &[(0, 0), (0, 1)]).unwrap();
        let rows = degree_table(&graph, false);

        assert_eq!(
            rows[0],
            VertexDegrees {
                vertex: 0,
                in_degree: 1,
                out_degree: 2,
                total_degree: 3,
            }
        );
        assert_eq!(rows[2].total_degree, 0);
    }

    #[test]
    fn test_unbalanced_only_filters_rows() {
        let graph = DirectedGraph::from_pairs(4, &[(0, 1), (1, 0), (2, 3)]).unwrap();
        let vertices: Vec<usize> = degree_table(&graph, true).iter().map(|r| r.vertex).collect();

        assert_eq!(vertices, vec![2, 3]);
    }

    #[test]
    fn test_json_table() {
        let graph = DirectedGraph::from_pairs(2, &[(0, 1)]).unwrap();
        let json = format_degree_table(&degree_table(&graph, false), DegreeFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["out_degree"], 1);
        assert_eq!(value[1]["in_degree"], 1);
    }

    #[test]
    fn test_human_table_has_header() {
        console::set_colors_enabled(false);
        let graph = DirectedGraph::from_pairs(1, &[(0, 0)]).unwrap();
        let table = format_degree_table(&degree_table(&graph, false), DegreeFormat::Human).unwrap();

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), vec!["vertex", "in", "out", "total"]);
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), vec!["0", "1", "1", "2"]);
    }
}
