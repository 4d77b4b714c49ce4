use std::collections::BTreeMap;
use std::io::Write;

use miette::Result;

use crate::algo::{EulerianVerdict, SearchPass};
use crate::error::EulerError;
use crate::graph::DirectedGraph;

// Blue-Orange Accessible Palette
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const FLAGGED_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const FLAGGED_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const ROOT_NODE_STROKE: &str = "#2E7D32"; // Dark green
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const FLAGGED_EDGE: &str = "#FF6500"; // Deep orange
    pub const ISOLATED_NODE_FILL: &str = "#FAFAFA"; // Off-white
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(EulerError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(EulerError::from)
    };
}

/// How a vertex is drawn when highlighting is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexMark {
    Plain,
    Isolated,
    Root,
    Unbalanced(isize),
    Unreached(SearchPass),
}

pub struct GraphRenderer {
    highlight: bool,
}

impl GraphRenderer {
    pub fn new(highlight: bool) -> Self {
        Self { highlight }
    }

    fn vertex_marks(&self, graph: &DirectedGraph, verdict: &EulerianVerdict) -> Vec<VertexMark> {
        let mut marks: Vec<VertexMark> = graph
            .vertices()
            .map(|v| {
                if graph.total_degree(v) == 0 {
                    VertexMark::Isolated
                } else {
                    VertexMark::Plain
                }
            })
            .collect();

        if !self.highlight {
            return marks;
        }

        match verdict {
            EulerianVerdict::Eulerian { root } => {
                if let Some(root) = root {
                    marks[*root] = VertexMark::Root;
                }
            }
            EulerianVerdict::Unbalanced { imbalances } => {
                for imbalance in imbalances {
                    marks[imbalance.vertex] = VertexMark::Unbalanced(imbalance.difference());
                }
            }
            EulerianVerdict::Disconnected {
                root,
                pass,
                unreached,
            } => {
                marks[*root] = VertexMark::Root;
                for &vertex in unreached {
                    marks[vertex] = VertexMark::Unreached(*pass);
                }
            }
        }

        marks
    }

    pub fn render_ascii(
        &self,
        graph: &DirectedGraph,
        verdict: &EulerianVerdict,
        output: &mut dyn Write,
    ) -> Result<()> {
        if graph.vertex_count() == 0 {
            writeln_out!(output, "Graph has no vertices to visualize")?;
            return Ok(());
        }

        writeln_out!(
            output,
            "\n📊 Directed Graph ({} vertices, {} edges)\n",
            graph.vertex_count(),
            graph.edge_count()
        )?;

        let marks = self.vertex_marks(graph, verdict);

        for vertex in graph.vertices() {
            let marker = match marks[vertex] {
                VertexMark::Plain => String::new(),
                VertexMark::Isolated => " (isolated)".to_string(),
                VertexMark::Root => " ◆ ROOT".to_string(),
                VertexMark::Unbalanced(diff) => format!(" ⚠️  UNBALANCED ({diff:+})"),
                VertexMark::Unreached(SearchPass::Forward) => " ⚠️  UNREACHABLE".to_string(),
                VertexMark::Unreached(SearchPass::Reverse) => " ⚠️  CANNOT RETURN".to_string(),
            };
            writeln_out!(
                output,
                "{} [in {}, out {}]{}",
                vertex,
                graph.in_degree(vertex),
                graph.out_degree(vertex),
                marker
            )?;

            // Group parallel edges by destination
            let mut targets: BTreeMap<usize, usize> = BTreeMap::new();
            for &dest in graph.neighbors(vertex) {
                *targets.entry(dest).or_default() += 1;
            }

            if targets.is_empty() {
                writeln_out!(output, "  └── (no outgoing edges)")?;
            } else {
                for (i, (dest, count)) in targets.iter().enumerate() {
                    let prefix = if i == targets.len() - 1 {
                        "└──"
                    } else {
                        "├──"
                    };
                    let count_str = if *count > 1 {
                        format!(" (×{count})")
                    } else {
                        String::new()
                    };
                    let loop_str = if *dest == vertex { " ↺" } else { "" };
                    writeln_out!(output, "  {} → {}{}{}", prefix, dest, count_str, loop_str)?;
                }
            }
        }

        if self.highlight {
            writeln_out!(output)?;
            match verdict {
                EulerianVerdict::Eulerian { .. } => {
                    writeln_out!(output, "✅ Eulerian cycle exists")?;
                }
                EulerianVerdict::Unbalanced { .. } => {
                    writeln_out!(output, "⚠️  = in-degree differs from out-degree")?;
                }
                EulerianVerdict::Disconnected { .. } => {
                    writeln_out!(output, "⚠️  = outside the root's strongly connected component")?;
                }
            }
        }

        Ok(())
    }

    pub fn render_mermaid(
        &self,
        graph: &DirectedGraph,
        verdict: &EulerianVerdict,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph LR")?;

        let marks = self.vertex_marks(graph, verdict);

        for vertex in graph.vertices() {
            let node_id = self.mermaid_id(vertex);
            let node_shape = match marks[vertex] {
                VertexMark::Root => format!("{node_id}((\"{vertex}\"))"),
                VertexMark::Unbalanced(diff) => format!("{node_id}{{\"{vertex} ({diff:+})\"}}"),
                _ => format!("{node_id}[\"{vertex}\"]"),
            };
            writeln_out!(output, "    {}", node_shape)?;

            match marks[vertex] {
                VertexMark::Unbalanced(_) | VertexMark::Unreached(_) => writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:3px",
                    node_id,
                    colors::FLAGGED_NODE_FILL,
                    colors::FLAGGED_NODE_STROKE
                )?,
                VertexMark::Root => writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:3px",
                    node_id,
                    colors::NORMAL_NODE_FILL,
                    colors::ROOT_NODE_STROKE
                )?,
                VertexMark::Isolated => writeln_out!(
                    output,
                    "    style {} fill:{},stroke:#ddd,stroke-dasharray:3",
                    node_id,
                    colors::ISOLATED_NODE_FILL
                )?,
                VertexMark::Plain => writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:2px",
                    node_id,
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE
                )?,
            }
        }

        writeln_out!(output)?;

        for (edge_index, edge) in graph.edges().enumerate() {
            writeln_out!(
                output,
                "    {} --> {}",
                self.mermaid_id(edge.src),
                self.mermaid_id(edge.dest)
            )?;
            if self.is_flagged_edge(&marks, edge.src, edge.dest) {
                writeln_out!(
                    output,
                    "    linkStyle {} stroke:{},stroke-width:3px",
                    edge_index,
                    colors::FLAGGED_EDGE
                )?;
            }
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &DirectedGraph,
        verdict: &EulerianVerdict,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph eulerian {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=circle];")?;
        writeln_out!(output)?;

        let marks = self.vertex_marks(graph, verdict);

        for vertex in graph.vertices() {
            let (fill_color, stroke_color, label) = match marks[vertex] {
                VertexMark::Plain => (
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE,
                    vertex.to_string(),
                ),
                VertexMark::Isolated => (
                    colors::ISOLATED_NODE_FILL,
                    colors::NORMAL_NODE_STROKE,
                    vertex.to_string(),
                ),
                VertexMark::Root => (
                    colors::NORMAL_NODE_FILL,
                    colors::ROOT_NODE_STROKE,
                    format!("{vertex}\\nroot"),
                ),
                VertexMark::Unbalanced(diff) => (
                    colors::FLAGGED_NODE_FILL,
                    colors::FLAGGED_NODE_STROKE,
                    format!("{vertex}\\n{diff:+}"),
                ),
                VertexMark::Unreached(pass) => (
                    colors::FLAGGED_NODE_FILL,
                    colors::FLAGGED_NODE_STROKE,
                    format!("{vertex}\\n{pass}"),
                ),
            };

            writeln_out!(
                output,
                r#"    "{}" [label="{}", style=filled, fillcolor="{}", color="{}", penwidth=2];"#,
                vertex,
                label,
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        // Aggregate parallel edges into one labelled arrow
        let mut edge_groups: BTreeMap<(usize, usize), usize> = BTreeMap::new();
        for edge in graph.edges() {
            *edge_groups.entry((edge.src, edge.dest)).or_default() += 1;
        }

        for ((src, dest), count) in edge_groups {
            let label = if count > 1 {
                format!(r#" label="×{count}","#)
            } else {
                String::new()
            };
            let color = if self.is_flagged_edge(&marks, src, dest) {
                colors::FLAGGED_EDGE
            } else {
                colors::NORMAL_EDGE
            };
            writeln_out!(
                output,
                r#"    "{}" -> "{}" [{} color="{}", penwidth=2];"#,
                src,
                dest,
                label,
                color
            )?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn is_flagged_edge(&self, marks: &[VertexMark], src: usize, dest: usize) -> bool {
        let flagged = |mark: VertexMark| {
            matches!(mark, VertexMark::Unbalanced(_) | VertexMark::Unreached(_))
        };
        self.highlight && (flagged(marks[src]) || flagged(marks[dest]))
    }

    fn mermaid_id(&self, vertex: usize) -> String {
        format!("v{vertex}")
    }
}
