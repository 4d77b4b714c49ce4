//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// "1 vertex", "3 vertices"
pub fn vertex_count_label(count: usize) -> String {
    if count == 1 {
        "1 vertex".to_string()
    } else {
        format!("{count} vertices")
    }
}

/// Comma-separated vertex list, truncated after `limit` entries
pub fn format_vertex_list(vertices: &[usize], limit: Option<usize>) -> String {
    let shown = limit.unwrap_or(vertices.len()).min(vertices.len());
    let mut out = vertices[..shown]
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let hidden = vertices.len() - shown;
    if hidden > 0 && shown == 0 {
        out = vertex_count_label(hidden);
    } else if hidden > 0 {
        out.push_str(&format!(" (+{hidden} more)"));
    }
    out
}
