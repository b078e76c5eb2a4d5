//! Graphviz DOT serialization
//!
//! Writes a [`GraphDescription`] in the DOT language so an external `dot`
//! binary can rasterize it. Output is deterministic: nodes and edges appear in
//! description order and attributes in a fixed order.

use super::graph::{EdgeDirection, GraphDescription, GraphEdge, GraphNode};

/// Escape text for a double-quoted DOT string
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Escape the characters that delimit fields inside a record label
fn escape_record_field(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '{' | '}' | '|' | '<' | '>' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Record label for a node: `{Header|row|row}`
pub fn record_label(node: &GraphNode) -> String {
    let fields: Vec<String> = node.label.rows().map(escape_record_field).collect();
    format!("{{{}}}", fields.join("|"))
}

fn write_node(out: &mut String, node: &GraphNode) {
    out.push_str(&format!(
        "\t{} [label={} color={} fillcolor={} shape={}",
        quote(&node.id),
        quote(&record_label(node)),
        quote(&node.style.border_color),
        quote(&node.style.fill_color),
        node.shape.as_str(),
    ));
    if node.style.filled {
        out.push_str(" style=filled");
    }
    out.push_str("]\n");
}

fn write_edge(out: &mut String, edge: &GraphEdge) {
    // With dir=back the marker is drawn at the source, so it goes on arrowtail
    let arrow = match edge.direction {
        EdgeDirection::Forward => format!("arrowhead={}", edge.arrow_head.as_str()),
        EdgeDirection::Back => format!("arrowtail={} dir=back", edge.arrow_head.as_str()),
    };
    out.push_str(&format!(
        "\t{} -> {} [{}]\n",
        quote(&edge.source),
        quote(&edge.target),
        arrow
    ));
}

impl GraphDescription {
    /// Render as a Graphviz `digraph`
    pub fn to_dot(&self) -> String {
        let mut out = format!("digraph {} {{\n", quote(&self.name));
        out.push_str(&format!("\trankdir={}\n", self.rank_direction.as_dot()));
        for node in &self.nodes {
            write_node(&mut out, node);
        }
        for edge in &self.edges {
            write_edge(&mut out, edge);
        }
        out.push_str("}\n");
        out
    }
}
