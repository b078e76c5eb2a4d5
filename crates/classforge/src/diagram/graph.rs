//! Graph description types
//!
//! A renderer-agnostic description of a class diagram: record nodes with
//! sectioned labels and directed edges carrying arrow semantics. The types are
//! serde-serializable so external renderers can consume them as JSON; see
//! [`dot`](super::dot) for the Graphviz form.

use serde::{Deserialize, Serialize};

use crate::core::RankDirection;

/// Node shape understood by the rendering engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    /// Multi-row box, one row per label entry
    #[default]
    Record,
}

impl NodeShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeShape::Record => "record",
        }
    }
}

/// Fill and border styling of a node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeStyle {
    pub border_color: String,
    pub fill_color: String,
    pub filled: bool,
}

/// Sectioned label of a class node
///
/// Rows read top to bottom: header, attribute rows, method rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeLabel {
    pub header: String,
    /// `name: type`, in declaration order
    pub attributes: Vec<String>,
    /// `name()`, in declaration order
    pub methods: Vec<String>,
}

impl NodeLabel {
    /// All rows in display order
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.header.as_str())
            .chain(self.attributes.iter().map(String::as_str))
            .chain(self.methods.iter().map(String::as_str))
    }

    pub fn row_count(&self) -> usize {
        1 + self.attributes.len() + self.methods.len()
    }
}

/// One class box
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: NodeLabel,
    pub shape: NodeShape,
    pub style: NodeStyle,
}

/// Which model relationship an edge came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Inheritance,
    Composition,
    Aggregation,
}

/// Arrowhead marker drawn on an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowHead {
    /// Hollow triangle
    Empty,
    /// Open circle
    Odot,
    /// Filled diamond
    Diamond,
}

impl ArrowHead {
    /// Graphviz arrow name
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrowHead::Empty => "empty",
            ArrowHead::Odot => "odot",
            ArrowHead::Diamond => "diamond",
        }
    }
}

/// Which end of an edge carries the arrowhead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeDirection {
    /// Arrowhead at the target
    #[default]
    Forward,
    /// Arrowhead at the source
    Back,
}

impl EdgeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeDirection::Forward => "forward",
            EdgeDirection::Back => "back",
        }
    }
}

/// A directed relationship edge between two class names
///
/// Endpoints are bare names; they may refer to classes that have no node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    pub arrow_head: ArrowHead,
    pub direction: EdgeDirection,
}

impl GraphEdge {
    /// Parent to child, triangle drawn at the parent end
    pub fn inheritance(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            source: parent.into(),
            target: child.into(),
            kind: EdgeKind::Inheritance,
            arrow_head: ArrowHead::Empty,
            direction: EdgeDirection::Back,
        }
    }

    pub fn composition(owner: impl Into<String>, part: impl Into<String>) -> Self {
        Self {
            source: owner.into(),
            target: part.into(),
            kind: EdgeKind::Composition,
            arrow_head: ArrowHead::Odot,
            direction: EdgeDirection::Forward,
        }
    }

    pub fn aggregation(owner: impl Into<String>, part: impl Into<String>) -> Self {
        Self {
            source: owner.into(),
            target: part.into(),
            kind: EdgeKind::Aggregation,
            arrow_head: ArrowHead::Diamond,
            direction: EdgeDirection::Forward,
        }
    }
}

/// Complete description of a class diagram
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphDescription {
    pub name: String,
    pub rank_direction: RankDirection,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphDescription {
    pub fn new(name: impl Into<String>, rank_direction: RankDirection) -> Self {
        Self {
            name: name.into(),
            rank_direction,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges leaving `source`
    pub fn edges_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a GraphEdge> {
        self.edges.iter().filter(move |e| e.source == source)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
