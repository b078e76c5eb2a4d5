//! Diagram projection
//!
//! Turns a class model into a [`GraphDescription`] and offers two ways to
//! hand it on: Graphviz DOT for an external renderer, and a text preview for
//! terminals.

pub mod dot;
mod graph;
mod preview;
mod projector;

pub use graph::{
    ArrowHead, EdgeDirection, EdgeKind, GraphDescription, GraphEdge, GraphNode, NodeLabel,
    NodeShape, NodeStyle,
};
pub use preview::{CharacterSet, PreviewRenderer};
pub use projector::DiagramProjector;
