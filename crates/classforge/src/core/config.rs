//! Configuration for the model and its projections
//!
//! Every config type has sensible defaults matching the classic UML tool
//! output (left-to-right record nodes filled light gray, four-space Python
//! indentation) and `with_*` builders for overrides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How relationship targets are checked when they are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Strictness {
    /// Targets are stored as bare names, registered or not
    #[default]
    Permissive,
    /// Parent and part names must already be registered classes
    Strict,
}

impl Strictness {
    pub fn is_strict(&self) -> bool {
        matches!(self, Strictness::Strict)
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strictness::Permissive => write!(f, "permissive"),
            Strictness::Strict => write!(f, "strict"),
        }
    }
}

/// Layout direction hint passed through to the rendering engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum RankDirection {
    #[default]
    LeftRight,
    TopBottom,
    RightLeft,
    BottomTop,
}

impl RankDirection {
    /// Graphviz `rankdir` value
    pub fn as_dot(&self) -> &'static str {
        match self {
            RankDirection::LeftRight => "LR",
            RankDirection::TopBottom => "TB",
            RankDirection::RightLeft => "RL",
            RankDirection::BottomTop => "BT",
        }
    }
}

impl FromStr for RankDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LR" => Ok(RankDirection::LeftRight),
            "TB" | "TD" => Ok(RankDirection::TopBottom),
            "RL" => Ok(RankDirection::RightLeft),
            "BT" => Ok(RankDirection::BottomTop),
            _ => Err(format!("Unknown rank direction: {}", s)),
        }
    }
}

impl fmt::Display for RankDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_dot())
    }
}

/// Model write-time behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelConfig {
    pub strictness: Strictness,
}

impl ModelConfig {
    pub fn new(strictness: Strictness) -> Self {
        Self { strictness }
    }

    pub fn strict() -> Self {
        Self::new(Strictness::Strict)
    }
}

/// Graph-level and node styling for projected diagrams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramConfig {
    pub graph_name: String,
    pub rank_direction: RankDirection,
    pub fill_color: String,
    pub border_color: String,
}

impl DiagramConfig {
    pub fn new() -> Self {
        Self {
            graph_name: "UMLDiagram".to_string(),
            rank_direction: RankDirection::LeftRight,
            fill_color: "lightgray".to_string(),
            border_color: "black".to_string(),
        }
    }

    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }

    pub fn with_rank_direction(mut self, direction: RankDirection) -> Self {
        self.rank_direction = direction;
        self
    }

    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = color.into();
        self
    }

    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = color.into();
        self
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Formatting for synthesized source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Spaces per indentation level
    pub indent: usize,
}

impl CodegenConfig {
    pub fn new() -> Self {
        Self { indent: 4 }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent.max(1);
        self
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a [`Session`](crate::session::Session) needs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub model: ModelConfig,
    pub diagram: DiagramConfig,
    pub codegen: CodegenConfig,
}

impl SessionConfig {
    pub fn new(model: ModelConfig, diagram: DiagramConfig, codegen: CodegenConfig) -> Self {
        Self {
            model,
            diagram,
            codegen,
        }
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.model.strictness = strictness;
        self
    }
}
