//! Classforge - Build class models and project them into UML diagrams and code
//!
//! A library for incrementally describing object-oriented classes (attributes,
//! methods, single inheritance, composition and aggregation) and deriving two
//! artifacts from that model: a graph description for a diagram renderer and a
//! Python skeleton listing.
//!
//! # Quick Start
//!
//! ```rust
//! use classforge::Session;
//!
//! let mut session = Session::new();
//! session.create_class("Vehicle").unwrap();
//! session.create_class("Engine").unwrap();
//! session.add_attribute("Vehicle", "speed", "int").unwrap();
//! session.add_composition("Vehicle", "Engine").unwrap();
//!
//! let dot = session.project_diagram().to_dot();
//! assert!(dot.contains("\"Vehicle\" -> \"Engine\" [arrowhead=odot]"));
//!
//! let code = session.synthesize_code();
//! assert!(code.contains("engine = Engine()"));
//! ```
//!
//! # Advanced Usage
//!
//! The model and both projectors can be used on their own:
//!
//! ```rust
//! use classforge::prelude::*;
//!
//! let mut model = ClassModel::new();
//! model.create_class("Dog").unwrap();
//! model.set_inheritance("Dog", "Animal").unwrap();
//!
//! let graph = DiagramProjector::new().project(&model);
//! assert_eq!(graph.edges[0].source, "Animal");
//!
//! let code = CodeSynthesizer::new().project(&model);
//! assert!(code.starts_with("class Dog(Animal):"));
//! ```

pub mod codegen;
pub mod core;
pub mod diagram;
pub mod model;
pub mod script;
pub mod session;

pub use core::*;
pub use session::Session;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::codegen::CodeSynthesizer;
    pub use crate::core::{
        CodegenConfig, DiagramConfig, ModelConfig, ModelError, Projector, RankDirection,
        ScriptError, SessionConfig, Strictness,
    };
    pub use crate::diagram::{
        ArrowHead, CharacterSet, DiagramProjector, EdgeKind, GraphDescription, PreviewRenderer,
    };
    pub use crate::model::{ClassDefinition, ClassModel};
    pub use crate::script::{parse_script, Command};
    pub use crate::session::Session;
}

/// Build a model from a command script and synthesize its code
///
/// # Example
/// ```rust
/// let code = classforge::generate_code("class Car\ncompose Car Wheel").unwrap();
/// assert!(code.contains("wheel = Wheel()"));
/// ```
pub fn generate_code(script: &str) -> anyhow::Result<String> {
    let mut session = Session::new();
    session.run_script(script)?;
    Ok(session.synthesize_code())
}

/// Build a model from a command script and project its diagram
///
/// # Example
/// ```rust
/// let graph = classforge::generate_diagram("class Car\ninherit Car Vehicle").unwrap();
/// assert_eq!(graph.edge_count(), 1);
/// ```
pub fn generate_diagram(script: &str) -> anyhow::Result<diagram::GraphDescription> {
    let mut session = Session::new();
    session.run_script(script)?;
    Ok(session.project_diagram().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_code() {
        let result = generate_code("class A\nattribute A x int\n");
        assert!(result.is_ok());
        assert!(result.unwrap().contains("self.x = None"));
    }

    #[test]
    fn test_generate_code_reports_script_errors() {
        let result = generate_code("class A\nattribute B x int\n");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Line 2"));
        assert!(err.downcast_ref::<ScriptError>().is_some());
    }

    #[test]
    fn test_generate_diagram() {
        let graph = generate_diagram("class A\nclass B\ncompose A B\n").unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }
}
