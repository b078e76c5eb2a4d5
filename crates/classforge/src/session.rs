//! Editing session
//!
//! A [`Session`] owns a [`ClassModel`] together with its most recent graph
//! description. Every successful mutation re-projects the whole model from
//! scratch, so the cached diagram always equals a fresh projection of the
//! current state. Code is synthesized on demand.

use tracing::{debug, info, span, Level};

use crate::codegen::CodeSynthesizer;
use crate::core::{ModelError, Projector, ScriptError, SessionConfig};
use crate::diagram::{CharacterSet, DiagramProjector, GraphDescription, PreviewRenderer};
use crate::model::ClassModel;
use crate::script::{parse_script, Command};

/// Caller-owned editing session over a class model
#[derive(Debug, Clone)]
pub struct Session {
    model: ClassModel,
    diagram: GraphDescription,
    projector: DiagramProjector,
    synthesizer: CodeSynthesizer,
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let model = ClassModel::with_config(config.model);
        let projector = DiagramProjector::with_config(config.diagram);
        let diagram = projector.project(&model);
        Self {
            model,
            diagram,
            projector,
            synthesizer: CodeSynthesizer::with_config(config.codegen),
        }
    }

    pub fn model(&self) -> &ClassModel {
        &self.model
    }

    pub fn create_class(&mut self, name: &str) -> Result<(), ModelError> {
        self.apply(&Command::CreateClass { name: name.into() })
    }

    pub fn add_attribute(
        &mut self,
        class: &str,
        attr_name: &str,
        attr_type: &str,
    ) -> Result<(), ModelError> {
        self.apply(&Command::AddAttribute {
            class: class.into(),
            name: attr_name.into(),
            type_name: attr_type.into(),
        })
    }

    pub fn add_method(
        &mut self,
        class: &str,
        method_name: &str,
        return_type: &str,
    ) -> Result<(), ModelError> {
        self.apply(&Command::AddMethod {
            class: class.into(),
            name: method_name.into(),
            return_type: return_type.into(),
        })
    }

    pub fn set_inheritance(&mut self, class: &str, parent: &str) -> Result<(), ModelError> {
        self.apply(&Command::SetInheritance {
            class: class.into(),
            parent: parent.into(),
        })
    }

    pub fn add_composition(&mut self, class: &str, part: &str) -> Result<(), ModelError> {
        self.apply(&Command::AddComposition {
            class: class.into(),
            part: part.into(),
        })
    }

    pub fn add_aggregation(&mut self, class: &str, part: &str) -> Result<(), ModelError> {
        self.apply(&Command::AddAggregation {
            class: class.into(),
            part: part.into(),
        })
    }

    /// Apply one command, then rebuild the diagram
    ///
    /// A failed command leaves both the model and the diagram untouched.
    pub fn apply(&mut self, command: &Command) -> Result<(), ModelError> {
        command.apply(&mut self.model)?;
        self.diagram = self.projector.project(&self.model);
        debug!(command = %command, "Applied command");
        Ok(())
    }

    /// Parse and replay a command script
    ///
    /// Nothing is applied if the script fails to parse. Replay stops at the
    /// first command the model rejects; commands before it stay applied.
    /// Returns the number of commands applied.
    pub fn run_script(&mut self, input: &str) -> Result<usize, ScriptError> {
        let run_span = span!(Level::INFO, "run_script", input_len = input.len());
        let _enter = run_span.enter();

        let lines = parse_script(input)?;
        for script_line in &lines {
            self.apply(&script_line.command)
                .map_err(|e| ScriptError::command_failed(script_line.line, e))?;
        }

        info!(
            commands = lines.len(),
            classes = self.model.class_count(),
            "Script applied"
        );
        Ok(lines.len())
    }

    /// Latest graph description
    pub fn project_diagram(&self) -> &GraphDescription {
        &self.diagram
    }

    pub fn synthesize_code(&self) -> String {
        self.synthesizer.project(&self.model)
    }

    pub fn preview(&self, style: CharacterSet) -> String {
        PreviewRenderer::with_style(style).render(&self.diagram)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Strictness;
    use crate::diagram::{ArrowHead, EdgeKind};

    #[test]
    fn test_diagram_tracks_every_mutation() {
        let mut session = Session::new();
        assert!(session.project_diagram().is_empty());

        session.create_class("Vehicle").unwrap();
        assert_eq!(session.project_diagram().node_count(), 1);

        session.add_attribute("Vehicle", "speed", "int").unwrap();
        let rows: Vec<_> = session
            .project_diagram()
            .node("Vehicle")
            .unwrap()
            .label
            .rows()
            .map(str::to_string)
            .collect();
        assert_eq!(rows, vec!["Vehicle", "speed: int"]);

        session.add_composition("Vehicle", "Engine").unwrap();
        let edge = &session.project_diagram().edges[0];
        assert_eq!(edge.kind, EdgeKind::Composition);
        assert_eq!(edge.arrow_head, ArrowHead::Odot);
    }

    #[test]
    fn test_failed_mutation_keeps_diagram() {
        let mut session = Session::new();
        session.create_class("A").unwrap();
        let before = session.project_diagram().clone();

        assert!(session.create_class("A").is_err());
        assert!(session.add_method("B", "m", "None").is_err());
        assert_eq!(session.project_diagram(), &before);
    }

    #[test]
    fn test_run_script() {
        let mut session = Session::new();
        let applied = session
            .run_script("class Vehicle\nattribute Vehicle speed int\naggregate Vehicle Driver\n")
            .unwrap();
        assert_eq!(applied, 3);
        assert!(session.synthesize_code().contains("driver = None"));
    }

    #[test]
    fn test_run_script_parse_error_applies_nothing() {
        let mut session = Session::new();
        let err = session.run_script("class A\nbogus\n").unwrap_err();
        assert_eq!(err.line(), 2);
        assert!(session.model().is_empty());
    }

    #[test]
    fn test_run_script_stops_at_model_error() {
        let mut session = Session::new();
        let err = session
            .run_script("class A\nclass A\nclass B\n")
            .unwrap_err();
        assert_eq!(
            err,
            ScriptError::command_failed(2, ModelError::duplicate_class("A"))
        );
        assert_eq!(session.model().class_count(), 1);
    }

    #[test]
    fn test_strict_session() {
        let mut session = Session::with_config(SessionConfig::default().with_strictness(Strictness::Strict));
        session.create_class("Vehicle").unwrap();
        assert_eq!(
            session.add_aggregation("Vehicle", "Driver"),
            Err(ModelError::unknown_class("Driver"))
        );
        assert_eq!(session.project_diagram().edge_count(), 0);
    }

    #[test]
    fn test_preview_follows_model() {
        let mut session = Session::new();
        session.create_class("Solo").unwrap();
        assert!(session.preview(CharacterSet::Ascii).contains("| Solo |"));
    }
}
