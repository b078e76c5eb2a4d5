//! Class model to graph description projection
//!
//! Rebuilds the whole graph from the model on every call. There is no diff
//! logic and no state carried between calls.

use tracing::{debug, span, trace, Level};

use super::graph::{GraphDescription, GraphEdge, GraphNode, NodeLabel, NodeShape, NodeStyle};
use crate::core::{DiagramConfig, Projector};
use crate::model::{ClassDefinition, ClassModel};

/// Projects a [`ClassModel`] into a [`GraphDescription`]
#[derive(Debug, Clone, Default)]
pub struct DiagramProjector {
    config: DiagramConfig,
}

impl DiagramProjector {
    pub fn new() -> Self {
        Self::with_config(DiagramConfig::default())
    }

    pub fn with_config(config: DiagramConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    fn node_for(&self, class: &ClassDefinition) -> GraphNode {
        GraphNode {
            id: class.name.clone(),
            label: NodeLabel {
                header: class.name.clone(),
                attributes: class.attributes.iter().map(|a| a.label()).collect(),
                methods: class.methods.iter().map(|m| m.label()).collect(),
            },
            shape: NodeShape::Record,
            style: NodeStyle {
                border_color: self.config.border_color.clone(),
                fill_color: self.config.fill_color.clone(),
                filled: true,
            },
        }
    }

    fn edges_for(class: &ClassDefinition, edges: &mut Vec<GraphEdge>) {
        if let Some(parent) = &class.parent {
            edges.push(GraphEdge::inheritance(parent, &class.name));
        }
        edges.extend(
            class
                .composed_parts
                .iter()
                .map(|part| GraphEdge::composition(&class.name, part)),
        );
        edges.extend(
            class
                .aggregated_parts
                .iter()
                .map(|part| GraphEdge::aggregation(&class.name, part)),
        );
    }
}

impl Projector for DiagramProjector {
    type Output = GraphDescription;

    fn project(&self, model: &ClassModel) -> GraphDescription {
        let project_span = span!(
            Level::INFO,
            "project_diagram",
            class_count = model.class_count()
        );
        let _enter = project_span.enter();

        let mut graph =
            GraphDescription::new(&self.config.graph_name, self.config.rank_direction);

        for class in model.classes() {
            trace!(
                class = %class.name,
                rows = 1 + class.attributes.len() + class.methods.len(),
                "Projecting class"
            );
            graph.nodes.push(self.node_for(class));
            Self::edges_for(class, &mut graph.edges);
        }

        debug!(
            node_count = graph.node_count(),
            edge_count = graph.edge_count(),
            "Diagram projected"
        );
        graph
    }

    fn name(&self) -> &'static str {
        "diagram"
    }

    fn format(&self) -> &'static str {
        "graph"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::graph::{ArrowHead, EdgeDirection, EdgeKind};

    fn vehicle_model() -> ClassModel {
        let mut model = ClassModel::new();
        model.create_class("Vehicle").unwrap();
        model.create_class("Engine").unwrap();
        model.add_attribute("Vehicle", "speed", "int").unwrap();
        model.add_method("Vehicle", "drive", "None").unwrap();
        model.add_composition("Vehicle", "Engine").unwrap();
        model
    }

    #[test]
    fn test_projector_metadata() {
        let projector = DiagramProjector::new();
        assert_eq!(projector.name(), "diagram");
        assert_eq!(projector.format(), "graph");
    }

    #[test]
    fn test_empty_model() {
        let graph = DiagramProjector::new().project(&ClassModel::new());
        assert!(graph.is_empty());
        assert_eq!(graph.name, "UMLDiagram");
    }

    #[test]
    fn test_node_label_sections() {
        let graph = DiagramProjector::new().project(&vehicle_model());
        let vehicle = graph.node("Vehicle").unwrap();

        let rows: Vec<_> = vehicle.label.rows().collect();
        assert_eq!(rows, vec!["Vehicle", "speed: int", "drive()"]);
        assert_eq!(vehicle.shape, NodeShape::Record);
        assert_eq!(vehicle.style.fill_color, "lightgray");
        assert!(vehicle.style.filled);
    }

    #[test]
    fn test_composition_edge_uses_open_circle() {
        let graph = DiagramProjector::new().project(&vehicle_model());
        let edges: Vec<_> = graph.edges_from("Vehicle").collect();

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].target, "Engine");
        assert_eq!(edges[0].kind, EdgeKind::Composition);
        assert_eq!(edges[0].arrow_head, ArrowHead::Odot);
    }

    #[test]
    fn test_inheritance_edge_is_reversed() {
        let mut model = ClassModel::new();
        model.create_class("Dog").unwrap();
        model.set_inheritance("Dog", "Animal").unwrap();

        let graph = DiagramProjector::new().project(&model);
        assert_eq!(graph.edge_count(), 1);
        let edge = &graph.edges[0];
        assert_eq!(edge.source, "Animal");
        assert_eq!(edge.target, "Dog");
        assert_eq!(edge.arrow_head, ArrowHead::Empty);
        assert_eq!(edge.direction, EdgeDirection::Back);
        // Unregistered parent gets no node of its own
        assert!(graph.node("Animal").is_none());
    }

    #[test]
    fn test_edge_order_within_class() {
        let mut model = ClassModel::new();
        model.create_class("Car").unwrap();
        model.add_aggregation("Car", "Driver").unwrap();
        model.add_composition("Car", "Wheel").unwrap();
        model.add_composition("Car", "Wheel").unwrap();
        model.set_inheritance("Car", "Vehicle").unwrap();

        let graph = DiagramProjector::new().project(&model);
        let kinds: Vec<_> = graph.edges.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EdgeKind::Inheritance,
                EdgeKind::Composition,
                EdgeKind::Composition,
                EdgeKind::Aggregation
            ]
        );
        assert_eq!(graph.edges[3].arrow_head, ArrowHead::Diamond);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let model = vehicle_model();
        let projector = DiagramProjector::new();
        assert_eq!(projector.project(&model), projector.project(&model));
    }

    #[test]
    fn test_custom_config() {
        let config = DiagramConfig::new()
            .with_graph_name("Zoo")
            .with_fill_color("white");
        let graph = DiagramProjector::with_config(config).project(&vehicle_model());
        assert_eq!(graph.name, "Zoo");
        assert_eq!(graph.node("Engine").unwrap().style.fill_color, "white");
    }
}
