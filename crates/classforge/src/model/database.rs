//! Class model database
//!
//! Stores class definitions in creation order together with their members and
//! relationship references.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::core::{ModelConfig, ModelError, Strictness};

/// A typed attribute declared on a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// Opaque display string, never interpreted
    pub type_name: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// Diagram row: `name: type`
    pub fn label(&self) -> String {
        format!("{}: {}", self.name, self.type_name)
    }
}

/// A method declared on a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    /// Opaque display string, never interpreted
    pub return_type: String,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
        }
    }

    /// Diagram row: `name()`
    pub fn label(&self) -> String {
        format!("{}()", self.name)
    }
}

/// A registered class and everything declared on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub methods: Vec<Method>,
    pub parent: Option<String>,
    pub composed_parts: Vec<String>,
    pub aggregated_parts: Vec<String>,
}

impl ClassDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            methods: Vec::new(),
            parent: None,
            composed_parts: Vec::new(),
            aggregated_parts: Vec::new(),
        }
    }

    /// Every class name this definition points at, parent first
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.parent
            .iter()
            .chain(self.composed_parts.iter())
            .chain(self.aggregated_parts.iter())
            .map(String::as_str)
    }
}

/// Registry of class definitions
///
/// Classes iterate in creation order. Relationship targets are stored as bare
/// names; under [`Strictness::Permissive`] they are not checked against the
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassModel {
    classes: Vec<ClassDefinition>,
    index: HashMap<String, usize>,
    config: ModelConfig,
}

impl ClassModel {
    pub fn new() -> Self {
        Self::with_config(ModelConfig::default())
    }

    pub fn with_config(config: ModelConfig) -> Self {
        Self {
            classes: Vec::new(),
            index: HashMap::new(),
            config,
        }
    }

    /// Shorthand for a model that rejects dangling relationship targets
    pub fn strict() -> Self {
        Self::with_config(ModelConfig::strict())
    }

    pub fn config(&self) -> ModelConfig {
        self.config
    }

    pub fn strictness(&self) -> Strictness {
        self.config.strictness
    }

    /// Register a new, empty class
    pub fn create_class(&mut self, name: impl Into<String>) -> Result<(), ModelError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(ModelError::duplicate_class(name));
        }

        debug!(class = %name, "Created class");
        self.index.insert(name.clone(), self.classes.len());
        self.classes.push(ClassDefinition::new(name));
        Ok(())
    }

    /// Append a typed attribute to `class`
    pub fn add_attribute(
        &mut self,
        class: &str,
        attr_name: impl Into<String>,
        attr_type: impl Into<String>,
    ) -> Result<(), ModelError> {
        let attribute = Attribute::new(attr_name, attr_type);
        let definition = self.class_mut(class)?;
        debug!(class, attribute = %attribute.label(), "Added attribute");
        definition.attributes.push(attribute);
        Ok(())
    }

    /// Append a method with a return type to `class`
    pub fn add_method(
        &mut self,
        class: &str,
        method_name: impl Into<String>,
        return_type: impl Into<String>,
    ) -> Result<(), ModelError> {
        let method = Method::new(method_name, return_type);
        let definition = self.class_mut(class)?;
        debug!(class, method = %method.name, "Added method");
        definition.methods.push(method);
        Ok(())
    }

    /// Set the single parent of `class`, replacing any previous one
    ///
    /// An empty `parent_name` clears inheritance.
    pub fn set_inheritance(
        &mut self,
        class: &str,
        parent_name: impl Into<String>,
    ) -> Result<(), ModelError> {
        let parent_name = parent_name.into();
        self.ensure_registered(class)?;
        let parent = if parent_name.is_empty() {
            None
        } else {
            self.check_target(class, &parent_name)?;
            Some(parent_name)
        };

        let definition = self.class_mut(class)?;
        if let (Some(old), Some(new)) = (&definition.parent, &parent) {
            if old != new {
                debug!(class, old_parent = %old, new_parent = %new, "Replacing parent");
            }
        }
        debug!(class, parent = ?parent, "Set inheritance");
        definition.parent = parent;
        Ok(())
    }

    /// Record that `class` owns a `part_name` instance
    pub fn add_composition(
        &mut self,
        class: &str,
        part_name: impl Into<String>,
    ) -> Result<(), ModelError> {
        let part_name = part_name.into();
        self.ensure_registered(class)?;
        self.check_target(class, &part_name)?;

        let definition = self.class_mut(class)?;
        debug!(class, part = %part_name, "Added composition");
        definition.composed_parts.push(part_name);
        Ok(())
    }

    /// Record that `class` refers to a `part_name` it does not own
    pub fn add_aggregation(
        &mut self,
        class: &str,
        part_name: impl Into<String>,
    ) -> Result<(), ModelError> {
        let part_name = part_name.into();
        self.ensure_registered(class)?;
        self.check_target(class, &part_name)?;

        let definition = self.class_mut(class)?;
        debug!(class, part = %part_name, "Added aggregation");
        definition.aggregated_parts.push(part_name);
        Ok(())
    }

    pub fn class(&self, name: &str) -> Option<&ClassDefinition> {
        self.index.get(name).map(|&i| &self.classes[i])
    }

    /// All classes in creation order
    pub fn classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Relationship targets that name no registered class, in model order
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        self.classes
            .iter()
            .flat_map(|c| c.references().map(move |r| (c.name.as_str(), r)))
            .filter(|(_, target)| !self.contains(target))
            .collect()
    }

    fn class_mut(&mut self, name: &str) -> Result<&mut ClassDefinition, ModelError> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.classes[i]),
            None => Err(ModelError::unknown_class(name)),
        }
    }

    fn ensure_registered(&self, name: &str) -> Result<(), ModelError> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(ModelError::unknown_class(name))
        }
    }

    fn check_target(&self, class: &str, target: &str) -> Result<(), ModelError> {
        if self.contains(target) {
            return Ok(());
        }
        match self.config.strictness {
            Strictness::Strict => Err(ModelError::unknown_class(target)),
            Strictness::Permissive => {
                warn!(class, target, "Relationship target is not a registered class");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_empty_class() {
        let mut model = ClassModel::new();
        model.create_class("Animal").unwrap();

        let class = model.class("Animal").unwrap();
        assert_eq!(class.name, "Animal");
        assert!(class.attributes.is_empty());
        assert!(class.methods.is_empty());
        assert!(class.parent.is_none());
        assert!(class.composed_parts.is_empty());
        assert!(class.aggregated_parts.is_empty());
    }

    #[test]
    fn test_duplicate_class_rejected() {
        let mut model = ClassModel::new();
        model.create_class("Animal").unwrap();
        model.add_attribute("Animal", "legs", "int").unwrap();
        let before = model.clone();

        let err = model.create_class("Animal").unwrap_err();
        assert_eq!(err, ModelError::duplicate_class("Animal"));
        assert_eq!(model, before);
        assert_eq!(model.class_count(), 1);
        assert_eq!(model.class("Animal").unwrap().attributes.len(), 1);
    }

    #[test]
    fn test_members_keep_insertion_order_and_duplicates() {
        let mut model = ClassModel::new();
        model.create_class("Person").unwrap();
        model.add_attribute("Person", "name", "str").unwrap();
        model.add_attribute("Person", "age", "int").unwrap();
        model.add_attribute("Person", "name", "str").unwrap();
        model.add_method("Person", "greet", "None").unwrap();
        model.add_method("Person", "age_in", "int").unwrap();

        let person = model.class("Person").unwrap();
        let names: Vec<_> = person.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age", "name"]);
        assert_eq!(person.methods[1], Method::new("age_in", "int"));
    }

    #[test]
    fn test_unknown_class_mutations_leave_model_unchanged() {
        let mut model = ClassModel::new();
        model.create_class("Vehicle").unwrap();
        let before = model.clone();

        let unknown = ModelError::unknown_class("Ghost");
        assert_eq!(model.add_attribute("Ghost", "a", "int"), Err(unknown.clone()));
        assert_eq!(model.add_method("Ghost", "m", "None"), Err(unknown.clone()));
        assert_eq!(model.set_inheritance("Ghost", "Vehicle"), Err(unknown.clone()));
        assert_eq!(model.add_composition("Ghost", "Vehicle"), Err(unknown.clone()));
        assert_eq!(model.add_aggregation("Ghost", "Vehicle"), Err(unknown));
        assert_eq!(model, before);
    }

    #[test]
    fn test_inheritance_last_write_wins() {
        let mut model = ClassModel::new();
        model.create_class("Dog").unwrap();
        model.set_inheritance("Dog", "Animal").unwrap();
        model.set_inheritance("Dog", "Pet").unwrap();
        assert_eq!(model.class("Dog").unwrap().parent.as_deref(), Some("Pet"));
    }

    #[test]
    fn test_empty_parent_clears_inheritance() {
        let mut model = ClassModel::new();
        model.create_class("Dog").unwrap();
        model.set_inheritance("Dog", "Animal").unwrap();
        model.set_inheritance("Dog", "").unwrap();
        assert!(model.class("Dog").unwrap().parent.is_none());
    }

    #[test]
    fn test_permissive_accepts_dangling_targets() {
        let mut model = ClassModel::new();
        model.create_class("Vehicle").unwrap();
        model.add_aggregation("Vehicle", "Driver").unwrap();
        model.add_composition("Vehicle", "Engine").unwrap();
        model.add_composition("Vehicle", "Engine").unwrap();

        let vehicle = model.class("Vehicle").unwrap();
        assert_eq!(vehicle.aggregated_parts, vec!["Driver"]);
        assert_eq!(vehicle.composed_parts, vec!["Engine", "Engine"]);
        assert_eq!(
            model.dangling_references(),
            vec![
                ("Vehicle", "Engine"),
                ("Vehicle", "Engine"),
                ("Vehicle", "Driver")
            ]
        );
    }

    #[test]
    fn test_strict_rejects_dangling_targets() {
        let mut model = ClassModel::strict();
        model.create_class("Vehicle").unwrap();
        let before = model.clone();

        assert_eq!(
            model.add_aggregation("Vehicle", "Driver"),
            Err(ModelError::unknown_class("Driver"))
        );
        assert_eq!(
            model.set_inheritance("Vehicle", "Machine"),
            Err(ModelError::unknown_class("Machine"))
        );
        assert_eq!(model, before);

        model.create_class("Driver").unwrap();
        model.add_aggregation("Vehicle", "Driver").unwrap();
        assert!(model.dangling_references().is_empty());
    }

    #[test]
    fn test_strict_reports_owner_before_target() {
        let mut model = ClassModel::strict();
        assert_eq!(
            model.add_composition("Ghost", "Phantom"),
            Err(ModelError::unknown_class("Ghost"))
        );
    }

    #[test]
    fn test_class_names_in_creation_order() {
        let mut model = ClassModel::new();
        for name in ["Zebra", "Ant", "Moose"] {
            model.create_class(name).unwrap();
        }
        let names: Vec<_> = model.class_names().collect();
        assert_eq!(names, vec!["Zebra", "Ant", "Moose"]);
        assert!(model.contains("Ant"));
        assert!(!model.is_empty());
    }

    #[test]
    fn test_member_labels() {
        assert_eq!(Attribute::new("speed", "int").label(), "speed: int");
        assert_eq!(Method::new("drive", "None").label(), "drive()");
    }
}
