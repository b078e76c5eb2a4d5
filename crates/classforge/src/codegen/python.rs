//! Python skeleton synthesis
//!
//! Emits one class block per registered class, in creation order. Blocks are
//! always syntactically complete (every suite has a body) but carry no
//! behavior beyond placeholder assignments.

use tracing::{debug, span, trace, Level};

use crate::core::{CodegenConfig, Projector};
use crate::model::{ClassDefinition, ClassModel};

/// Field identifier for a part held by another class: `EngineBlock` -> `engineblock`
pub fn field_identifier(class_name: &str) -> String {
    class_name.to_lowercase()
}

/// Projects a [`ClassModel`] into Python class skeletons
#[derive(Debug, Clone, Default)]
pub struct CodeSynthesizer {
    config: CodegenConfig,
}

impl CodeSynthesizer {
    pub fn new() -> Self {
        Self::with_config(CodegenConfig::default())
    }

    pub fn with_config(config: CodegenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> CodegenConfig {
        self.config
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(self.config.indent * level)
    }

    fn write_class(&self, out: &mut String, class: &ClassDefinition) {
        let one = self.indent(1);
        let two = self.indent(2);

        match &class.parent {
            Some(parent) => out.push_str(&format!("class {}({}):\n", class.name, parent)),
            None => out.push_str(&format!("class {}:\n", class.name)),
        }

        for attr in &class.attributes {
            out.push_str(&format!("{one}{}: {}\n", attr.name, attr.type_name));
        }

        out.push_str(&format!("{one}def __init__(self):\n"));
        if class.attributes.is_empty() {
            out.push_str(&format!("{two}pass\n"));
        }
        for attr in &class.attributes {
            out.push_str(&format!("{two}self.{} = None\n", attr.name));
        }

        for method in &class.methods {
            out.push_str(&format!(
                "{one}def {}(self) -> {}:\n",
                method.name, method.return_type
            ));
            out.push_str(&format!("{two}# body of {} goes here\n", method.name));
            out.push_str(&format!("{two}pass\n"));
        }

        for part in &class.composed_parts {
            out.push_str(&format!("{one}{} = {}()\n", field_identifier(part), part));
        }

        for part in &class.aggregated_parts {
            out.push_str(&format!(
                "{one}{} = None  # {} reference, assigned by the caller\n",
                field_identifier(part),
                part
            ));
        }

        out.push('\n');
    }
}

impl Projector for CodeSynthesizer {
    type Output = String;

    fn project(&self, model: &ClassModel) -> String {
        let synth_span = span!(
            Level::INFO,
            "synthesize_code",
            class_count = model.class_count()
        );
        let _enter = synth_span.enter();

        let mut out = String::new();
        for class in model.classes() {
            trace!(class = %class.name, "Synthesizing class");
            self.write_class(&mut out, class);
        }

        debug!(bytes = out.len(), "Code synthesized");
        out
    }

    fn name(&self) -> &'static str {
        "python"
    }

    fn format(&self) -> &'static str {
        "py"
    }
}
