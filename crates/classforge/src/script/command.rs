//! Model commands
//!
//! One variant per mutating [`ClassModel`] operation, so scripts and
//! interactive front ends drive the model the same way.

use std::fmt;

use crate::core::ModelError;
use crate::model::ClassModel;

/// A single mutation of the class model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateClass {
        name: String,
    },
    AddAttribute {
        class: String,
        name: String,
        type_name: String,
    },
    AddMethod {
        class: String,
        name: String,
        return_type: String,
    },
    SetInheritance {
        class: String,
        parent: String,
    },
    AddComposition {
        class: String,
        part: String,
    },
    AddAggregation {
        class: String,
        part: String,
    },
}

impl Command {
    /// Apply this command to `model`
    pub fn apply(&self, model: &mut ClassModel) -> Result<(), ModelError> {
        match self {
            Command::CreateClass { name } => model.create_class(name.as_str()),
            Command::AddAttribute {
                class,
                name,
                type_name,
            } => model.add_attribute(class, name.as_str(), type_name.as_str()),
            Command::AddMethod {
                class,
                name,
                return_type,
            } => model.add_method(class, name.as_str(), return_type.as_str()),
            Command::SetInheritance { class, parent } => {
                model.set_inheritance(class, parent.as_str())
            }
            Command::AddComposition { class, part } => model.add_composition(class, part.as_str()),
            Command::AddAggregation { class, part } => model.add_aggregation(class, part.as_str()),
        }
    }

    /// Script keyword for this command
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::CreateClass { .. } => "class",
            Command::AddAttribute { .. } => "attribute",
            Command::AddMethod { .. } => "method",
            Command::SetInheritance { .. } => "inherit",
            Command::AddComposition { .. } => "compose",
            Command::AddAggregation { .. } => "aggregate",
        }
    }
}

/// Formats as a script line that parses back to the same command
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = self.keyword();
        match self {
            Command::CreateClass { name } => write!(f, "{keyword} {name}"),
            Command::AddAttribute {
                class,
                name,
                type_name,
            } => write!(f, "{keyword} {class} {name} {type_name}"),
            Command::AddMethod {
                class,
                name,
                return_type,
            } => write!(f, "{keyword} {class} {name} {return_type}"),
            Command::SetInheritance { class, parent } => write!(f, "{keyword} {class} {parent}"),
            Command::AddComposition { class, part } | Command::AddAggregation { class, part } => {
                write!(f, "{keyword} {class} {part}")
            }
        }
    }
}
