//! Core error types for class model processing
//!
//! Model mutations fail with [`ModelError`]; command scripts fail with
//! [`ScriptError`]. Both are plain values returned to the caller, which decides
//! whether to report and continue.

use thiserror::Error;

/// Errors raised by [`ClassModel`](crate::model::ClassModel) mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Duplicate class: '{name}' already exists")]
    DuplicateClass { name: String },

    #[error("Unknown class: '{name}' is not registered")]
    UnknownClass { name: String },
}

impl ModelError {
    /// Create a new duplicate class error
    pub fn duplicate_class(name: impl Into<String>) -> Self {
        Self::DuplicateClass { name: name.into() }
    }

    /// Create a new unknown class error
    pub fn unknown_class(name: impl Into<String>) -> Self {
        Self::UnknownClass { name: name.into() }
    }

    /// Name of the class the error refers to
    pub fn class_name(&self) -> &str {
        match self {
            Self::DuplicateClass { name } | Self::UnknownClass { name } => name,
        }
    }
}

/// Errors raised while reading a command script
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Parse error: {message} at line {line}, column {column}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Line {line}: {source}")]
    CommandFailed {
        line: usize,
        #[source]
        source: ModelError,
    },
}

impl ScriptError {
    /// Create a new parse error
    pub fn parse_error(message: String, line: usize, column: usize) -> Self {
        Self::ParseError {
            message,
            line,
            column,
        }
    }

    /// Wrap a model error with the script line that caused it
    pub fn command_failed(line: usize, source: ModelError) -> Self {
        Self::CommandFailed { line, source }
    }

    /// 1-based script line the error refers to
    pub fn line(&self) -> usize {
        match self {
            Self::ParseError { line, .. } | Self::CommandFailed { line, .. } => *line,
        }
    }
}
