//! Core projector trait for model output
//!
//! A projector turns the current state of a [`ClassModel`] into some derived
//! artifact: a graph description, source text, and so on. Projectors are
//! pure: they hold configuration only and never cache model state, so calling
//! one twice on an unchanged model yields identical output.

use crate::model::ClassModel;

/// Core trait for model projections
///
/// # Example
/// ```
/// use classforge::core::Projector;
/// use classforge::codegen::CodeSynthesizer;
/// use classforge::model::ClassModel;
///
/// let mut model = ClassModel::new();
/// model.create_class("Vehicle").unwrap();
///
/// let code = CodeSynthesizer::new().project(&model);
/// assert!(code.starts_with("class Vehicle:"));
/// ```
pub trait Projector: Send + Sync {
    /// The artifact this projector produces
    type Output;

    /// Project the full model into the output artifact
    fn project(&self, model: &ClassModel) -> Self::Output;

    /// Get the name of this projector
    fn name(&self) -> &'static str;

    /// Get the produced format
    fn format(&self) -> &'static str;
}
