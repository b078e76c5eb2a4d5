//! Source code synthesis from the class model

mod python;

pub use python::{field_identifier, CodeSynthesizer};
