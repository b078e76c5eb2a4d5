//! In-memory class model
//!
//! The single source of truth that both projections read from.

mod database;

pub use database::{Attribute, ClassDefinition, ClassModel, Method};
