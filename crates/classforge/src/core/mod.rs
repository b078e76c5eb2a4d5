//! Core abstractions shared by the model, its projectors and the CLI
//!
//! Errors, configuration, logging setup and the [`Projector`] trait live here.

pub mod chumsky_utils;
mod config;
mod error;
pub mod logging;
mod projector;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use projector::*;
