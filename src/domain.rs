//! Domain models for feature export.
//!
//! This module contains the types that flow through the transform pipeline:
//! the suite identifier, scenario blocks and the exported records, plus the
//! configuration that parameterises the pipeline and the export.

mod config;
pub use config::Config;

/// Test-suite identifier type and validation.
pub mod identifier;
pub use identifier::{Identifier, InvalidIdentifier};

mod record;
pub use record::{Record, ScenarioBlock, Suite};
