//! # sdlgen IR
//!
//! The schema model consumed by the generator. It mirrors what the upstream
//! schema-definition toolchain produces and is never mutated during
//! generation.
//!
//! ## Core Concepts
//!
//! - **Schema**: The root container, an ordered list of models
//! - **Model**: A named record type (becomes a GraphQL object type)
//! - **Property**: A named, typed field of a model or argument of an operation
//! - **Relation**: A named link to another model, single or multiple
//! - **Operation**: A mutation-like action with typed arguments and return value
//!

// Module declarations
pub mod model;
pub mod operation;
pub mod property;
pub mod relation;
pub mod schema;
pub mod serialization;

// Re-export commonly used types at crate root
pub use model::Model;
pub use operation::Operation;
pub use property::Property;
pub use relation::Relation;
pub use schema::{DanglingReference, Schema};
pub use serialization::{
    SchemaFile, SchemaFormat, load_schema, load_schema_from_str, save_schema,
    save_schema_to_string,
};

// Re-export core types that are commonly used with IR
pub use sdlgen_core::{
    Cardinality, EngineError, EngineResult, IdScalar, PropertyKind, PropertyType, ScalarKind,
    Validatable,
};

/// Current schema version for schema files
pub const SCHEMA_VERSION: u32 = 1;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Tests
// ============================================================================
