//! # sdlgen Core
//!
//! Core types, traits, and error handling for sdlgen.
//!
//! This crate provides the foundational building blocks used throughout
//! the generator, including:
//!
//! - **Types**: The property type system (`PropertyType`, `ScalarKind`),
//!   relation cardinality and the identifier scalar convention
//! - **Traits**: `Validatable` for schema model consistency checks
//! - **Errors**: Unified error handling with `EngineError` and `EngineResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{EngineError, EngineResult};
pub use traits::{Validatable, is_valid_identifier};
pub use types::{Cardinality, IdScalar, PropertyKind, PropertyType, ScalarKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
