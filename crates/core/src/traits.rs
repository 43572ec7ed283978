//! Core traits for sdlgen
//!
//! This module defines the [`Validatable`] trait implemented by the schema
//! model types so that structural problems surface before any text is
//! generated.

use crate::error::EngineResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use sdlgen_core::{EngineError, EngineResult, Validatable};
///
/// struct Model {
///     name: String,
/// }
///
/// impl Validatable for Model {
///     fn validate(&self) -> EngineResult<()> {
///         if self.name.is_empty() {
///             return Err(EngineError::validation("Name cannot be empty"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or an `EngineError` describing the problem.
    fn validate(&self) -> EngineResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

/// Check that a name is a valid GraphQL name: `[_A-Za-z][_0-9A-Za-z]*`
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

// ============================================================================
// Tests
// ============================================================================
