//! Error types for sdlgen
//!
//! This module provides unified error handling across the generator:
//! unsupported property types, missing relation resolvers, schema
//! validation failures, file errors and schema file format errors.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for sdlgen
#[derive(Debug, Error)]
pub enum EngineError {
    // ========================================================================
    // Unsupported Types
    // ========================================================================
    /// A property type that has no GraphQL representation
    #[error("Property type not supported: {0}")]
    UnsupportedType(String),

    /// An unsupported property type, located on a model field
    #[error("Property type '{type_name}' of '{model}.{field}' is not supported")]
    UnsupportedFieldType {
        model: String,
        field: String,
        type_name: String,
    },

    // ========================================================================
    // Resolver Errors
    // ========================================================================
    /// A relation is exposed but no resolver was configured for it
    #[error("No resolver configured for relation '{model}.{relation}'")]
    MissingResolver { model: String, relation: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Model validation failed
    #[error("Model validation failed for '{model}': {message}")]
    ModelValidation { model: String, message: String },

    /// Duplicate model name
    #[error("Duplicate model name: '{0}' already exists")]
    DuplicateModel(String),

    /// Duplicate member (property, relation or operation) name
    #[error("Duplicate {kind} name: '{name}' already exists in model '{model}'")]
    DuplicateMember {
        model: String,
        kind: &'static str,
        name: String,
    },

    /// Schema file not found
    #[error("Schema not found at path: {0}")]
    SchemaNotFound(PathBuf),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Invalid schema file format
    #[error("Invalid schema file format: {0}")]
    InvalidSchemaFormat(String),

    /// Schema version mismatch
    #[error("Schema version mismatch: expected {expected}, found {found}")]
    SchemaVersionMismatch { expected: u32, found: u32 },
}

impl EngineError {
    /// Create an unsupported-type error
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        EngineError::UnsupportedType(type_name.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        EngineError::Validation(msg.into())
    }

    /// Create a model validation error
    pub fn model_validation(model: impl Into<String>, msg: impl Into<String>) -> Self {
        EngineError::ModelValidation {
            model: model.into(),
            message: msg.into(),
        }
    }

    /// Create a missing-resolver error
    pub fn missing_resolver(model: impl Into<String>, relation: impl Into<String>) -> Self {
        EngineError::MissingResolver {
            model: model.into(),
            relation: relation.into(),
        }
    }

    /// Attach a model field location to an [`EngineError::UnsupportedType`].
    ///
    /// Other errors are returned unchanged.
    pub fn at_field(self, model: &str, field: &str) -> Self {
        match self {
            EngineError::UnsupportedType(type_name) => EngineError::UnsupportedFieldType {
                model: model.to_string(),
                field: field.to_string(),
                type_name,
            },
            other => other,
        }
    }

    /// Check if this error is an unsupported-type error
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            EngineError::UnsupportedType(_) | EngineError::UnsupportedFieldType { .. }
        )
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::Validation(_)
                | EngineError::ModelValidation { .. }
                | EngineError::DuplicateModel(_)
                | EngineError::DuplicateMember { .. }
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            EngineError::FileRead { .. }
                | EngineError::FileWrite { .. }
                | EngineError::DirectoryCreate { .. }
        )
    }
}

/// Result type alias using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_error() {
        let err = EngineError::unsupported("Object");
        assert!(err.is_unsupported());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Property type not supported: Object");
    }

    #[test]
    fn test_at_field_locates_unsupported_type() {
        let err = EngineError::unsupported("Object").at_field("Widget", "meta");
        assert!(err.is_unsupported());
        assert_eq!(
            err.to_string(),
            "Property type 'Object' of 'Widget.meta' is not supported"
        );
    }

    #[test]
    fn test_at_field_leaves_other_errors_alone() {
        let err = EngineError::validation("bad").at_field("Widget", "meta");
        assert_eq!(err.to_string(), "Validation error: bad");
    }

    #[test]
    fn test_missing_resolver_error() {
        let err = EngineError::missing_resolver("Widget", "owner");
        assert_eq!(
            err.to_string(),
            "No resolver configured for relation 'Widget.owner'"
        );
    }

    #[test]
    fn test_model_validation_error() {
        let err = EngineError::model_validation("Widget", "Name must not be empty");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Model validation failed for 'Widget': Name must not be empty"
        );
    }

    #[test]
    fn test_duplicate_errors() {
        let err = EngineError::DuplicateModel("Widget".to_string());
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Duplicate model name: 'Widget' already exists"
        );

        let err = EngineError::DuplicateMember {
            model: "Widget".to_string(),
            kind: "property",
            name: "id".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate property name: 'id' already exists in model 'Widget'"
        );
    }

    #[test]
    fn test_io_error_classification() {
        let err = EngineError::FileWrite {
            path: PathBuf::from("out/Widget.graphql"),
            message: "permission denied".to_string(),
        };
        assert!(err.is_io());
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "Failed to write file 'out/Widget.graphql': permission denied"
        );
    }
}
