//! Operation definitions
//!
//! Operations are mutation-like actions declared on a model. Each one becomes
//! a `Mutation` root field taking a single `data` argument whose input type is
//! generated from the operation's arguments.

use crate::property::Property;
use sdlgen_core::{EngineError, EngineResult, PropertyType, Validatable, is_valid_identifier};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Operation
// ============================================================================

/// A named operation with typed arguments and a typed return value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation name (the GraphQL mutation field name)
    pub name: String,

    /// Arguments in declaration order
    #[serde(default)]
    pub arguments: Vec<Property>,

    /// Return type
    pub returns: PropertyType,
}

impl Operation {
    /// Create an operation without arguments
    pub fn new(name: impl Into<String>, returns: PropertyType) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            returns,
        }
    }

    /// Add an argument
    pub fn with_argument(mut self, name: impl Into<String>, property_type: PropertyType) -> Self {
        self.arguments.push(Property::new(name, property_type));
        self
    }

    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }
}

impl Validatable for Operation {
    fn validate(&self) -> EngineResult<()> {
        if !is_valid_identifier(&self.name) {
            return Err(EngineError::validation(format!(
                "Operation name '{}' is not a valid identifier",
                self.name
            )));
        }

        let mut seen = HashSet::new();
        for arg in &self.arguments {
            arg.validate()?;
            if !seen.insert(arg.name.as_str()) {
                return Err(EngineError::validation(format!(
                    "Duplicate argument '{}' in operation '{}'",
                    arg.name, self.name
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_builder() {
        let op = Operation::new("publish", PropertyType::boolean())
            .with_argument("id", PropertyType::unique_identifier())
            .with_argument("at", PropertyType::date_time().nullable());

        assert!(op.has_arguments());
        assert_eq!(op.arguments.len(), 2);
        assert_eq!(op.arguments[1].name, "at");
        assert!(op.is_valid());
    }

    #[test]
    fn test_operation_duplicate_argument() {
        let op = Operation::new("publish", PropertyType::boolean())
            .with_argument("id", PropertyType::unique_identifier())
            .with_argument("id", PropertyType::string());

        let err = op.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate argument 'id'"));
    }

    #[test]
    fn test_operation_arguments_default_empty() {
        let op: Operation =
            serde_json::from_str(r#"{"name": "archive", "returns": "Boolean"}"#).unwrap();
        assert!(!op.has_arguments());
    }
}
