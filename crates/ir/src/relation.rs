//! Relation definitions between models

use sdlgen_core::{Cardinality, EngineError, EngineResult, Validatable, is_valid_identifier};
use serde::{Deserialize, Serialize};

// ============================================================================
// Relation
// ============================================================================

/// A named link from one model to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Relation name (the GraphQL field name on the owning model)
    pub name: String,

    /// Name of the target model
    pub model: String,

    /// Whether the relation resolves to one record or many
    #[serde(default)]
    pub cardinality: Cardinality,
}

impl Relation {
    /// Create a relation to a single target record
    pub fn single(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            cardinality: Cardinality::Single,
        }
    }

    /// Create a relation to many target records
    pub fn multiple(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            cardinality: Cardinality::Multiple,
        }
    }

    pub fn is_multiple(&self) -> bool {
        self.cardinality.is_multiple()
    }
}

impl Validatable for Relation {
    fn validate(&self) -> EngineResult<()> {
        if !is_valid_identifier(&self.name) {
            return Err(EngineError::validation(format!(
                "Relation name '{}' is not a valid identifier",
                self.name
            )));
        }
        if !is_valid_identifier(&self.model) {
            return Err(EngineError::validation(format!(
                "Relation '{}' targets invalid model name '{}'",
                self.name, self.model
            )));
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
    fn test_relation_constructors() {
        let owner = Relation::single("owner", "User");
        assert!(!owner.is_multiple());
        assert_eq!(owner.model, "User");

        let parts = Relation::multiple("parts", "Part");
        assert!(parts.is_multiple());
    }

    #[test]
    fn test_relation_default_cardinality() {
        let rel: Relation = serde_json::from_str(r#"{"name": "owner", "model": "User"}"#).unwrap();
        assert_eq!(rel.cardinality, Cardinality::Single);
    }

    #[test]
    fn test_relation_validation() {
        assert!(Relation::single("owner", "User").is_valid());
        assert!(!Relation::single("owner", "").is_valid());
    }
}
