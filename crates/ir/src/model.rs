//! Model definitions
//!
//! A [`Model`] is a named record type with ordered properties, optional
//! relations to other models and optional operations. The model name is
//! used verbatim as the GraphQL object type name.

use crate::operation::Operation;
use crate::property::Property;
use crate::relation::Relation;
use sdlgen_core::{EngineError, EngineResult, PropertyType, Validatable, is_valid_identifier};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Model
// ============================================================================

/// A data entity of the schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Model name (unique within the schema)
    pub name: String,

    /// Properties in declaration order
    #[serde(default)]
    pub properties: Vec<Property>,

    /// Relations to other models
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<Relation>,

    /// Operations declared on the model
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<Operation>,
}

impl Model {
    /// Create an empty model with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            relations: Vec::new(),
            operations: Vec::new(),
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Add a property
    pub fn with_property(mut self, name: impl Into<String>, property_type: PropertyType) -> Self {
        self.properties.push(Property::new(name, property_type));
        self
    }

    /// Add a relation
    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    /// Add an operation
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Get a property by name
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Get a relation by name
    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.name == name)
    }

    /// Get an operation by name
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|o| o.name == name)
    }

    /// Properties that identify a single record, in declaration order
    pub fn identifying_properties(&self) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.is_identifying()).collect()
    }

    pub fn has_operations(&self) -> bool {
        !self.operations.is_empty()
    }

    pub fn has_relations(&self) -> bool {
        !self.relations.is_empty()
    }
}

impl Validatable for Model {
    fn validate(&self) -> EngineResult<()> {
        if self.name.is_empty() {
            return Err(EngineError::model_validation(
                &self.name,
                "Model name cannot be empty",
            ));
        }

        if !is_valid_identifier(&self.name) {
            return Err(EngineError::model_validation(
                &self.name,
                format!("Model name '{}' is not a valid identifier", self.name),
            ));
        }

        // Properties and relations share the object type's field namespace
        let mut fields = HashSet::new();
        for prop in &self.properties {
            prop.validate()
                .map_err(|e| EngineError::model_validation(&self.name, e.to_string()))?;
            if !fields.insert(prop.name.as_str()) {
                return Err(EngineError::DuplicateMember {
                    model: self.name.clone(),
                    kind: "property",
                    name: prop.name.clone(),
                });
            }
        }

        for rel in &self.relations {
            rel.validate()
                .map_err(|e| EngineError::model_validation(&self.name, e.to_string()))?;
            if !fields.insert(rel.name.as_str()) {
                return Err(EngineError::DuplicateMember {
                    model: self.name.clone(),
                    kind: "relation",
                    name: rel.name.clone(),
                });
            }
        }

        let mut operations = HashSet::new();
        for op in &self.operations {
            op.validate()
                .map_err(|e| EngineError::model_validation(&self.name, e.to_string()))?;
            if !operations.insert(op.name.as_str()) {
                return Err(EngineError::DuplicateMember {
                    model: self.name.clone(),
                    kind: "operation",
                    name: op.name.clone(),
                });
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

    fn widget() -> Model {
        Model::new("Widget")
            .with_property("id", PropertyType::unique_identifier().primary_key())
            .with_property("sku", PropertyType::string().unique())
            .with_property("name", PropertyType::string())
            .with_property("legacyId", PropertyType::unique_identifier().nullable())
    }

    #[test]
    fn test_model_builder_and_lookup() {
        let model = widget().with_relation(Relation::single("owner", "User"));
        assert_eq!(model.properties.len(), 4);
        assert!(model.property("name").is_some());
        assert!(model.property("missing").is_none());
        assert!(model.relation("owner").is_some());
        assert!(model.has_relations());
        assert!(!model.has_operations());
    }

    #[test]
    fn test_identifying_properties() {
        let model = widget();
        let names: Vec<&str> = model
            .identifying_properties()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["id", "sku"]);
    }

    #[test]
    fn test_model_validation_ok() {
        assert!(widget().is_valid());
    }

    #[test]
    fn test_model_validation_bad_name() {
        let err = Model::new("My Widget").validate().unwrap_err();
        assert!(err.is_validation());

        let err = Model::new("").validate().unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_model_validation_duplicate_property() {
        let model = widget().with_property("name", PropertyType::integer());
        let err = model.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Duplicate property name: 'name' already exists in model 'Widget'"
        );
    }

    #[test]
    fn test_model_validation_relation_clashes_with_property() {
        let model = widget().with_relation(Relation::single("name", "User"));
        let err = model.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate relation name"));
    }

    #[test]
    fn test_model_validation_duplicate_operation() {
        let model = widget()
            .with_operation(Operation::new("publish", PropertyType::boolean()))
            .with_operation(Operation::new("publish", PropertyType::boolean()));
        let err = model.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate operation name"));
    }
}
