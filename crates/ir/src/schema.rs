//! The schema: the root container handed to the generator
//!
//! The schema is produced upstream and consumed read-only. Models keep their
//! declaration order, which is also the order in which output is generated.

use crate::model::Model;
use sdlgen_core::{EngineError, EngineResult, PropertyKind, PropertyType, Validatable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Schema
// ============================================================================

/// An ordered collection of models
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Models in declaration order
    #[serde(default)]
    pub models: Vec<Model>,
}

/// A reference from a model member to a model the schema does not define
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    /// Model declaring the reference
    pub model: String,
    /// Property, relation or operation holding the reference
    pub member: String,
    /// Name of the missing target model
    pub target: String,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a schema from a list of models
    pub fn from_models(models: Vec<Model>) -> Self {
        Self { models }
    }

    /// Add a model
    pub fn add_model(&mut self, model: Model) {
        self.models.push(model);
    }

    /// Builder-style [`add_model`](Schema::add_model)
    pub fn with_model(mut self, model: Model) -> Self {
        self.add_model(model);
        self
    }

    /// Get a model by name
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// References to models that are not part of this schema.
    ///
    /// Covers relation targets and `ReferenceModel` property, argument and
    /// return types. `ImportModel` types point at other schemas and are not
    /// reported.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let known: HashSet<&str> = self.models.iter().map(|m| m.name.as_str()).collect();
        let mut dangling = Vec::new();

        let mut check = |model: &str, member: &str, target: &str| {
            if !known.contains(target) {
                dangling.push(DanglingReference {
                    model: model.to_string(),
                    member: member.to_string(),
                    target: target.to_string(),
                });
            }
        };

        for model in &self.models {
            for rel in &model.relations {
                check(&model.name, &rel.name, &rel.model);
            }
            for prop in &model.properties {
                if let Some(target) = referenced_model(&prop.property_type) {
                    check(&model.name, &prop.name, target);
                }
            }
            for op in &model.operations {
                for arg in &op.arguments {
                    if let Some(target) = referenced_model(&arg.property_type) {
                        check(&model.name, &format!("{}.{}", op.name, arg.name), target);
                    }
                }
                if let Some(target) = referenced_model(&op.returns) {
                    check(&model.name, &op.name, target);
                }
            }
        }

        dangling
    }
}

/// The in-schema model a property type points at, looking through lists
fn referenced_model(ty: &PropertyType) -> Option<&str> {
    match &ty.kind {
        PropertyKind::ReferenceModel(name) => Some(name),
        PropertyKind::Array(member) => referenced_model(member),
        _ => None,
    }
}

impl Validatable for Schema {
    fn validate(&self) -> EngineResult<()> {
        let mut names = HashSet::new();
        for model in &self.models {
            model.validate()?;
            if !names.insert(model.name.as_str()) {
                return Err(EngineError::DuplicateModel(model.name.clone()));
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
    use crate::{Operation, Relation};

    fn shop() -> Schema {
        Schema::new()
            .with_model(
                Model::new("User").with_property("id", PropertyType::unique_identifier()),
            )
            .with_model(
                Model::new("Order")
                    .with_property("id", PropertyType::unique_identifier())
                    .with_relation(Relation::single("customer", "User")),
            )
    }

    #[test]
    fn test_schema_lookup() {
        let schema = shop();
        assert_eq!(schema.model_count(), 2);
        assert!(schema.model("Order").is_some());
        assert!(schema.model("Invoice").is_none());
    }

    #[test]
    fn test_schema_validation_duplicate_model() {
        let schema = shop().with_model(Model::new("User"));
        let err = schema.validate().unwrap_err();
        assert_eq!(err.to_string(), "Duplicate model name: 'User' already exists");
    }

    #[test]
    fn test_no_dangling_references() {
        assert!(shop().dangling_references().is_empty());
    }

    #[test]
    fn test_dangling_references() {
        let schema = shop().with_model(
            Model::new("Invoice")
                .with_property("lines", PropertyType::array(PropertyType::reference("Line")))
                .with_property("account", PropertyType::import("Account"))
                .with_relation(Relation::multiple("payments", "Payment"))
                .with_operation(
                    Operation::new("void", PropertyType::reference("Receipt"))
                        .with_argument("by", PropertyType::reference("User")),
                ),
        );

        let targets: Vec<String> = schema
            .dangling_references()
            .into_iter()
            .map(|d| format!("{}.{}->{}", d.model, d.member, d.target))
            .collect();

        assert_eq!(
            targets,
            vec![
                "Invoice.payments->Payment",
                "Invoice.lines->Line",
                "Invoice.void->Receipt",
            ]
        );
    }
}
