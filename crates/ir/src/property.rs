//! Property definitions for model fields and operation arguments
//!
//! A [`Property`] pairs a name with a [`PropertyType`]. Models use them for
//! their fields and operations use them for their arguments, so the ordered
//! `Vec<Property>` doubles as the name → type mapping of the schema model.

use sdlgen_core::{EngineError, EngineResult, PropertyType, Validatable, is_valid_identifier};
use serde::{Deserialize, Serialize};

// ============================================================================
// Property
// ============================================================================

/// A named, typed property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name (used verbatim as the GraphQL field name)
    pub name: String,

    /// Type of the property
    #[serde(rename = "type")]
    pub property_type: PropertyType,
}

impl Property {
    /// Create a new property with the given name and type
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
        }
    }

    /// Whether this property identifies a single record
    pub fn is_identifying(&self) -> bool {
        self.property_type.is_identifying()
    }
}

impl Validatable for Property {
    fn validate(&self) -> EngineResult<()> {
        if !is_valid_identifier(&self.name) {
            return Err(EngineError::validation(format!(
                "Property name '{}' is not a valid identifier",
                self.name
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
