//! Core types used throughout sdlgen
//!
//! This module contains the property type system consumed by the schema
//! model and the GraphQL type mapper: scalar kinds, the tagged
//! [`PropertyKind`] union, the [`PropertyType`] wrapper carrying nullability
//! and key flags, relation cardinality and the identifier scalar convention.

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

// ============================================================================
// Scalar Kinds
// ============================================================================

/// Scalar property types with a fixed GraphQL mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    Binary,
    Boolean,
    DateTime,
    Decimal,
    Integer,
    String,
    UniqueIdentifier,
}

impl ScalarKind {
    /// Look up a scalar kind by its schema type name (e.g. `"Integer"`)
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "Binary" => Some(ScalarKind::Binary),
            "Boolean" => Some(ScalarKind::Boolean),
            "DateTime" => Some(ScalarKind::DateTime),
            "Decimal" => Some(ScalarKind::Decimal),
            "Integer" => Some(ScalarKind::Integer),
            "String" => Some(ScalarKind::String),
            "UniqueIdentifier" => Some(ScalarKind::UniqueIdentifier),
            _ => None,
        }
    }

    /// The schema type name of this scalar
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarKind::Binary => "Binary",
            ScalarKind::Boolean => "Boolean",
            ScalarKind::DateTime => "DateTime",
            ScalarKind::Decimal => "Decimal",
            ScalarKind::Integer => "Integer",
            ScalarKind::String => "String",
            ScalarKind::UniqueIdentifier => "UniqueIdentifier",
        }
    }

    /// The GraphQL scalar this kind maps to
    pub fn graphql_name(&self, id_scalar: IdScalar) -> &'static str {
        match self {
            ScalarKind::Binary => "String",
            ScalarKind::Boolean => "Boolean",
            ScalarKind::DateTime => "Date",
            ScalarKind::Decimal => "Float",
            ScalarKind::Integer => "Int",
            ScalarKind::String => "String",
            ScalarKind::UniqueIdentifier => id_scalar.graphql_name(),
        }
    }

    /// All scalar kinds
    pub fn all() -> &'static [ScalarKind] {
        &[
            ScalarKind::Binary,
            ScalarKind::Boolean,
            ScalarKind::DateTime,
            ScalarKind::Decimal,
            ScalarKind::Integer,
            ScalarKind::String,
            ScalarKind::UniqueIdentifier,
        ]
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

// ============================================================================
// Identifier Scalar Convention
// ============================================================================

/// Which GraphQL scalar `UniqueIdentifier` properties map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IdScalar {
    /// The built-in `ID` scalar
    #[default]
    #[serde(rename = "ID")]
    Id,
    /// A custom `UUID` scalar (declared in merged documents)
    #[serde(rename = "UUID")]
    Uuid,
}

impl IdScalar {
    /// The GraphQL scalar name
    pub fn graphql_name(&self) -> &'static str {
        match self {
            IdScalar::Id => "ID",
            IdScalar::Uuid => "UUID",
        }
    }

    /// Whether this convention needs a `scalar` declaration
    pub fn is_custom(&self) -> bool {
        matches!(self, IdScalar::Uuid)
    }
}

impl std::fmt::Display for IdScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.graphql_name())
    }
}

// ============================================================================
// Property Kinds
// ============================================================================

/// The tagged shape of a property type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    /// Free-form object; has no GraphQL representation
    Object,
    /// List of another property type
    Array(Box<PropertyType>),
    /// Reference to another model in the same schema
    ReferenceModel(String),
    /// Reference to a model imported from another schema
    ImportModel(String),
    /// One of the fixed scalars
    Scalar(ScalarKind),
}

impl PropertyKind {
    /// The schema type name (`TypeName`) of this kind
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyKind::Object => "Object",
            PropertyKind::Array(_) => "Array",
            PropertyKind::ReferenceModel(_) => "ReferenceModel",
            PropertyKind::ImportModel(_) => "ImportModel",
            PropertyKind::Scalar(scalar) => scalar.type_name(),
        }
    }
}

// ============================================================================
// Property Type
// ============================================================================

/// A property type with its nullability and key flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPropertyType", into = "RawPropertyType")]
pub struct PropertyType {
    /// Shape of the type
    pub kind: PropertyKind,

    /// Whether the value may be null
    pub allow_null: bool,

    /// Whether the property is the model's primary key
    pub is_primary_key: bool,

    /// Whether values must be unique
    pub unique: bool,
}

impl PropertyType {
    /// Create a non-null property type of the given kind
    pub fn new(kind: PropertyKind) -> Self {
        Self {
            kind,
            allow_null: false,
            is_primary_key: false,
            unique: false,
        }
    }

    /// Create a scalar property type
    pub fn scalar(kind: ScalarKind) -> Self {
        Self::new(PropertyKind::Scalar(kind))
    }

    pub fn string() -> Self {
        Self::scalar(ScalarKind::String)
    }

    pub fn integer() -> Self {
        Self::scalar(ScalarKind::Integer)
    }

    pub fn decimal() -> Self {
        Self::scalar(ScalarKind::Decimal)
    }

    pub fn boolean() -> Self {
        Self::scalar(ScalarKind::Boolean)
    }

    pub fn date_time() -> Self {
        Self::scalar(ScalarKind::DateTime)
    }

    pub fn binary() -> Self {
        Self::scalar(ScalarKind::Binary)
    }

    pub fn unique_identifier() -> Self {
        Self::scalar(ScalarKind::UniqueIdentifier)
    }

    /// Create an object property type
    pub fn object() -> Self {
        Self::new(PropertyKind::Object)
    }

    /// Create a list property type
    pub fn array(member: PropertyType) -> Self {
        Self::new(PropertyKind::Array(Box::new(member)))
    }

    /// Create a reference to another model
    pub fn reference(model: impl Into<String>) -> Self {
        Self::new(PropertyKind::ReferenceModel(model.into()))
    }

    /// Create a reference to an imported model
    pub fn import(model: impl Into<String>) -> Self {
        Self::new(PropertyKind::ImportModel(model.into()))
    }

    /// Parse a bare type name such as `"Integer"` or `"String?"`.
    ///
    /// A `?` anywhere in the name marks the type nullable. Only names that
    /// carry no payload (scalars and `Object`) can be parsed.
    pub fn parse_type_name(name: &str) -> EngineResult<Self> {
        let allow_null = name.contains('?');
        let bare = name.replace('?', "");
        let bare = bare.trim();

        let kind = match ScalarKind::from_type_name(bare) {
            Some(scalar) => PropertyKind::Scalar(scalar),
            None if bare == "Object" => PropertyKind::Object,
            None => return Err(EngineError::unsupported(bare)),
        };

        Ok(Self {
            allow_null,
            ..Self::new(kind)
        })
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Mark the type nullable
    pub fn nullable(mut self) -> Self {
        self.allow_null = true;
        self
    }

    /// Mark the property as primary key
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Mark the property as unique
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The schema type name (`TypeName`)
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// The scalar kind, if this is a scalar
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self.kind {
            PropertyKind::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Whether the property identifies a single record: a non-null scalar
    /// that is a primary key, unique, or identifier-typed.
    pub fn is_identifying(&self) -> bool {
        let Some(scalar) = self.scalar_kind() else {
            return false;
        };
        let identifier_typed = scalar == ScalarKind::UniqueIdentifier;
        (self.is_primary_key || self.unique || identifier_typed) && !self.allow_null
    }
}

// ============================================================================
// Serialized form
// ============================================================================

/// Serialized property type: either a bare type name or the full record
/// using the upstream field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawPropertyType {
    Name(String),
    Full(RawPropertyRecord),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawPropertyRecord {
    type_name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    allow_null: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    is_primary_key: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    unique: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    member_type: Option<Box<RawPropertyType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model_name: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TryFrom<RawPropertyType> for PropertyType {
    type Error = EngineError;

    fn try_from(raw: RawPropertyType) -> EngineResult<Self> {
        let record = match raw {
            RawPropertyType::Name(name) => return PropertyType::parse_type_name(&name),
            RawPropertyType::Full(record) => record,
        };

        let kind = match record.type_name.as_str() {
            "Object" => PropertyKind::Object,
            "Array" => {
                let member = record.member_type.ok_or_else(|| {
                    EngineError::InvalidSchemaFormat("Array type requires a MemberType".into())
                })?;
                PropertyKind::Array(Box::new(PropertyType::try_from(*member)?))
            }
            "ReferenceModel" | "ImportModel" => {
                let model = record.model_name.ok_or_else(|| {
                    EngineError::InvalidSchemaFormat(format!(
                        "{} type requires a ModelName",
                        record.type_name
                    ))
                })?;
                if record.type_name == "ImportModel" {
                    PropertyKind::ImportModel(model)
                } else {
                    PropertyKind::ReferenceModel(model)
                }
            }
            other => match ScalarKind::from_type_name(other) {
                Some(scalar) => PropertyKind::Scalar(scalar),
                None => return Err(EngineError::unsupported(other)),
            },
        };

        Ok(Self {
            kind,
            allow_null: record.allow_null,
            is_primary_key: record.is_primary_key,
            unique: record.unique,
        })
    }
}

impl From<PropertyType> for RawPropertyType {
    fn from(ty: PropertyType) -> Self {
        let type_name = ty.type_name().to_string();
        let (member_type, model_name) = match ty.kind {
            PropertyKind::Array(member) => (Some(Box::new(RawPropertyType::from(*member))), None),
            PropertyKind::ReferenceModel(model) | PropertyKind::ImportModel(model) => {
                (None, Some(model))
            }
            PropertyKind::Object | PropertyKind::Scalar(_) => (None, None),
        };

        RawPropertyType::Full(RawPropertyRecord {
            type_name,
            allow_null: ty.allow_null,
            is_primary_key: ty.is_primary_key,
            unique: ty.unique,
            member_type,
            model_name,
        })
    }
}

// ============================================================================
// Relation Cardinality
// ============================================================================

/// How many target records a relation points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cardinality {
    #[default]
    Single,
    Multiple,
}

impl Cardinality {
    pub fn is_multiple(&self) -> bool {
        matches!(self, Cardinality::Multiple)
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cardinality::Single => write!(f, "single"),
            Cardinality::Multiple => write!(f, "multiple"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
