//! Property type → SDL type string mapping
//!
//! The mapping is a pure function of the property type, the position it
//! appears in and the identifier scalar convention.

use sdlgen_core::{EngineError, EngineResult, IdScalar, PropertyKind, PropertyType, ScalarKind};

/// Where a type appears in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Object type fields and root field return types
    #[default]
    Output,
    /// Input type fields and arguments
    Input,
}

/// Maps property types to SDL type strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeMapper {
    id_scalar: IdScalar,
}

impl TypeMapper {
    pub fn new(id_scalar: IdScalar) -> Self {
        Self { id_scalar }
    }

    pub fn id_scalar(&self) -> IdScalar {
        self.id_scalar
    }

    /// SDL type of a field in an object type
    pub fn output_type(&self, ty: &PropertyType) -> EngineResult<String> {
        self.map(ty, Position::Output)
    }

    /// SDL type of a field in an input type
    pub fn input_type(&self, ty: &PropertyType) -> EngineResult<String> {
        self.map(ty, Position::Input)
    }

    /// Map a property type. Non-null unless the type allows null.
    pub fn map(&self, ty: &PropertyType, position: Position) -> EngineResult<String> {
        let named = match &ty.kind {
            PropertyKind::Object => return Err(EngineError::unsupported(ty.type_name())),
            PropertyKind::Array(member) => format!("[{}]", self.map(member, position)?),
            PropertyKind::ReferenceModel(name) | PropertyKind::ImportModel(name) => {
                self.model_type(name, position)
            }
            PropertyKind::Scalar(scalar) => self.scalar(*scalar).to_string(),
        };

        if ty.allow_null {
            Ok(named)
        } else {
            Ok(format!("{}!", named))
        }
    }

    /// Map a bare type name such as `"Integer"` or `"Decimal?"`
    pub fn map_type_name(&self, name: &str, position: Position) -> EngineResult<String> {
        let ty = PropertyType::parse_type_name(name)?;
        self.map(&ty, position)
    }

    /// Map a property type and drop its outermost `!`
    pub fn nullable_type(&self, ty: &PropertyType, position: Position) -> EngineResult<String> {
        self.map(ty, position)
            .map(|sdl| strip_required(&sdl).to_string())
    }

    /// SDL name of a scalar kind under the configured identifier convention
    pub fn scalar(&self, kind: ScalarKind) -> &'static str {
        kind.graphql_name(self.id_scalar)
    }

    /// Whether `name` is one of the scalars the mapper produces
    pub fn is_base_scalar(&self, name: &str) -> bool {
        match name {
            "String" | "Boolean" | "Date" | "Float" | "Int" | "ID" => true,
            other => self.id_scalar.is_custom() && other == self.id_scalar.graphql_name(),
        }
    }

    fn model_type(&self, name: &str, position: Position) -> String {
        if position == Position::Input && !self.is_base_scalar(name) {
            format!("{}Input", name)
        } else {
            name.to_string()
        }
    }
}

/// Drop a single trailing `!`
pub fn strip_required(sdl: &str) -> &str {
    sdl.strip_suffix('!').unwrap_or(sdl)
}

// ============================================================================
// Tests
// ============================================================================
