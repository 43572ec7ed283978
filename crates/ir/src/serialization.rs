//! Loading and saving schema files
//!
//! Schemas are stored as JSON (`.json`) or TOML (`.toml`). The format is
//! chosen from the file extension. Both formats carry a `schema_version`
//! next to the model list.

use crate::{SCHEMA_VERSION, Schema};
use sdlgen_core::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Schema File Wrapper
// ============================================================================

/// Wrapper for schema files that includes version information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Schema version of the file
    #[serde(default = "current_version")]
    pub schema_version: u32,

    /// The schema data
    #[serde(flatten)]
    pub schema: Schema,
}

fn current_version() -> u32 {
    SCHEMA_VERSION
}

impl SchemaFile {
    /// Wrap a schema at the current version
    pub fn new(schema: Schema) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            schema,
        }
    }

    /// Unwrap the schema, rejecting files written by a newer version
    pub fn into_schema(self) -> EngineResult<Schema> {
        if self.schema_version > SCHEMA_VERSION {
            return Err(EngineError::SchemaVersionMismatch {
                expected: SCHEMA_VERSION,
                found: self.schema_version,
            });
        }
        Ok(self.schema)
    }
}

// ============================================================================
// Formats
// ============================================================================

/// On-disk format of a schema file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Toml,
}

impl SchemaFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> EngineResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(SchemaFormat::Json),
            Some("toml") => Ok(SchemaFormat::Toml),
            other => Err(EngineError::InvalidSchemaFormat(format!(
                "unsupported schema file extension {:?} for '{}'",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }
}

// ============================================================================
// Load Functions
// ============================================================================

/// Load a schema from a file
///
/// # Example
///
/// ```rust,ignore
/// use sdlgen_ir::load_schema;
///
/// let schema = load_schema("schema.json")?;
/// println!("Loaded {} models", schema.model_count());
/// ```
pub fn load_schema(path: impl AsRef<Path>) -> EngineResult<Schema> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(EngineError::SchemaNotFound(path.to_path_buf()));
    }

    let format = SchemaFormat::from_path(path)?;

    let text = std::fs::read_to_string(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    load_schema_from_str(&text, format).map_err(|e| match e {
        EngineError::JsonSerialization(je) => EngineError::FileRead {
            path: path.to_path_buf(),
            message: format!("Invalid schema file format: {}", je),
        },
        other => other,
    })
}

/// Load a schema from a string in the given format
pub fn load_schema_from_str(text: &str, format: SchemaFormat) -> EngineResult<Schema> {
    let file: SchemaFile = match format {
        SchemaFormat::Json => serde_json::from_str(text)?,
        SchemaFormat::Toml => {
            toml::from_str(text).map_err(|e| EngineError::InvalidSchemaFormat(e.to_string()))?
        }
    };
    file.into_schema()
}

// ============================================================================
// Save Functions
// ============================================================================

/// Serialize a schema to a string in the given format
pub fn save_schema_to_string(schema: &Schema, format: SchemaFormat) -> EngineResult<String> {
    let file = SchemaFile::new(schema.clone());
    match format {
        SchemaFormat::Json => Ok(serde_json::to_string_pretty(&file)?),
        SchemaFormat::Toml => toml::to_string_pretty(&file)
            .map_err(|e| EngineError::InvalidSchemaFormat(e.to_string())),
    }
}

/// Save a schema to a file, creating parent directories as needed
pub fn save_schema(schema: &Schema, path: impl AsRef<Path>) -> EngineResult<()> {
    let path = path.as_ref();
    let format = SchemaFormat::from_path(path)?;
    let text = save_schema_to_string(schema, format)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| EngineError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    std::fs::write(path, text).map_err(|e| EngineError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Model, Operation, Relation};
    use sdlgen_core::PropertyType;
    use tempfile::tempdir;

    fn sample() -> Schema {
        Schema::new().with_model(
            Model::new("Widget")
                .with_property("id", PropertyType::unique_identifier().primary_key())
                .with_property("tags", PropertyType::array(PropertyType::string()).nullable())
                .with_relation(Relation::multiple("parts", "Part"))
                .with_operation(
                    Operation::new("rename", PropertyType::reference("Widget"))
                        .with_argument("name", PropertyType::string()),
                ),
        )
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/schema.json");

        save_schema(&sample(), &path).unwrap();
        let loaded = load_schema(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("schema.toml");

        save_schema(&sample(), &path).unwrap();
        let loaded = load_schema(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_load_toml_with_shorthand_types() {
        let text = r#"
            [[models]]
            name = "Widget"

            [[models.properties]]
            name = "id"
            type = { TypeName = "UniqueIdentifier", IsPrimaryKey = true }

            [[models.properties]]
            name = "price"
            type = "Decimal?"
        "#;

        let schema = load_schema_from_str(text, SchemaFormat::Toml).unwrap();
        let widget = schema.model("Widget").unwrap();
        assert_eq!(
            widget.property("price").unwrap().property_type,
            PropertyType::decimal().nullable()
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_schema("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, EngineError::SchemaNotFound(_)));
    }

    #[test]
    fn test_unknown_extension() {
        let err = SchemaFormat::from_path(Path::new("schema.yaml")).unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_newer_schema_version_rejected() {
        let text = r#"{"schema_version": 99, "models": []}"#;
        let err = load_schema_from_str(text, SchemaFormat::Json).unwrap_err();
        assert!(matches!(
            err,
            EngineError::SchemaVersionMismatch { found: 99, .. }
        ));
    }

    #[test]
    fn test_unknown_type_name_rejected() {
        let text = r#"{"models": [{"name": "Widget",
            "properties": [{"name": "blob", "type": {"TypeName": "Money"}}]}]}"#;
        let err = load_schema_from_str(text, SchemaFormat::Json).unwrap_err();
        assert!(err.to_string().contains("Money"));
    }
}
