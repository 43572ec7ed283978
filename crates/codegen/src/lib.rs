//! # sdlgen Codegen
//!
//! Generates GraphQL SDL and resolver stubs from a [`Schema`](sdlgen_ir::Schema).
//!
//! ## Features
//!
//! - **Type Mapping**: property types to SDL output and input type strings
//! - **Schema Composition**: object types, operation input types, query and
//!   mutation root fields per model
//! - **Filters**: `<Model>Filter` and `<Model>UniqueFilter` input types
//! - **Merging**: per-model fragments combined into one root document
//! - **Resolver Stubs**: one placeholder resolver file per model
//! - **Emission**: files written under an output directory, skipping
//!   existing files unless overwriting is enabled
//!

// ============================================================================
// Modules
// ============================================================================

pub mod context;
pub mod emitter;
pub mod generator;
pub mod graphql;
pub mod hooks;
pub mod resolvers;

// ============================================================================
// Re-exports
// ============================================================================

pub use context::{GenerationContext, ModelInfo};
pub use emitter::FileEmitter;
pub use generator::{
    GenerationReport, GenerationSummary, Generator, generate, generate_to_dir, summarize,
};
pub use graphql::{SchemaFragment, TypeMapper, merge_fragments};
pub use hooks::GeneratorHooks;

use sdlgen_core::IdScalar;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

// ============================================================================
// GeneratorConfig
// ============================================================================

/// How SDL output is split into files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// One `<Model>.graphql` file per model
    #[default]
    PerModel,
    /// A single merged root document
    Merged,
}

/// Shape of the singular lookup query of each model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupStyle {
    /// `model(where: ModelUniqueFilter): Model`
    #[default]
    UniqueFilter,
    /// `modelByField(field: Scalar!): Model` for every identifying property,
    /// with the argument name camel-cased
    PerIdentifier,
}

/// Export syntax of generated resolver stub files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolverModuleKind {
    /// `export default { ... }`
    #[default]
    SourceModule,
    /// `module.exports = { ... }`
    PlainScript,
}

/// Configuration for the generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Output directory for generated files
    pub output_dir: PathBuf,

    /// Whether to overwrite existing files (otherwise they are skipped)
    pub overwrite: bool,

    /// Whether to log every written or skipped file
    pub verbose: bool,

    /// One file per model or a single merged document
    pub mode: OutputMode,

    /// File name of the merged document, relative to `output_dir`
    pub merged_file: PathBuf,

    /// Export syntax of resolver stubs
    pub output_kind: ResolverModuleKind,

    /// Scalar used for `UniqueIdentifier` properties
    pub id_scalar: IdScalar,

    /// Whether to generate `<Model>Filter` types and `filter` arguments
    pub filters: bool,

    /// Shape of the singular lookup query
    pub lookup: LookupStyle,

    /// Whether to write resolver stub files
    pub emit_resolvers: bool,

    /// Directory of resolver stubs, relative to `output_dir`
    pub resolver_dir: PathBuf,

    /// Resolver source per relation, keyed by `Model.relation`
    pub relation_resolvers: BTreeMap<String, String>,

    /// Directive text appended to object type fields, keyed by `Model.field`
    pub field_directives: BTreeMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./generated"),
            overwrite: false,
            verbose: false,
            mode: OutputMode::PerModel,
            merged_file: PathBuf::from("schema.graphql"),
            output_kind: ResolverModuleKind::SourceModule,
            id_scalar: IdScalar::Id,
            filters: true,
            lookup: LookupStyle::UniqueFilter,
            emit_resolvers: true,
            resolver_dir: PathBuf::from("resolvers"),
            relation_resolvers: BTreeMap::new(),
            field_directives: BTreeMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Allow overwriting existing files
    pub fn allow_overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }

    /// Log every written or skipped file
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Merge all models into a single document at `file`
    pub fn merged_into(mut self, file: impl Into<PathBuf>) -> Self {
        self.mode = OutputMode::Merged;
        self.merged_file = file.into();
        self
    }

    /// Set the resolver stub export syntax
    pub fn with_output_kind(mut self, kind: ResolverModuleKind) -> Self {
        self.output_kind = kind;
        self
    }

    /// Set the identifier scalar convention
    pub fn with_id_scalar(mut self, id_scalar: IdScalar) -> Self {
        self.id_scalar = id_scalar;
        self
    }

    /// Set the singular lookup style
    pub fn with_lookup(mut self, lookup: LookupStyle) -> Self {
        self.lookup = lookup;
        self
    }

    /// Disable filter generation
    pub fn without_filters(mut self) -> Self {
        self.filters = false;
        self
    }

    /// Disable resolver stub files
    pub fn without_resolvers(mut self) -> Self {
        self.emit_resolvers = false;
        self
    }

    /// Set the resolver source for `model.relation`
    pub fn with_relation_resolver(
        mut self,
        model: &str,
        relation: &str,
        source: impl Into<String>,
    ) -> Self {
        self.relation_resolvers
            .insert(format!("{}.{}", model, relation), source.into());
        self
    }

    /// Set the directive text for `model.field`
    pub fn with_field_directive(
        mut self,
        model: &str,
        field: &str,
        directive: impl Into<String>,
    ) -> Self {
        self.field_directives
            .insert(format!("{}.{}", model, field), directive.into());
        self
    }
}

// ============================================================================
// GeneratedFile
// ============================================================================

/// Represents a single generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Relative path from output directory
    pub path: PathBuf,

    /// File content
    pub content: String,

    /// File type for categorization
    pub file_type: FileType,
}

impl GeneratedFile {
    /// Create a new generated file
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, file_type: FileType) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            file_type,
        }
    }

    /// Create a GraphQL SDL file
    pub fn graphql(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileType::GraphQl)
    }

    /// Create a JavaScript resolver file
    pub fn javascript(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileType::JavaScript)
    }

    /// Get the file extension
    pub fn extension(&self) -> &str {
        self.file_type.extension()
    }
}

/// Type of generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    GraphQl,
    JavaScript,
}

impl FileType {
    /// Get the file extension for this type
    pub fn extension(&self) -> &str {
        match self {
            FileType::GraphQl => "graphql",
            FileType::JavaScript => "js",
        }
    }
}

// ============================================================================
// GeneratedProject
// ============================================================================

/// Collection of all files generated for a schema
#[derive(Debug, Clone, Default)]
pub struct GeneratedProject {
    /// All generated files, in generation order
    pub files: Vec<GeneratedFile>,

    /// Warnings raised during generation
    pub warnings: Vec<String>,
}

impl GeneratedProject {
    /// Create an empty project
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the project
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Get the number of files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get files by type
    pub fn files_by_type(&self, file_type: FileType) -> Vec<&GeneratedFile> {
        self.files
            .iter()
            .filter(|f| f.file_type == file_type)
            .collect()
    }

    /// Find a file by its relative path
    pub fn file(&self, path: impl AsRef<std::path::Path>) -> Option<&GeneratedFile> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path == path)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_config_default() {
        let config = GeneratorConfig::default();
        assert!(!config.overwrite);
        assert!(!config.verbose);
        assert!(config.filters);
        assert!(config.emit_resolvers);
        assert_eq!(config.mode, OutputMode::PerModel);
        assert_eq!(config.lookup, LookupStyle::UniqueFilter);
        assert_eq!(config.id_scalar, IdScalar::Id);
    }

    #[test]
    fn test_generator_config_builder() {
        let config = GeneratorConfig::new()
            .with_output_dir("/tmp/output")
            .allow_overwrite()
            .merged_into("root.graphql")
            .with_relation_resolver("Widget", "owner", "loadOwner")
            .with_field_directive("Widget", "name", "@deprecated");

        assert_eq!(config.output_dir, PathBuf::from("/tmp/output"));
        assert!(config.overwrite);
        assert_eq!(config.mode, OutputMode::Merged);
        assert_eq!(config.merged_file, PathBuf::from("root.graphql"));
        assert_eq!(
            config.relation_resolvers.get("Widget.owner").map(String::as_str),
            Some("loadOwner")
        );
        assert_eq!(
            config.field_directives.get("Widget.name").map(String::as_str),
            Some("@deprecated")
        );
    }

    #[test]
    fn test_generator_config_serde_names() {
        let config: GeneratorConfig = serde_json::from_str(
            r#"{"mode": "merged", "lookup": "per-identifier",
                "output_kind": "plain-script", "id_scalar": "UUID"}"#,
        )
        .unwrap();
        assert_eq!(config.mode, OutputMode::Merged);
        assert_eq!(config.lookup, LookupStyle::PerIdentifier);
        assert_eq!(config.output_kind, ResolverModuleKind::PlainScript);
        assert_eq!(config.id_scalar, IdScalar::Uuid);
        // unspecified fields keep their defaults
        assert!(config.filters);
    }

    #[test]
    fn test_generated_file() {
        let file = GeneratedFile::graphql("Widget.graphql", "type Widget { id: ID! }");
        assert_eq!(file.extension(), "graphql");
        assert_eq!(file.file_type, FileType::GraphQl);
    }

    #[test]
    fn test_generated_project() {
        let mut project = GeneratedProject::new();
        project.add_file(GeneratedFile::graphql("Widget.graphql", "type Widget"));
        project.add_file(GeneratedFile::javascript("resolvers/Widget.js", "export default {}"));

        assert_eq!(project.file_count(), 2);
        assert_eq!(project.files_by_type(FileType::JavaScript).len(), 1);
        assert!(project.file("resolvers/Widget.js").is_some());
        assert!(!project.has_warnings());
    }
}
