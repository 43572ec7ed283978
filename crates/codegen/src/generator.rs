//! # Generator Orchestrator
//!
//! The `Generator` is the top-level entry point. It takes a [`Schema`], a
//! [`GeneratorConfig`] and [`GeneratorHooks`], builds a
//! [`GenerationContext`], composes one [`SchemaFragment`] per emitted model
//! and assembles the output files.
//!
//! ## Pipeline
//!
//! ```text
//! Schema + GeneratorConfig + GeneratorHooks
//!         │
//!         ▼
//!   GenerationContext::new()
//!         │
//!         ├──► graphql::compose_model()        → SchemaFragment per model
//!         ├──► resolvers::generate_resolvers() → GeneratedFile per model
//!         │
//!         ▼
//!   per-model .graphql files or merge_fragments() → GeneratedProject
//!         │
//!         ▼
//!   FileEmitter (generate_and_write only) → on_complete(written paths)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sdlgen_codegen::{Generator, GeneratorConfig};
//! use sdlgen_ir::load_schema;
//!
//! let schema = load_schema("schema.json")?;
//! let config = GeneratorConfig::default().with_output_dir("./generated");
//!
//! let report = Generator::new(config).generate_and_write(&schema)?;
//! println!("Wrote {} files", report.written.len());
//! ```

use sdlgen_core::{EngineResult, Validatable};
use sdlgen_ir::Schema;
use std::path::PathBuf;

use crate::context::{GenerationContext, ModelInfo};
use crate::emitter::FileEmitter;
use crate::graphql::{SchemaFragment, compose_model, merge_fragments};
use crate::hooks::GeneratorHooks;
use crate::resolvers::generate_resolvers;
use crate::{FileType, GeneratedFile, GeneratedProject, GeneratorConfig, OutputMode};

// ============================================================================
// Generator
// ============================================================================

/// Top-level generator that orchestrates the full pipeline.
///
/// The `Generator` is stateless aside from its configuration and hooks;
/// every call to [`generate_and_write`](Generator::generate_and_write) uses
/// a fresh [`FileEmitter`].
#[derive(Debug, Clone, Default)]
pub struct Generator {
    /// Configuration controlling output behaviour
    config: GeneratorConfig,

    /// Caller callbacks
    hooks: GeneratorHooks,
}

/// Outcome of [`Generator::generate_and_write`]
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Everything that was generated
    pub project: GeneratedProject,

    /// Paths written during this run, in write order
    pub written: Vec<PathBuf>,

    /// Existing paths that were kept
    pub skipped: Vec<PathBuf>,
}

impl Generator {
    // ====================================================================
    // Construction
    // ====================================================================

    /// Create a new generator with pass-through hooks.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_hooks(config, GeneratorHooks::default())
    }

    /// Create a generator with caller callbacks.
    pub fn with_hooks(config: GeneratorConfig, hooks: GeneratorHooks) -> Self {
        Self { config, hooks }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    // ====================================================================
    // Generation
    // ====================================================================

    /// Run the generation pipeline on a schema without touching the disk.
    ///
    /// # Steps
    ///
    /// 1. **Validate** the schema (names, duplicates).
    /// 2. **Collect warnings** for references to unknown models.
    /// 3. **Compose** one fragment per model accepted by both model hooks.
    /// 4. **Generate resolver stubs** where enabled.
    /// 5. **Assemble** per-model `.graphql` files or one merged document.
    ///
    /// # Errors
    ///
    /// Validation failures, unsupported property types and relations without
    /// a resolver abort the run.
    pub fn generate(&self, schema: &Schema) -> EngineResult<GeneratedProject> {
        // ── 1. Validate ──────────────────────────────────────────────────
        schema.validate()?;

        // ── 2. Build context ─────────────────────────────────────────────
        let ctx = GenerationContext::new(schema, &self.config, &self.hooks);
        let mut output = GeneratedProject::new();

        for dangling in schema.dangling_references() {
            output.add_warning(format!(
                "'{}.{}' references unknown model '{}'",
                dangling.model, dangling.member, dangling.target
            ));
        }

        let models = ctx.models();
        if models.is_empty() {
            output.add_warning("No models selected for generation");
        }

        // ── 3. Compose fragments and resolvers ───────────────────────────
        let mut composed: Vec<(SchemaFragment, Option<GeneratedFile>)> =
            Vec::with_capacity(models.len());

        for model in models {
            let info = ModelInfo::new(model, ctx);

            if info.properties().is_empty() && info.relations().is_empty() {
                output.add_warning(format!(
                    "Model '{}' exposes no fields; its object type is empty",
                    model.name
                ));
            }
            if info.identifying_properties().is_empty() {
                output.add_warning(format!(
                    "Model '{}' has no identifying property; no singular lookup is generated",
                    model.name
                ));
            }

            tracing::debug!(model = %model.name, "composing model");
            let fragment = compose_model(&info)?;

            let resolvers = if ctx.emits_resolvers(model) {
                Some(generate_resolvers(&info)?)
            } else {
                None
            };

            composed.push((fragment, resolvers));
        }

        // ── 4. Assemble files ────────────────────────────────────────────
        match self.config.mode {
            OutputMode::PerModel => {
                for (fragment, resolvers) in composed {
                    output.add_file(GeneratedFile::graphql(
                        format!("{}.graphql", fragment.name),
                        fragment.render(),
                    ));
                    if let Some(file) = resolvers {
                        output.add_file(file);
                    }
                }
            }
            OutputMode::Merged => {
                let (fragments, resolvers): (Vec<_>, Vec<_>) = composed.into_iter().unzip();
                output.add_file(GeneratedFile::graphql(
                    &self.config.merged_file,
                    merge_fragments(&fragments, self.config.id_scalar),
                ));
                for file in resolvers.into_iter().flatten() {
                    output.add_file(file);
                }
            }
        }

        for warning in &output.warnings {
            tracing::warn!("{}", warning);
        }

        tracing::info!(
            files = output.file_count(),
            warnings = output.warnings.len(),
            models = schema.model_count(),
            "schema generation complete",
        );

        Ok(output)
    }

    // ====================================================================
    // Convenience: generate and write to disk
    // ====================================================================

    /// Generate and write all files to the configured output directory,
    /// then pass the written paths to the completion hook.
    ///
    /// Existing files are skipped unless `overwrite` is set, so a second run
    /// over the same directory writes nothing and reports an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or if any file cannot be written.
    /// Files written before a write failure stay on disk.
    pub fn generate_and_write(&self, schema: &Schema) -> EngineResult<GenerationReport> {
        let project = self.generate(schema)?;

        let mut emitter = FileEmitter::from_config(&self.config);
        emitter.emit_all(&project.files)?;
        let (written, skipped) = emitter.finish();

        if self.config.verbose {
            tracing::info!(files = written.len(), "calling completion hook");
        }
        (self.hooks.on_complete)(&written);

        tracing::info!(
            output_dir = %self.config.output_dir.display(),
            written = written.len(),
            skipped = skipped.len(),
            "files written to disk",
        );

        Ok(GenerationReport {
            project,
            written,
            skipped,
        })
    }
}

// ============================================================================
// Standalone convenience functions
// ============================================================================

/// Generate from a schema using default configuration.
///
/// This is a shorthand for `Generator::default().generate(schema)`.
pub fn generate(schema: &Schema) -> EngineResult<GeneratedProject> {
    Generator::default().generate(schema)
}

/// Generate and write to the specified output directory.
pub fn generate_to_dir(
    schema: &Schema,
    output_dir: impl Into<PathBuf>,
) -> EngineResult<GenerationReport> {
    let config = GeneratorConfig::new().with_output_dir(output_dir);
    Generator::new(config).generate_and_write(schema)
}

// ============================================================================
// GenerationSummary
// ============================================================================

/// A human-readable summary of a completed generation run.
///
/// Use [`summarize`] to produce a `GenerationSummary` from a `GeneratedProject`.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Total number of files generated.
    pub total_files: usize,
    /// Number of `.graphql` files.
    pub sdl_files: usize,
    /// Number of resolver stub files.
    pub resolver_files: usize,
    /// Number of warnings.
    pub warning_count: usize,
    /// Total bytes of generated content.
    pub total_bytes: usize,
}

impl GenerationSummary {
    /// Build a summary from a generated project.
    pub fn from_project(project: &GeneratedProject) -> Self {
        Self {
            total_files: project.file_count(),
            sdl_files: project.files_by_type(FileType::GraphQl).len(),
            resolver_files: project.files_by_type(FileType::JavaScript).len(),
            warning_count: project.warnings.len(),
            total_bytes: project.files.iter().map(|f| f.content.len()).sum(),
        }
    }

    /// Format the summary as a human-readable string.
    pub fn display(&self) -> String {
        let mut out = String::with_capacity(512);

        out.push_str("╔══════════════════════════════════════════════════╗\n");
        out.push_str("║         Schema Generation Complete               ║\n");
        out.push_str("╠══════════════════════════════════════════════════╣\n");
        out.push_str(&format!("║  Total Files: {:<35}║\n", self.total_files));
        out.push_str(&format!("║    SDL:       {:<35}║\n", self.sdl_files));
        out.push_str(&format!("║    Resolvers: {:<35}║\n", self.resolver_files));
        out.push_str(&format!("║  Warnings:    {:<35}║\n", self.warning_count));

        let size_str = if self.total_bytes < 1024 {
            format!("{} B", self.total_bytes)
        } else if self.total_bytes < 1024 * 1024 {
            format!("{:.1} KB", self.total_bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", self.total_bytes as f64 / (1024.0 * 1024.0))
        };
        out.push_str(&format!("║  Total Size:  {:<35}║\n", size_str));
        out.push_str("╚══════════════════════════════════════════════════╝\n");

        out
    }
}

impl std::fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Produce a [`GenerationSummary`] from a [`GeneratedProject`].
pub fn summarize(project: &GeneratedProject) -> GenerationSummary {
    GenerationSummary::from_project(project)
}

// ============================================================================
// Tests
// ============================================================================
