//! `sdlgen generate`

use anyhow::Context;
use colored::Colorize;
use sdlgen_codegen::{Generator, GeneratorConfig, summarize};
use sdlgen_ir::load_schema;
use std::path::Path;

use super::print_warnings;
use crate::GenerateArgs;
use crate::config::{apply_overrides, load_config};

pub fn run(args: &GenerateArgs, config_path: Option<&Path>, verbose: bool) -> anyhow::Result<()> {
    let config = apply_overrides(load_config(config_path)?, args, verbose);
    generate(&args.schema, config)
}

/// Generate from a schema file with a fully resolved configuration
pub fn generate(schema_path: &Path, config: GeneratorConfig) -> anyhow::Result<()> {
    let schema = load_schema(schema_path)
        .with_context(|| format!("Failed to load schema {}", schema_path.display()))?;

    tracing::info!(
        schema = %schema_path.display(),
        models = schema.model_count(),
        output_dir = %config.output_dir.display(),
        "generating",
    );

    let generator = Generator::new(config);
    let report = generator
        .generate_and_write(&schema)
        .with_context(|| format!("Generation from {} failed", schema_path.display()))?;

    print!("{}", summarize(&report.project));
    print_warnings(&report.project.warnings);

    println!(
        "{} {} file(s) written to {}",
        "✓".green().bold(),
        report.written.len().to_string().green(),
        generator.config().output_dir.display()
    );
    if !report.skipped.is_empty() {
        println!(
            "  {} existing file(s) kept; pass --overwrite to replace them",
            report.skipped.len().to_string().yellow()
        );
    }

    Ok(())
}
