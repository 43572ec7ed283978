//! `sdlgen validate`
//!
//! Checks a schema the way `generate` would, without writing anything.

use anyhow::Context;
use colored::Colorize;
use sdlgen_codegen::Generator;
use sdlgen_ir::{Validatable, load_schema};
use std::path::Path;

use super::print_warnings;
use crate::config::load_config;

pub fn run(schema_path: &Path, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let schema = load_schema(schema_path)
        .with_context(|| format!("Failed to load schema {}", schema_path.display()))?;

    schema
        .validate()
        .with_context(|| format!("{} is not valid", schema_path.display()))?;

    // A dry run also catches unsupported types and missing relation resolvers
    let project = Generator::new(config)
        .generate(&schema)
        .with_context(|| format!("{} cannot be generated", schema_path.display()))?;

    print_warnings(&project.warnings);
    println!(
        "{} {} is valid ({} model(s), {} file(s) would be generated)",
        "✓".green().bold(),
        schema_path.display(),
        schema.model_count(),
        project.file_count()
    );
    Ok(())
}
