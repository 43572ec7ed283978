//! # Resolver Stubs
//!
//! One JavaScript file per model with a placeholder resolver for every query
//! and mutation root field the model contributes, named exactly like the
//! field. Relation fields get the resolver source supplied by the caller.

use sdlgen_core::{EngineError, EngineResult};
use std::path::PathBuf;

use crate::context::ModelInfo;
use crate::{GeneratedFile, GeneratorConfig, ResolverModuleKind};

/// Indentation of resolver map entries
const ENTRY_INDENT: &str = "    ";

/// Path of a model's resolver file, relative to the output directory
pub fn resolver_path(config: &GeneratorConfig, model: &str) -> PathBuf {
    config.resolver_dir.join(format!("{}.js", model))
}

/// A resolver that throws until it is implemented
pub fn stub_method(name: &str) -> String {
    format!(
        "{name}: (parent, args, context, info) => {{\n\
         {ENTRY_INDENT}  // Insert your {name} implementation here\n\
         {ENTRY_INDENT}  throw new Error('{name} is not implemented')\n\
         {ENTRY_INDENT}}}"
    )
}

/// Generate the resolver stub file of a model.
///
/// Fails with [`EngineError::MissingResolver`] when an included relation has
/// no resolver source from the hook or the configuration.
pub fn generate_resolvers(info: &ModelInfo) -> EngineResult<GeneratedFile> {
    let queries: Vec<String> = info
        .query_field_names()
        .iter()
        .map(|name| stub_method(name))
        .collect();
    let mutations: Vec<String> = info
        .mutation_field_names()
        .iter()
        .map(|name| stub_method(name))
        .collect();

    let mut relations = Vec::new();
    for rel in info.relations() {
        let source = info
            .ctx
            .relation_resolver(info.model, rel)
            .ok_or_else(|| EngineError::missing_resolver(info.type_name(), &rel.name))?;
        relations.push(format!(
            "{}: {}",
            rel.name,
            indent_continuation(source.trim(), ENTRY_INDENT)
        ));
    }

    let mut sections = Vec::new();
    for (name, entries) in [
        ("Query", &queries),
        ("Mutation", &mutations),
        (info.type_name(), &relations),
    ] {
        if !entries.is_empty() {
            sections.push(render_section(name, entries));
        }
    }

    let opening = match info.ctx.config.output_kind {
        ResolverModuleKind::SourceModule => "export default {",
        ResolverModuleKind::PlainScript => "module.exports = {",
    };

    let mut content = String::from(opening);
    content.push('\n');
    for section in sections {
        content.push_str(&section);
    }
    content.push_str("}\n");

    Ok(GeneratedFile::javascript(
        resolver_path(info.ctx.config, info.type_name()),
        content,
    ))
}

fn render_section(name: &str, entries: &[String]) -> String {
    let mut out = format!("  {}: {{\n", name);
    for entry in entries {
        out.push_str(ENTRY_INDENT);
        out.push_str(entry);
        out.push_str(",\n");
    }
    out.push_str("  },\n");
    out
}

/// Indent every line after the first
fn indent_continuation(text: &str, indent: &str) -> String {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.is_empty() {
                line.to_string()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Tests
// ============================================================================
