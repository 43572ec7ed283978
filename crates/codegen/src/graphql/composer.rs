//! Per-model SDL composition
//!
//! Produces the [`SchemaFragment`] of one model: its object type, one input
//! type per operation with arguments, the count type, the filter types and
//! the query and mutation root fields.

use sdlgen_core::{EngineResult, Validatable};
use sdlgen_ir::{Operation, Relation};

use super::filters::{filter_input, unique_filter_input};
use super::fragment::SchemaFragment;
use super::render_block;
use super::types::strip_required;
use crate::LookupStyle;
use crate::context::{GenerationContext, ModelInfo};

/// Compose the SDL fragment of a model
pub fn compose_model(info: &ModelInfo) -> EngineResult<SchemaFragment> {
    info.model.validate()?;

    let mut fragment = SchemaFragment::named(info.type_name());
    let filter = if info.ctx.config.filters {
        filter_input(info)
    } else {
        None
    };
    let has_filter = filter.is_some();

    fragment.definitions.push(object_type(info)?);
    for op in info.operations() {
        if let Some(input) = operation_input(info, op)? {
            fragment.definitions.push(input);
        }
    }
    fragment.definitions.push(render_block(
        "type",
        &info.meta_type_name(),
        &["count: Int!".to_string()],
    ));
    if let Some(filter) = filter {
        fragment.definitions.push(filter);
    }
    if info.ctx.config.lookup == LookupStyle::UniqueFilter {
        if let Some(unique) = unique_filter_input(info) {
            fragment.definitions.push(unique);
        }
    }

    fragment.query_fields = query_fields(info, has_filter)?;
    fragment.mutation_fields = mutation_fields(info)?;

    Ok(fragment)
}

/// `type <Model> { ... }` with properties first, then relations
pub fn object_type(info: &ModelInfo) -> EngineResult<String> {
    let mut lines = Vec::new();

    for prop in info.properties() {
        let ty = info
            .ctx
            .mapper
            .output_type(&prop.property_type)
            .map_err(|e| e.at_field(info.type_name(), &prop.name))?;
        lines.push(with_directive(info, &prop.name, format!("{}: {}", prop.name, ty)));
    }

    for rel in info.relations() {
        lines.push(with_directive(
            info,
            &rel.name,
            format!("{}: {}", rel.name, relation_type(rel)),
        ));
    }

    Ok(render_block("type", info.type_name(), &lines))
}

/// `Target` for single relations, `[Target!]` for multiple
pub fn relation_type(relation: &Relation) -> String {
    if relation.is_multiple() {
        format!("[{}!]", relation.model)
    } else {
        relation.model.clone()
    }
}

fn with_directive(info: &ModelInfo, field: &str, line: String) -> String {
    match info.ctx.field_directive(info.model, field) {
        Some(directive) => format!("{} {}", line, directive.trim()),
        None => line,
    }
}

/// `input <Operation>Args { ... }`, or `None` for operations without arguments
pub fn operation_input(info: &ModelInfo, op: &Operation) -> EngineResult<Option<String>> {
    if !op.has_arguments() {
        return Ok(None);
    }

    let mut lines = Vec::with_capacity(op.arguments.len());
    for arg in &op.arguments {
        let ty = info
            .ctx
            .mapper
            .input_type(&arg.property_type)
            .map_err(|e| e.at_field(info.type_name(), &format!("{}.{}", op.name, arg.name)))?;
        lines.push(format!("{}: {}", arg.name, ty));
    }

    Ok(Some(render_block(
        "input",
        &GenerationContext::args_type_name(&op.name),
        &lines,
    )))
}

/// Query root fields: collection, count, then singular lookups
pub fn query_fields(info: &ModelInfo, with_filter: bool) -> EngineResult<Vec<String>> {
    let name = info.type_name();
    let filter_arg = if with_filter {
        format!(", filter: {}", info.filter_type_name())
    } else {
        String::new()
    };

    let mut fields = vec![format!(
        "{}(offset: Int, limit: Int{}): [{}!]!",
        info.collection_query_name(),
        filter_arg,
        name
    )];

    if with_filter {
        fields.push(format!(
            "{}(filter: {}): {}!",
            info.meta_query_name(),
            info.filter_type_name(),
            info.meta_type_name()
        ));
    } else {
        fields.push(format!("{}: {}!", info.meta_query_name(), info.meta_type_name()));
    }

    let identifiers = info.identifying_properties();
    if identifiers.is_empty() {
        return Ok(fields);
    }

    match info.ctx.config.lookup {
        LookupStyle::UniqueFilter => fields.push(format!(
            "{}(where: {}): {}",
            info.single_query_name(),
            info.unique_filter_type_name(),
            name
        )),
        LookupStyle::PerIdentifier => {
            for prop in identifiers {
                let Some(scalar) = prop.property_type.scalar_kind() else {
                    continue;
                };
                fields.push(format!(
                    "{}({}: {}!): {}",
                    GenerationContext::lookup_by_name(name, &prop.name),
                    GenerationContext::camel(&prop.name),
                    info.ctx.mapper.scalar(scalar),
                    name
                ));
            }
        }
    }

    Ok(fields)
}

/// Mutation root fields, one per included operation
pub fn mutation_fields(info: &ModelInfo) -> EngineResult<Vec<String>> {
    let mut fields = Vec::new();
    for op in info.operations() {
        let returns = info
            .ctx
            .mapper
            .output_type(&op.returns)
            .map_err(|e| e.at_field(info.type_name(), &op.name))?;
        let returns = strip_required(&returns);

        if op.has_arguments() {
            fields.push(format!(
                "{}(data: {}!): {}",
                op.name,
                GenerationContext::args_type_name(&op.name),
                returns
            ));
        } else {
            fields.push(format!("{}: {}", op.name, returns));
        }
    }
    Ok(fields)
}

// ============================================================================
// Tests
// ============================================================================
