//! Filter input types
//!
//! `<Model>Filter` carries one nullable field per filterable scalar property
//! and operator, plus `or` / `and` combinators. `<Model>UniqueFilter` carries
//! one nullable field per identifying property.

use sdlgen_core::ScalarKind;

use super::render_block;
use crate::context::ModelInfo;

/// Operators of numbers and dates
pub const ORDERED_OPERATORS: &[&str] = &["lessThan", "greaterThan", "equals", "notEquals"];

/// Operators of strings
pub const TEXT_OPERATORS: &[&str] = &[
    "contains",
    "notContains",
    "startsWith",
    "endsWith",
    "equals",
    "notEquals",
];

/// Operators of booleans
pub const FLAG_OPERATORS: &[&str] = &["equals", "notEquals"];

/// Operators of identifiers
pub const IDENTIFIER_OPERATORS: &[&str] = &["in", "equals", "notEquals"];

/// Filter operators available for a scalar kind
pub fn operators(kind: ScalarKind) -> &'static [&'static str] {
    match kind {
        ScalarKind::Integer | ScalarKind::Decimal | ScalarKind::DateTime => ORDERED_OPERATORS,
        ScalarKind::String => TEXT_OPERATORS,
        ScalarKind::Boolean => FLAG_OPERATORS,
        ScalarKind::UniqueIdentifier => IDENTIFIER_OPERATORS,
        ScalarKind::Binary => &[],
    }
}

/// Per-property operator fields of `<Model>Filter`, without the combinators
pub fn filter_fields(info: &ModelInfo) -> Vec<String> {
    let mut fields = Vec::new();
    for prop in info.properties() {
        let Some(kind) = prop.property_type.scalar_kind() else {
            continue;
        };
        let scalar = info.ctx.mapper.scalar(kind);
        for op in operators(kind) {
            if *op == "in" {
                fields.push(format!("{}_{}: [{}]", prop.name, op, scalar));
            } else {
                fields.push(format!("{}_{}: {}", prop.name, op, scalar));
            }
        }
    }
    fields
}

/// `input <Model>Filter { ... }`, or `None` when no property is filterable
pub fn filter_input(info: &ModelInfo) -> Option<String> {
    let fields = filter_fields(info);
    if fields.is_empty() {
        return None;
    }

    let name = info.filter_type_name();
    let mut lines = vec![
        format!("or: [{}!]", name),
        format!("and: [{}!]", name),
    ];
    lines.extend(fields);
    Some(render_block("input", &name, &lines))
}

/// `input <Model>UniqueFilter { ... }`, or `None` without identifying properties
pub fn unique_filter_input(info: &ModelInfo) -> Option<String> {
    let identifiers = info.identifying_properties();
    if identifiers.is_empty() {
        return None;
    }

    let lines: Vec<String> = identifiers
        .into_iter()
        .filter_map(|prop| {
            let scalar = prop.property_type.scalar_kind()?;
            Some(format!("{}: {}", prop.name, info.ctx.mapper.scalar(scalar)))
        })
        .collect();
    Some(render_block("input", &info.unique_filter_type_name(), &lines))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GenerationContext;
    use crate::{GeneratorConfig, GeneratorHooks};
    use pretty_assertions::assert_eq;
    use sdlgen_core::{IdScalar, PropertyType};
    use sdlgen_ir::{Model, Schema};

    fn with_info<R>(model: Model, config: GeneratorConfig, f: impl FnOnce(&ModelInfo) -> R) -> R {
        let schema = Schema::new().with_model(model);
        let hooks = GeneratorHooks::default();
        let ctx = GenerationContext::new(&schema, &config, &hooks);
        let info = ModelInfo::new(&schema.models[0], ctx);
        f(&info)
    }

    #[test]
    fn test_binary_is_not_filterable() {
        assert!(operators(ScalarKind::Binary).is_empty());
    }

    #[test]
    fn test_filter_input_for_mixed_properties() {
        let model = Model::new("Widget")
            .with_property("id", PropertyType::unique_identifier().primary_key())
            .with_property("name", PropertyType::string())
            .with_property("active", PropertyType::boolean().nullable())
            .with_property("blob", PropertyType::binary());

        let sdl = with_info(model, GeneratorConfig::default(), filter_input);
        let expected = "\
input WidgetFilter {
  or: [WidgetFilter!]
  and: [WidgetFilter!]
  id_in: [ID]
  id_equals: ID
  id_notEquals: ID
  name_contains: String
  name_notContains: String
  name_startsWith: String
  name_endsWith: String
  name_equals: String
  name_notEquals: String
  active_equals: Boolean
  active_notEquals: Boolean
}";
        assert_eq!(sdl.as_deref(), Some(expected));
    }

    #[test]
    fn test_ordered_operators_for_numbers_and_dates() {
        let model = Model::new("Reading")
            .with_property("value", PropertyType::decimal())
            .with_property("takenAt", PropertyType::date_time());

        let fields = with_info(model, GeneratorConfig::default(), filter_fields);
        assert_eq!(
            fields,
            vec![
                "value_lessThan: Float",
                "value_greaterThan: Float",
                "value_equals: Float",
                "value_notEquals: Float",
                "takenAt_lessThan: Date",
                "takenAt_greaterThan: Date",
                "takenAt_equals: Date",
                "takenAt_notEquals: Date",
            ]
        );
    }

    #[test]
    fn test_no_filter_without_filterable_properties() {
        let model = Model::new("Attachment")
            .with_property("data", PropertyType::binary())
            .with_property("tags", PropertyType::array(PropertyType::string()))
            .with_property("owner", PropertyType::reference("User"));

        assert_eq!(with_info(model, GeneratorConfig::default(), filter_input), None);
    }

    #[test]
    fn test_unique_filter_for_widget() {
        let model = Model::new("Widget")
            .with_property("id", PropertyType::unique_identifier().primary_key())
            .with_property("name", PropertyType::string());

        let sdl = with_info(model, GeneratorConfig::default(), unique_filter_input);
        assert_eq!(sdl.as_deref(), Some("input WidgetUniqueFilter {\n  id: ID\n}"));
    }

    #[test]
    fn test_unique_filter_uses_identifier_convention() {
        let model = Model::new("Widget")
            .with_property("id", PropertyType::unique_identifier())
            .with_property("sku", PropertyType::string().unique());
        let config = GeneratorConfig::default().with_id_scalar(IdScalar::Uuid);

        let sdl = with_info(model, config, unique_filter_input);
        assert_eq!(
            sdl.as_deref(),
            Some("input WidgetUniqueFilter {\n  id: UUID\n  sku: String\n}")
        );
    }

    #[test]
    fn test_no_unique_filter_without_identifiers() {
        let model = Model::new("Note")
            .with_property("id", PropertyType::unique_identifier().nullable())
            .with_property("body", PropertyType::string());

        let sdl = with_info(model, GeneratorConfig::default(), unique_filter_input);
        assert_eq!(sdl, None);
    }

    #[test]
    fn test_unique_filter_skips_non_scalar_properties() {
        let model = Model::new("Widget")
            .with_property("code", PropertyType::integer().unique())
            .with_property("owner", PropertyType::reference("User").unique())
            .with_property("tags", PropertyType::array(PropertyType::string()).unique());

        let sdl = with_info(model, GeneratorConfig::default(), unique_filter_input);
        assert_eq!(sdl.as_deref(), Some("input WidgetUniqueFilter {\n  code: Int\n}"));
    }
}
