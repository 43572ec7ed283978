//! `sdlgen info`

use anyhow::Context;
use colored::Colorize;
use sdlgen_ir::{Model, load_schema};
use std::path::Path;

pub fn run(schema_path: &Path) -> anyhow::Result<()> {
    let schema = load_schema(schema_path)
        .with_context(|| format!("Failed to load schema {}", schema_path.display()))?;

    println!(
        "{} {} ({} model(s))",
        "Schema".bold(),
        schema_path.display(),
        schema.model_count()
    );
    for model in &schema.models {
        println!("{}", describe_model(model));
    }

    let dangling = schema.dangling_references();
    if !dangling.is_empty() {
        println!();
        println!("{}", "Unknown references:".yellow().bold());
        for reference in dangling {
            println!(
                "  {}.{} -> {}",
                reference.model, reference.member, reference.target
            );
        }
    }
    Ok(())
}

/// One summary line per model
pub fn describe_model(model: &Model) -> String {
    let identifiers: Vec<&str> = model
        .identifying_properties()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    let identifiers = if identifiers.is_empty() {
        "none".dimmed().to_string()
    } else {
        identifiers.join(", ")
    };

    format!(
        "  {} {} properties, {} relations, {} operations; identified by {}",
        model.name.cyan().bold(),
        model.properties.len(),
        model.relations.len(),
        model.operations.len(),
        identifiers
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdlgen_ir::{Operation, PropertyType, Relation};

    #[test]
    fn test_describe_model_counts_members() {
        colored::control::set_override(false);
        let model = Model::new("Widget")
            .with_property("id", PropertyType::unique_identifier().primary_key())
            .with_property("sku", PropertyType::string().unique())
            .with_property("name", PropertyType::string())
            .with_relation(Relation::single("owner", "User"))
            .with_operation(Operation::new("archive", PropertyType::boolean()));

        assert_eq!(
            describe_model(&model),
            "  Widget 3 properties, 1 relations, 1 operations; identified by id, sku"
        );
    }
}
