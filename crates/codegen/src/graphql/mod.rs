//! # GraphQL SDL Generation
//!
//! - [`types`]: property type → SDL type string
//! - [`composer`]: per-model object, input and root field definitions
//! - [`filters`]: `<Model>Filter` and `<Model>UniqueFilter` input types
//! - [`fragment`]: structured fragments, text parsing and merging
//!

pub mod composer;
pub mod filters;
pub mod fragment;
pub mod types;

pub use composer::compose_model;
pub use fragment::{SchemaFragment, merge_fragments};
pub use types::TypeMapper;

/// Indentation of fields inside a type body
pub const INDENT: &str = "  ";

/// Render a named block such as `type Widget { ... }` with one line per field
pub(crate) fn render_block(keyword: &str, name: &str, lines: &[String]) -> String {
    let mut out = format!("{} {} {{\n", keyword, name);
    for line in lines {
        out.push_str(INDENT);
        out.push_str(line);
        out.push('\n');
    }
    out.push('}');
    out
}
