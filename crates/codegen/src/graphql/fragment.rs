//! # Schema Fragments
//!
//! A [`SchemaFragment`] keeps the SDL of one model (or one existing
//! `.graphql` file) split into three sections: plain definitions, the lines
//! of its `type Query` body and the lines of its `type Mutation` body.
//!
//! Fragments are rendered on their own for per-model files, or combined by
//! [`merge_fragments`] into a single root document with one `Query` and one
//! `Mutation` type.
//!
//! Existing SDL text is parsed with `async-graphql-parser`; each top-level
//! definition keeps its source text, located through the parser positions.
//! `#` comments between definitions are not carried over.

use async_graphql_parser::types::{TypeDefinition, TypeKind, TypeSystemDefinition};
use async_graphql_parser::{Pos, parse_schema};
use sdlgen_core::{EngineError, EngineResult, IdScalar};

use super::render_block;

/// Declaration of the scalar `DateTime` properties map to
const DATE_SCALAR: &str = "scalar Date";

// ============================================================================
// SchemaFragment
// ============================================================================

/// SDL of one model or file, split by section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaFragment {
    /// Model or file the fragment came from
    pub name: String,

    /// Type, input, scalar and other definitions, in order
    pub definitions: Vec<String>,

    /// Body lines of `type Query`
    pub query_fields: Vec<String>,

    /// Body lines of `type Mutation`
    pub mutation_fields: Vec<String>,
}

impl SchemaFragment {
    /// Empty fragment with a source name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Split SDL text into a fragment.
    ///
    /// `type Query` / `type Mutation` blocks (and their `extend type` forms)
    /// contribute their trimmed body lines; every other definition, including
    /// `schema` and `extend schema`, is kept verbatim.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidSchemaFormat`] carrying the parser message when
    /// the text is not a valid SDL document.
    pub fn parse(name: impl Into<String>, source: &str) -> EngineResult<Self> {
        let name = name.into();
        let mut fragment = Self::named(name.clone());

        if is_comment_only(source) {
            return Ok(fragment);
        }

        let document = parse_schema(source)
            .map_err(|e| EngineError::InvalidSchemaFormat(format!("{}: {}", name, e)))?;

        let offsets = SourceOffsets::new(source);
        let mut raw: Vec<RawDefinition> = document
            .definitions
            .iter()
            .map(|def| RawDefinition::locate(def, &offsets))
            .collect();
        raw.sort_by_key(|def| def.start);

        let ends: Vec<usize> = raw
            .iter()
            .skip(1)
            .map(|def| def.start)
            .chain(std::iter::once(source.len()))
            .collect();

        for (def, end) in raw.iter().zip(ends) {
            let text = trim_definition(&source[def.start..end]);
            match def.root {
                Some(RootKind::Query) => fragment.query_fields.extend(def.body_lines(source, text)),
                Some(RootKind::Mutation) => {
                    fragment.mutation_fields.extend(def.body_lines(source, text))
                }
                None => fragment.definitions.push(text.to_string()),
            }
        }

        Ok(fragment)
    }

    /// Whether the fragment holds nothing at all
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty() && self.query_fields.is_empty() && self.mutation_fields.is_empty()
    }

    /// Render the fragment as a standalone document: definitions, then
    /// `type Query`, then `type Mutation`, each only when non-empty.
    pub fn render(&self) -> String {
        let mut blocks = self.definitions.clone();
        if !self.query_fields.is_empty() {
            blocks.push(render_block("type", "Query", &self.query_fields));
        }
        if !self.mutation_fields.is_empty() {
            blocks.push(render_block("type", "Mutation", &self.mutation_fields));
        }
        join_blocks(&blocks)
    }
}

// ============================================================================
// Merging
// ============================================================================

/// Merge fragments into one root document.
///
/// Layout: `scalar Date` (and `scalar UUID` under that convention), one
/// `type Query` with every fragment's query fields in fragment order, one
/// `type Mutation` when any fragment has mutations, then all remaining
/// definitions in fragment order. Scalar declarations that repeat one
/// already emitted are dropped.
pub fn merge_fragments(fragments: &[SchemaFragment], id_scalar: IdScalar) -> String {
    let mut scalars = vec![DATE_SCALAR.to_string()];
    if id_scalar.is_custom() {
        scalars.push(format!("scalar {}", id_scalar.graphql_name()));
    }

    let mut query_fields = Vec::new();
    let mut mutation_fields = Vec::new();
    let mut definitions: Vec<String> = Vec::new();

    for fragment in fragments {
        query_fields.extend(fragment.query_fields.iter().cloned());
        mutation_fields.extend(fragment.mutation_fields.iter().cloned());

        for def in &fragment.definitions {
            if is_scalar_declaration(def) {
                let normalized = normalize_whitespace(def);
                if scalars.iter().any(|s| normalize_whitespace(s) == normalized) {
                    continue;
                }
                scalars.push(def.clone());
            } else {
                definitions.push(def.clone());
            }
        }
    }

    let mut blocks = vec![scalars.join("\n")];
    if !query_fields.is_empty() {
        blocks.push(render_block("type", "Query", &query_fields));
    }
    if !mutation_fields.is_empty() {
        blocks.push(render_block("type", "Mutation", &mutation_fields));
    }
    blocks.extend(definitions);

    join_blocks(&blocks)
}

fn join_blocks(blocks: &[String]) -> String {
    if blocks.is_empty() {
        return String::new();
    }
    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

fn is_scalar_declaration(definition: &str) -> bool {
    definition.trim_start().starts_with("scalar ")
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Source spans
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootKind {
    Query,
    Mutation,
}

/// Byte offsets of parser positions (1-based line and column)
struct SourceOffsets<'s> {
    source: &'s str,
    line_starts: Vec<usize>,
}

impl<'s> SourceOffsets<'s> {
    fn new(source: &'s str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self {
            source,
            line_starts,
        }
    }

    fn offset(&self, pos: Pos) -> usize {
        let Some(&line_start) = self.line_starts.get(pos.line.saturating_sub(1)) else {
            return self.source.len();
        };
        self.source[line_start..]
            .char_indices()
            .nth(pos.column.saturating_sub(1))
            .map_or(self.source.len(), |(i, _)| line_start + i)
    }

    /// Start of an item, including its description when it has one
    fn start(&self, pos: Pos, description: Option<Pos>) -> usize {
        let own = self.offset(pos);
        description.map_or(own, |d| own.min(self.offset(d)))
    }
}

/// One top-level definition located in the source
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawDefinition {
    start: usize,
    root: Option<RootKind>,
    /// Start offsets of the fields of a root operation type
    field_starts: Vec<usize>,
}

impl RawDefinition {
    fn locate(def: &TypeSystemDefinition, offsets: &SourceOffsets) -> Self {
        match def {
            TypeSystemDefinition::Schema(schema) => Self {
                start: offsets.offset(schema.pos),
                root: None,
                field_starts: Vec::new(),
            },
            TypeSystemDefinition::Directive(directive) => Self {
                start: offsets.start(
                    directive.pos,
                    directive.node.description.as_ref().map(|d| d.pos),
                ),
                root: None,
                field_starts: Vec::new(),
            },
            TypeSystemDefinition::Type(ty) => {
                let start = offsets.start(ty.pos, ty.node.description.as_ref().map(|d| d.pos));
                match (root_kind(&ty.node), &ty.node.kind) {
                    (Some(root), TypeKind::Object(object)) => Self {
                        start,
                        root: Some(root),
                        field_starts: object
                            .fields
                            .iter()
                            .map(|f| offsets.start(f.pos, f.node.description.as_ref().map(|d| d.pos)))
                            .collect(),
                    },
                    _ => Self {
                        start,
                        root: None,
                        field_starts: Vec::new(),
                    },
                }
            }
        }
    }

    /// Non-empty trimmed lines from the first field up to the closing brace
    fn body_lines(&self, source: &str, text: &str) -> Vec<String> {
        let Some(&first) = self.field_starts.iter().min() else {
            return Vec::new();
        };
        let end = self.start + text.len();
        if first >= end {
            return Vec::new();
        }
        let body = &source[first..end];
        let body = body.rfind('}').map_or(body, |close| &body[..close]);

        body.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// `Query` / `Mutation` for object types with those names, extended or not
fn root_kind(ty: &TypeDefinition) -> Option<RootKind> {
    if !matches!(ty.kind, TypeKind::Object(_)) {
        return None;
    }
    match ty.name.node.as_str() {
        "Query" => Some(RootKind::Query),
        "Mutation" => Some(RootKind::Mutation),
        _ => None,
    }
}

fn is_comment_only(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}

/// Drop trailing whitespace and comment lines that precede the next definition
fn trim_definition(text: &str) -> &str {
    let mut text = text.trim();
    while let Some((head, last)) = text.rsplit_once('\n') {
        if !last.trim_start().starts_with('#') {
            break;
        }
        text = head.trim_end();
    }
    text
}

// ============================================================================
// Tests
// ============================================================================
