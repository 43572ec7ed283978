//! # Generation Context
//!
//! The `GenerationContext` holds everything the SDL and resolver writers
//! need for one run. It is built from a `Schema`, the generator
//! configuration and the hooks, and provides:
//!
//! - The list of models to emit (both model predicates applied)
//! - Included properties, relations and operations per model
//! - Identifying properties used for singular lookups
//! - Field directive and relation resolver lookups (hook first, then config)
//! - Case conversion utilities (camelCase, PascalCase, plural and singular forms)
//! - Root field and input type naming
//!

use heck::{ToLowerCamelCase, ToPascalCase};
use sdlgen_ir::{Model, Operation, Property, Relation, Schema};

use crate::graphql::TypeMapper;
use crate::hooks::GeneratorHooks;
use crate::{GeneratorConfig, LookupStyle};

// ============================================================================
// GenerationContext
// ============================================================================

/// Context carrying all information needed for one generation run.
///
/// Borrowed by every writer; nothing in it is mutated during generation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    /// The schema being generated
    pub schema: &'a Schema,

    /// Generator configuration
    pub config: &'a GeneratorConfig,

    /// Caller callbacks
    pub hooks: &'a GeneratorHooks,

    /// Type mapper for the configured identifier scalar
    pub mapper: TypeMapper,
}

impl<'a> GenerationContext<'a> {
    // ====================================================================
    // Construction
    // ====================================================================

    pub fn new(schema: &'a Schema, config: &'a GeneratorConfig, hooks: &'a GeneratorHooks) -> Self {
        Self {
            schema,
            config,
            hooks,
            mapper: TypeMapper::new(config.id_scalar),
        }
    }

    // ====================================================================
    // Model accessors
    // ====================================================================

    /// Models to emit, in declaration order
    pub fn models(&self) -> Vec<&'a Model> {
        self.schema
            .models
            .iter()
            .filter(|m| self.hooks.emits_model(m))
            .collect()
    }

    /// Properties that pass the property inclusion hook
    pub fn included_properties(&self, model: &'a Model) -> Vec<&'a Property> {
        model
            .properties
            .iter()
            .filter(|p| (self.hooks.include_property)(model, *p))
            .collect()
    }

    /// Relations that pass the relation inclusion hook
    pub fn included_relations(&self, model: &'a Model) -> Vec<&'a Relation> {
        model
            .relations
            .iter()
            .filter(|r| (self.hooks.include_relation)(model, *r))
            .collect()
    }

    /// Operations that pass the operation inclusion hook
    pub fn included_operations(&self, model: &'a Model) -> Vec<&'a Operation> {
        model
            .operations
            .iter()
            .filter(|o| (self.hooks.include_operation)(model, *o))
            .collect()
    }

    /// Included properties that identify a single record
    pub fn identifying_properties(&self, model: &'a Model) -> Vec<&'a Property> {
        self.included_properties(model)
            .into_iter()
            .filter(|p| p.is_identifying())
            .collect()
    }

    // ====================================================================
    // Caller-supplied text
    // ====================================================================

    /// Directive text appended after `model.field`, if any
    pub fn field_directive(&self, model: &Model, field: &str) -> Option<String> {
        (self.hooks.field_directive)(model, field)
            .or_else(|| {
                self.config
                    .field_directives
                    .get(&member_key(&model.name, field))
                    .cloned()
            })
            .filter(|text| !text.trim().is_empty())
    }

    /// Resolver source for a relation, if any
    pub fn relation_resolver(&self, model: &Model, relation: &Relation) -> Option<String> {
        (self.hooks.relation_resolver)(model, relation).or_else(|| {
            self.config
                .relation_resolvers
                .get(&member_key(&model.name, &relation.name))
                .cloned()
        })
    }

    /// Whether resolver stubs are written for this model
    pub fn emits_resolvers(&self, model: &Model) -> bool {
        self.config.emit_resolvers && (self.hooks.should_generate_resolvers)(model)
    }

    // ====================================================================
    // Naming helpers
    // ====================================================================

    /// Convert a name to PascalCase
    pub fn pascal(name: &str) -> String {
        name.to_pascal_case()
    }

    /// Convert a name to camelCase
    pub fn camel(name: &str) -> String {
        name.to_lower_camel_case()
    }

    /// English plural of a model name, case kept (e.g. "Person" → "People").
    ///
    /// Uncountable names ("News", "Series") get an extra `s` so the collection
    /// query never collides with the singular lookup.
    pub fn pluralize(word: &str) -> String {
        let plural = pluralizer::pluralize(word, 2, false);
        if plural == Self::singularize(word) {
            format!("{plural}s")
        } else {
            plural
        }
    }

    /// English singular of a model name, case kept (e.g. "Categories" → "Category")
    pub fn singularize(word: &str) -> String {
        pluralizer::pluralize(word, 1, false)
    }

    /// Operation name → input type name (e.g. "publishNow" → "PublishNowArgs")
    pub fn args_type_name(operation: &str) -> String {
        format!("{}Args", Self::pascal(operation))
    }

    /// Model name → collection query name (e.g. "BlogPost" → "blogPosts")
    pub fn collection_query_name(model: &str) -> String {
        Self::camel(&Self::pluralize(model))
    }

    /// Model name → count query name (e.g. "Widget" → "widgetsMeta")
    pub fn meta_query_name(model: &str) -> String {
        format!("{}Meta", Self::collection_query_name(model))
    }

    /// Model name → singular lookup name (e.g. "Widget" → "widget")
    pub fn single_query_name(model: &str) -> String {
        Self::camel(&Self::singularize(model))
    }

    /// Per-identifier lookup name (e.g. "Widget", "id" → "widgetById")
    pub fn lookup_by_name(model: &str, property: &str) -> String {
        format!("{}By{}", Self::single_query_name(model), Self::pascal(property))
    }

    pub fn meta_type_name(model: &str) -> String {
        format!("{}Meta", model)
    }

    pub fn filter_type_name(model: &str) -> String {
        format!("{}Filter", model)
    }

    pub fn unique_filter_type_name(model: &str) -> String {
        format!("{}UniqueFilter", model)
    }
}

/// Key of a model member in the config maps (`Model.member`)
fn member_key(model: &str, member: &str) -> String {
    format!("{}.{}", model, member)
}

// ============================================================================
// ModelInfo: convenience wrapper for a single model during generation
// ============================================================================

/// A model together with the context it is generated in
#[derive(Debug, Clone, Copy)]
pub struct ModelInfo<'a> {
    pub model: &'a Model,
    pub ctx: GenerationContext<'a>,
}

impl<'a> ModelInfo<'a> {
    pub fn new(model: &'a Model, ctx: GenerationContext<'a>) -> Self {
        Self { model, ctx }
    }

    /// The model's type name as written in SDL
    pub fn type_name(&self) -> &'a str {
        &self.model.name
    }

    pub fn properties(&self) -> Vec<&'a Property> {
        self.ctx.included_properties(self.model)
    }

    pub fn relations(&self) -> Vec<&'a Relation> {
        self.ctx.included_relations(self.model)
    }

    pub fn operations(&self) -> Vec<&'a Operation> {
        self.ctx.included_operations(self.model)
    }

    pub fn identifying_properties(&self) -> Vec<&'a Property> {
        self.ctx.identifying_properties(self.model)
    }

    pub fn collection_query_name(&self) -> String {
        GenerationContext::collection_query_name(&self.model.name)
    }

    pub fn meta_query_name(&self) -> String {
        GenerationContext::meta_query_name(&self.model.name)
    }

    pub fn single_query_name(&self) -> String {
        GenerationContext::single_query_name(&self.model.name)
    }

    pub fn meta_type_name(&self) -> String {
        GenerationContext::meta_type_name(&self.model.name)
    }

    pub fn filter_type_name(&self) -> String {
        GenerationContext::filter_type_name(&self.model.name)
    }

    pub fn unique_filter_type_name(&self) -> String {
        GenerationContext::unique_filter_type_name(&self.model.name)
    }

    /// Names of the singular lookup queries, one per identifying property in
    /// per-identifier mode, at most one in unique-filter mode.
    pub fn lookup_query_names(&self) -> Vec<String> {
        let identifiers = self.identifying_properties();
        if identifiers.is_empty() {
            return Vec::new();
        }
        match self.ctx.config.lookup {
            LookupStyle::UniqueFilter => vec![self.single_query_name()],
            LookupStyle::PerIdentifier => identifiers
                .iter()
                .map(|p| GenerationContext::lookup_by_name(&self.model.name, &p.name))
                .collect(),
        }
    }

    /// Names of all query root fields generated for this model, in order
    pub fn query_field_names(&self) -> Vec<String> {
        let mut names = vec![self.collection_query_name(), self.meta_query_name()];
        names.extend(self.lookup_query_names());
        names
    }

    /// Names of all mutation root fields generated for this model, in order
    pub fn mutation_field_names(&self) -> Vec<String> {
        self.operations().iter().map(|o| o.name.clone()).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sdlgen_core::PropertyType;

    fn widget() -> Model {
        Model::new("Widget")
            .with_property("id", PropertyType::unique_identifier().primary_key())
            .with_property("sku", PropertyType::string().unique())
            .with_property("name", PropertyType::string())
            .with_relation(Relation::single("owner", "User"))
    }

    #[test]
    fn test_camel_and_pascal() {
        assert_eq!(GenerationContext::camel("BlogPost"), "blogPost");
        assert_eq!(GenerationContext::camel("user_id"), "userId");
        assert_eq!(GenerationContext::pascal("publishNow"), "PublishNow");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(GenerationContext::pluralize("Widget"), "Widgets");
        assert_eq!(GenerationContext::pluralize("Category"), "Categories");
        assert_eq!(GenerationContext::pluralize("Status"), "Statuses");
        assert_eq!(GenerationContext::pluralize("Box"), "Boxes");
        assert_eq!(GenerationContext::pluralize("BlogPost"), "BlogPosts");
        assert_eq!(GenerationContext::pluralize("Alias"), "Aliases");
        assert_eq!(GenerationContext::pluralize("Person"), "People");
        assert_eq!(GenerationContext::pluralize("Child"), "Children");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(GenerationContext::singularize("Widget"), "Widget");
        assert_eq!(GenerationContext::singularize("Categories"), "Category");
        assert_eq!(GenerationContext::singularize("Alias"), "Alias");
        assert_eq!(GenerationContext::singularize("Status"), "Status");
        assert_eq!(GenerationContext::singularize("Address"), "Address");
        assert_eq!(GenerationContext::singularize("People"), "Person");
    }

    #[test]
    fn test_names_ending_in_s_and_irregular_names() {
        for (model, collection, single) in [
            ("Alias", "aliases", "alias"),
            ("Status", "statuses", "status"),
            ("Person", "people", "person"),
            ("Child", "children", "child"),
            ("BlogPost", "blogPosts", "blogPost"),
        ] {
            assert_eq!(GenerationContext::collection_query_name(model), collection);
            assert_eq!(GenerationContext::single_query_name(model), single);
        }
    }

    #[test]
    fn test_uncountable_names_keep_queries_apart() {
        for model in ["News", "Series"] {
            let collection = GenerationContext::collection_query_name(model);
            let single = GenerationContext::single_query_name(model);
            assert_ne!(collection, single, "{model}");
            assert_eq!(single, GenerationContext::camel(model));
        }
    }

    #[test]
    fn test_root_field_names() {
        assert_eq!(GenerationContext::collection_query_name("BlogPost"), "blogPosts");
        assert_eq!(GenerationContext::meta_query_name("Widget"), "widgetsMeta");
        assert_eq!(GenerationContext::single_query_name("Widget"), "widget");
        assert_eq!(GenerationContext::lookup_by_name("Widget", "id"), "widgetById");
        assert_eq!(GenerationContext::args_type_name("publishNow"), "PublishNowArgs");
    }

    #[test]
    fn test_context_respects_hooks() {
        let schema = Schema::new()
            .with_model(widget())
            .with_model(Model::new("Internal"));
        let config = GeneratorConfig::default();
        let hooks = GeneratorHooks::new()
            .with_model_filter(|m| m.name != "Internal")
            .with_property_filter(|_, p| p.name != "sku");
        let ctx = GenerationContext::new(&schema, &config, &hooks);

        let models = ctx.models();
        assert_eq!(models.len(), 1);

        let names: Vec<_> = ctx
            .included_properties(models[0])
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["id", "name"]);

        let identifiers: Vec<_> = ctx
            .identifying_properties(models[0])
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(identifiers, vec!["id"]);
    }

    #[test]
    fn test_caller_text_prefers_hook_over_config() {
        let model = widget();
        let schema = Schema::new().with_model(model.clone());
        let config = GeneratorConfig::default()
            .with_field_directive("Widget", "name", "@deprecated")
            .with_field_directive("Widget", "sku", "@external")
            .with_relation_resolver("Widget", "owner", "fromConfig");
        let hooks = GeneratorHooks::new()
            .with_field_directive(|_, field| (field == "name").then(|| "@hooked".to_string()));
        let ctx = GenerationContext::new(&schema, &config, &hooks);

        assert_eq!(ctx.field_directive(&model, "name").as_deref(), Some("@hooked"));
        assert_eq!(ctx.field_directive(&model, "sku").as_deref(), Some("@external"));
        assert_eq!(ctx.field_directive(&model, "id"), None);
        assert_eq!(
            ctx.relation_resolver(&model, &model.relations[0]).as_deref(),
            Some("fromConfig")
        );
    }

    #[test]
    fn test_model_info_lookup_names() {
        let model = widget();
        let schema = Schema::new().with_model(model.clone());
        let hooks = GeneratorHooks::default();

        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&schema, &config, &hooks);
        let info = ModelInfo::new(&schema.models[0], ctx);
        assert_eq!(
            info.query_field_names(),
            vec!["widgets", "widgetsMeta", "widget"]
        );

        let config = GeneratorConfig::default().with_lookup(LookupStyle::PerIdentifier);
        let ctx = GenerationContext::new(&schema, &config, &hooks);
        let info = ModelInfo::new(&schema.models[0], ctx);
        assert_eq!(info.lookup_query_names(), vec!["widgetById", "widgetBySku"]);
    }

    #[test]
    fn test_model_without_identifiers_has_no_lookup() {
        let schema =
            Schema::new().with_model(Model::new("Note").with_property("body", PropertyType::string()));
        let config = GeneratorConfig::default();
        let hooks = GeneratorHooks::default();
        let ctx = GenerationContext::new(&schema, &config, &hooks);
        let info = ModelInfo::new(&schema.models[0], ctx);

        assert!(info.lookup_query_names().is_empty());
        assert_eq!(info.query_field_names(), vec!["notes", "notesMeta"]);
    }
}
