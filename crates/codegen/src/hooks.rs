//! # Generator Hooks
//!
//! Caller-supplied callbacks that steer generation. Every hook has a
//! pass-through default, so a default [`GeneratorHooks`] emits every model,
//! property, relation and operation, writes resolvers for every model and
//! ignores the completion notification.
//!
//! Hooks that return text (`field_directive`, `relation_resolver`) return
//! `None` to fall back to the matching map in
//! [`GeneratorConfig`](crate::GeneratorConfig).

use sdlgen_ir::{Model, Operation, Property, Relation};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Predicate over a model
pub type ModelPredicate = Arc<dyn Fn(&Model) -> bool + Send + Sync>;

/// Predicate over a property of a model
pub type PropertyPredicate = Arc<dyn Fn(&Model, &Property) -> bool + Send + Sync>;

/// Predicate over a relation of a model
pub type RelationPredicate = Arc<dyn Fn(&Model, &Relation) -> bool + Send + Sync>;

/// Predicate over an operation of a model
pub type OperationPredicate = Arc<dyn Fn(&Model, &Operation) -> bool + Send + Sync>;

/// Directive text for a field of a model, by field name
pub type FieldDirectiveHook = Arc<dyn Fn(&Model, &str) -> Option<String> + Send + Sync>;

/// Resolver source for a relation of a model
pub type RelationResolverHook = Arc<dyn Fn(&Model, &Relation) -> Option<String> + Send + Sync>;

/// Called once per run with the paths written during that run
pub type CompletionHook = Arc<dyn Fn(&[PathBuf]) + Send + Sync>;

// ============================================================================
// GeneratorHooks
// ============================================================================

/// Callbacks consulted during generation.
///
/// A model is emitted only when both `is_model_toplevel` and
/// `should_emit_model` accept it.
#[derive(Clone)]
pub struct GeneratorHooks {
    pub is_model_toplevel: ModelPredicate,
    pub should_emit_model: ModelPredicate,
    pub include_property: PropertyPredicate,
    pub include_relation: RelationPredicate,
    pub include_operation: OperationPredicate,
    pub should_generate_resolvers: ModelPredicate,
    pub field_directive: FieldDirectiveHook,
    pub relation_resolver: RelationResolverHook,
    pub on_complete: CompletionHook,
}

impl Default for GeneratorHooks {
    fn default() -> Self {
        Self {
            is_model_toplevel: Arc::new(|_| true),
            should_emit_model: Arc::new(|_| true),
            include_property: Arc::new(|_, _| true),
            include_relation: Arc::new(|_, _| true),
            include_operation: Arc::new(|_, _| true),
            should_generate_resolvers: Arc::new(|_| true),
            field_directive: Arc::new(|_, _| None),
            relation_resolver: Arc::new(|_, _| None),
            on_complete: Arc::new(|_| {}),
        }
    }
}

impl GeneratorHooks {
    /// Hooks with pass-through defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_toplevel(mut self, f: impl Fn(&Model) -> bool + Send + Sync + 'static) -> Self {
        self.is_model_toplevel = Arc::new(f);
        self
    }

    pub fn with_model_filter(
        mut self,
        f: impl Fn(&Model) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.should_emit_model = Arc::new(f);
        self
    }

    pub fn with_property_filter(
        mut self,
        f: impl Fn(&Model, &Property) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.include_property = Arc::new(f);
        self
    }

    pub fn with_relation_filter(
        mut self,
        f: impl Fn(&Model, &Relation) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.include_relation = Arc::new(f);
        self
    }

    pub fn with_operation_filter(
        mut self,
        f: impl Fn(&Model, &Operation) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.include_operation = Arc::new(f);
        self
    }

    pub fn with_resolver_filter(
        mut self,
        f: impl Fn(&Model) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.should_generate_resolvers = Arc::new(f);
        self
    }

    pub fn with_field_directive(
        mut self,
        f: impl Fn(&Model, &str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.field_directive = Arc::new(f);
        self
    }

    pub fn with_relation_resolver(
        mut self,
        f: impl Fn(&Model, &Relation) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.relation_resolver = Arc::new(f);
        self
    }

    pub fn on_complete(mut self, f: impl Fn(&[PathBuf]) + Send + Sync + 'static) -> Self {
        self.on_complete = Arc::new(f);
        self
    }

    /// Whether a model passes both model-level predicates
    pub fn emits_model(&self, model: &Model) -> bool {
        (self.is_model_toplevel)(model) && (self.should_emit_model)(model)
    }
}

impl fmt::Debug for GeneratorHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorHooks").finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sdlgen_core::PropertyType;
    use std::sync::Mutex;

    #[test]
    fn test_default_hooks_pass_everything() {
        let hooks = GeneratorHooks::default();
        let model = Model::new("Widget").with_property("id", PropertyType::unique_identifier());
        let prop = &model.properties[0];

        assert!(hooks.emits_model(&model));
        assert!((hooks.include_property)(&model, prop));
        assert!((hooks.should_generate_resolvers)(&model));
        assert_eq!((hooks.field_directive)(&model, "id"), None);
    }

    #[test]
    fn test_model_predicates_combine_with_and() {
        let model = Model::new("Widget");

        let hooks = GeneratorHooks::new().with_toplevel(|_| false);
        assert!(!hooks.emits_model(&model));

        let hooks = GeneratorHooks::new().with_model_filter(|m| m.name != "Widget");
        assert!(!hooks.emits_model(&model));

        let hooks = GeneratorHooks::new()
            .with_toplevel(|_| true)
            .with_model_filter(|m| m.name == "Widget");
        assert!(hooks.emits_model(&model));
    }

    #[test]
    fn test_completion_hook_receives_paths() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let hooks = GeneratorHooks::new().on_complete(move |paths| {
            sink.lock().unwrap().extend_from_slice(paths);
        });

        (hooks.on_complete)(&[PathBuf::from("Widget.graphql")]);
        assert_eq!(*seen.lock().unwrap(), vec![PathBuf::from("Widget.graphql")]);
    }

    #[test]
    fn test_debug_does_not_require_fn_debug() {
        let rendered = format!("{:?}", GeneratorHooks::default());
        assert!(rendered.starts_with("GeneratorHooks"));
    }
}
