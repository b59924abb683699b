//! The built `Schema`: root operation types, the full type map, and
//! declared directives.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use iris_diagnostics::Error;

use crate::directive::Directive;
use crate::types::IrisTypeDefinition;

pub struct Schema {
    pub description: Option<String>,
    pub query: Option<Arc<IrisTypeDefinition>>,
    pub mutation: Option<Arc<IrisTypeDefinition>>,
    pub subscription: Option<Arc<IrisTypeDefinition>>,
    pub directives: Vec<Arc<Directive>>,
    pub type_map: HashMap<String, Arc<IrisTypeDefinition>>,
    /// Single-shot memoization of `validateSchema`'s result, safe to
    /// observe from multiple threads holding a shared `&Schema`.
    validation_errors: OnceLock<Vec<Error>>,
}

impl Schema {
    pub fn new(
        description: Option<String>,
        query: Option<Arc<IrisTypeDefinition>>,
        mutation: Option<Arc<IrisTypeDefinition>>,
        subscription: Option<Arc<IrisTypeDefinition>>,
        directives: Vec<Arc<Directive>>,
        type_map: HashMap<String, Arc<IrisTypeDefinition>>,
    ) -> Self {
        Self {
            description,
            query,
            mutation,
            subscription,
            directives,
            type_map,
            validation_errors: OnceLock::new(),
        }
    }

    pub fn get_type(&self, name: &str) -> Option<&Arc<IrisTypeDefinition>> {
        self.type_map.get(name)
    }

    pub fn get_directive(&self, name: &str) -> Option<&Arc<Directive>> {
        self.directives.iter().find(|d| d.name == name)
    }

    /// Returns the memoized validation result, computing it with `compute`
    /// on first access. Callers pass the `validateSchema` rule set in as a
    /// closure so this crate doesn't need to depend on `iris-validate`.
    pub fn validation_errors(&self, compute: impl FnOnce() -> Vec<Error>) -> &[Error] {
        self.validation_errors.get_or_init(compute)
    }
}
