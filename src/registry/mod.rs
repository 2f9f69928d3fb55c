//! Field registry: static metadata describing each searchable field.
//!
//! The registry is built once from an ordered list of definitions and
//! is the authority the filter evaluator uses to type-dispatch.

use std::collections::HashMap;

use crate::models::{FieldDefinition, FieldKind};

#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    definitions: Vec<FieldDefinition>,
    by_name: HashMap<String, usize>,
}

impl FieldRegistry {
    /// Build a registry from an ordered list of definitions.
    ///
    /// When a field name appears more than once the last definition
    /// wins for lookups; the ordered listing keeps every entry.
    pub fn new(definitions: Vec<FieldDefinition>) -> Self {
        let by_name = definitions
            .iter()
            .enumerate()
            .map(|(idx, def)| (def.field.clone(), idx))
            .collect();
        Self {
            definitions,
            by_name,
        }
    }

    pub fn lookup(&self, field: &str) -> Option<&FieldDefinition> {
        self.by_name.get(field).map(|&idx| &self.definitions[idx])
    }

    pub fn kind_of(&self, field: &str) -> Option<FieldKind> {
        self.lookup(field).map(|def| def.kind)
    }

    /// Definitions in declaration order, as rendered by the filter
    /// builder.
    pub fn definitions(&self) -> &[FieldDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
