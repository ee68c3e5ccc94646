//! Type registry and the property lookup capability

use crate::model::TypeDescriptor;
use dashmap::DashMap;
use std::collections::HashSet;
use tracing::trace;

/// Answers whether a named type carries a named property
pub trait PropertySchema: Send + Sync {
    fn has_property(&self, type_name: &str, property: &str) -> bool;
}

/// Registry of type descriptors, safe to share across threads
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    types: DashMap<String, TypeDescriptor>,
}

impl SchemaRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            types: DashMap::new(),
        }
    }

    /// Register a descriptor under its own name, replacing any previous one
    pub fn register(&self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.name.clone(), descriptor);
    }

    /// Get a copy of a descriptor by type name
    pub fn get(&self, type_name: &str) -> Option<TypeDescriptor> {
        self.types.get(type_name).map(|entry| entry.value().clone())
    }

    /// Check if a type is registered
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl PropertySchema for SchemaRegistry {
    fn has_property(&self, type_name: &str, property: &str) -> bool {
        let mut visited = HashSet::new();
        let mut current = Some(type_name.to_string());

        while let Some(name) = current.take() {
            if !visited.insert(name.clone()) {
                trace!("Parent cycle at {} while looking up {}", name, property);
                return false;
            }
            let Some(descriptor) = self.types.get(&name) else {
                return false;
            };
            if descriptor.declares(property) {
                return true;
            }
            current = descriptor.parent.clone();
        }

        false
    }
}
