//! Object shapes
// Constructor helpers are clear at call sites without #[must_use].
#![allow(clippy::must_use_candidate)]
// Fluent setters return Self for chaining.
#![allow(clippy::return_self_not_must_use)]

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An instance of a named type, reduced to its properties
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Object {
    /// Name of the type this object is an instance of
    pub type_name: String,

    /// Property values keyed by property name
    pub properties: BTreeMap<String, Value>,
}

impl Object {
    /// Create an empty object of the given type
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Add a property, returning the object for chaining
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Set a property, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(name.into(), value.into())
    }

    /// Get a property value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Check whether the object carries a property
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Property names in sorted order
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}
