//! Shared fixtures for automap-config integration tests.

#![allow(dead_code)]

use automap_config::{AutoMapperConfig, NamingConvention};
use automap_schema::{SchemaRegistry, TypeDescriptor};
use std::sync::Arc;

pub struct SnakeCase;
pub struct CamelCase;

impl NamingConvention for SnakeCase {
    fn name(&self) -> &str {
        "snake_case"
    }

    fn to_parts(&self, name: &str) -> Vec<String> {
        name.split('_')
            .filter(|part| !part.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    fn from_parts(&self, parts: &[String]) -> String {
        parts.join("_")
    }
}

impl NamingConvention for CamelCase {
    fn name(&self) -> &str {
        "camelCase"
    }

    fn to_parts(&self, name: &str) -> Vec<String> {
        let mut parts: Vec<String> = Vec::new();
        for ch in name.chars() {
            if ch.is_uppercase() || parts.is_empty() {
                parts.push(String::new());
            }
            if let Some(last) = parts.last_mut() {
                last.extend(ch.to_lowercase());
            }
        }
        parts
    }

    fn from_parts(&self, parts: &[String]) -> String {
        let mut name = String::new();
        for (i, part) in parts.iter().enumerate() {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                if i == 0 {
                    name.push(first);
                } else {
                    name.extend(first.to_uppercase());
                }
                name.push_str(chars.as_str());
            }
        }
        name
    }
}

pub fn snake() -> Arc<dyn NamingConvention> {
    Arc::new(SnakeCase)
}

pub fn camel() -> Arc<dyn NamingConvention> {
    Arc::new(CamelCase)
}

/// Types used across the tests: User/UserDto plus an inherited `id`.
pub fn schema() -> Arc<SchemaRegistry> {
    let schema = SchemaRegistry::new();
    schema.register(TypeDescriptor::new("Entity").with_property("id"));
    schema.register(
        TypeDescriptor::new("User")
            .with_parent("Entity")
            .with_properties(["email", "age", "first_name"]),
    );
    schema.register(TypeDescriptor::new("UserDto").with_properties(["email", "age", "firstName"]));
    Arc::new(schema)
}

pub fn config() -> AutoMapperConfig {
    AutoMapperConfig::new(schema())
}
