//! Type descriptor loader for YAML and JSON files

use crate::model::{PropertyDefinition, TypeDescriptor};
use crate::registry::SchemaRegistry;
use crate::{Error, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tracing::{debug, info, trace};

static PROPERTY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid property regex"));

// Type names may be path-qualified, e.g. `app::model::User`.
static TYPE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$").expect("valid type regex")
});

/// Serializable descriptor file format
#[derive(Debug, Deserialize)]
struct DescriptorFile {
    #[serde(default)]
    types: Vec<TypeFile>,
}

#[derive(Debug, Deserialize)]
struct TypeFile {
    name: String,
    #[serde(default)]
    parent: Option<String>,
    #[serde(default)]
    properties: Vec<PropertyFile>,
}

/// A property is either a bare name or a name with a declared type
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PropertyFile {
    Name(String),
    Typed {
        name: String,
        #[serde(rename = "type", default)]
        data_type: Option<String>,
    },
}

impl From<PropertyFile> for PropertyDefinition {
    fn from(file: PropertyFile) -> Self {
        match file {
            PropertyFile::Name(name) => PropertyDefinition::new(name),
            PropertyFile::Typed { name, data_type } => PropertyDefinition { name, data_type },
        }
    }
}

/// Loads type descriptors from files into a shared registry
pub struct SchemaLoader {
    registry: Arc<SchemaRegistry>,
}

impl SchemaLoader {
    /// Create a loader backed by a fresh registry
    pub fn new() -> Self {
        Self {
            registry: Arc::new(SchemaRegistry::new()),
        }
    }

    /// Create a loader that registers into an existing registry
    pub fn with_registry(registry: Arc<SchemaRegistry>) -> Self {
        Self { registry }
    }

    /// The registry loaded descriptors are written to
    pub fn registry(&self) -> Arc<SchemaRegistry> {
        Arc::clone(&self.registry)
    }

    /// Load descriptors from a file, picking the format from its extension
    ///
    /// `.yaml` and `.yml` are read as YAML, everything else as JSON.
    pub fn load_from_file(&self, path: &Path) -> Result<Vec<TypeDescriptor>> {
        self.load_into(&self.registry, path)
    }

    /// Load descriptors from a file into `registry` instead of this loader's own
    pub fn load_into(&self, registry: &SchemaRegistry, path: &Path) -> Result<Vec<TypeDescriptor>> {
        trace!("Loading type descriptors from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;

        let file = if path
            .extension()
            .is_some_and(|e| e == "yaml" || e == "yml")
        {
            parse_yaml(&content)?
        } else {
            parse_json(&content)?
        };
        let descriptors = register_file(registry, file)?;

        info!(
            "Loaded {} type descriptor(s) from {}",
            descriptors.len(),
            path.display()
        );
        Ok(descriptors)
    }

    /// Load descriptors from a JSON string
    pub fn load_from_json(&self, json: &str) -> Result<Vec<TypeDescriptor>> {
        register_file(&self.registry, parse_json(json)?)
    }

    /// Load descriptors from a YAML string
    pub fn load_from_yaml(&self, yaml: &str) -> Result<Vec<TypeDescriptor>> {
        register_file(&self.registry, parse_yaml(yaml)?)
    }
}

impl Default for SchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_json(json: &str) -> Result<DescriptorFile> {
    serde_json::from_str(json).map_err(|e| Error::InvalidFormat(format!("JSON parse error: {}", e)))
}

fn parse_yaml(yaml: &str) -> Result<DescriptorFile> {
    serde_yaml::from_str(yaml).map_err(|e| Error::InvalidFormat(format!("YAML parse error: {}", e)))
}

/// Validate every descriptor in the file, then register them all.
///
/// Nothing is registered if any descriptor is invalid.
fn register_file(registry: &SchemaRegistry, file: DescriptorFile) -> Result<Vec<TypeDescriptor>> {
    let descriptors = file
        .types
        .into_iter()
        .map(convert_type_file)
        .collect::<Result<Vec<_>>>()?;

    for descriptor in &descriptors {
        debug!(
            "Registering type {} ({} properties)",
            descriptor.name,
            descriptor.properties.len()
        );
        registry.register(descriptor.clone());
    }

    Ok(descriptors)
}

fn convert_type_file(file: TypeFile) -> Result<TypeDescriptor> {
    if !TYPE_NAME.is_match(&file.name) {
        return Err(Error::InvalidFormat(format!(
            "Invalid type name: '{}'",
            file.name
        )));
    }
    if let Some(parent) = &file.parent {
        if !TYPE_NAME.is_match(parent) {
            return Err(Error::InvalidFormat(format!(
                "Invalid parent type name '{}' on type {}",
                parent, file.name
            )));
        }
    }

    let properties: Vec<PropertyDefinition> =
        file.properties.into_iter().map(Into::into).collect();

    if let Some(bad) = properties.iter().find(|p| !PROPERTY_NAME.is_match(&p.name)) {
        return Err(Error::InvalidFormat(format!(
            "Invalid property name '{}' on type {}",
            bad.name, file.name
        )));
    }

    Ok(TypeDescriptor {
        name: file.name,
        parent: file.parent,
        properties,
    })
}
