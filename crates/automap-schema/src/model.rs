//! Type descriptor definitions

/// Describes the properties carried by one named type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: String,
    /// Type whose properties this type inherits
    pub parent: Option<String>,
    pub properties: Vec<PropertyDefinition>,
}

/// Definition of a single property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub name: String,
    pub data_type: Option<String>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            properties: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Add an untyped property
    pub fn with_property(mut self, name: impl Into<String>) -> Self {
        self.properties.push(PropertyDefinition::new(name));
        self
    }

    /// Add several untyped properties at once
    pub fn with_properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties
            .extend(names.into_iter().map(PropertyDefinition::new));
        self
    }

    /// Whether the property is declared directly on this type (parents are not consulted)
    pub fn declares(&self, property: &str) -> bool {
        self.properties.iter().any(|p| p.name == property)
    }
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: None,
        }
    }

    pub fn typed(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: Some(data_type.into()),
        }
    }
}
