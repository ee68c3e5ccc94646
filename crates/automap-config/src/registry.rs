//! Mapping registry, fluent builder, and the sealed catalog

use crate::mapping::{Mapping, MemberOperation};
use crate::naming::NamingConvention;
use crate::operation::Operation;
use crate::options::Options;
use automap_schema::PropertySchema;
use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;

/// What a [`Mapping`] needs from the registry that creates it
pub trait ConfigRegistry {
    /// Template cloned into every new mapping
    fn default_options(&self) -> &Options;

    /// Property lookup used to validate `for_member` registrations
    fn property_schema(&self) -> Arc<dyn PropertySchema>;
}

/// A (source, destination) type pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MappingKey {
    pub source: String,
    pub destination: String,
}

impl MappingKey {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// The key of the inverse direction
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }
}

/// Owns every mapping during configuration
pub struct AutoMapperConfig {
    default_options: Options,
    schema: Arc<dyn PropertySchema>,
    mappings: Vec<Mapping>,
    index: HashMap<MappingKey, usize>,
}

impl AutoMapperConfig {
    /// Create a registry with default options
    pub fn new(schema: Arc<dyn PropertySchema>) -> Self {
        Self::with_default_options(schema, Options::default())
    }

    /// Create a registry with a custom options template
    pub fn with_default_options(schema: Arc<dyn PropertySchema>, default_options: Options) -> Self {
        Self {
            default_options,
            schema,
            mappings: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Change the template used by mappings registered from now on
    pub fn default_options_mut(&mut self) -> &mut Options {
        &mut self.default_options
    }

    /// Register a mapping for the pair and start configuring it.
    ///
    /// Registering a pair again replaces the earlier mapping with a fresh one.
    pub fn register_mapping(
        &mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> MappingBuilder<'_> {
        let key = MappingKey::new(source, destination);
        let mapping = Mapping::new(key.source.clone(), key.destination.clone(), &*self);

        let index = if let Some(&index) = self.index.get(&key) {
            debug!("Replacing mapping {} -> {}", key.source, key.destination);
            self.mappings[index] = mapping;
            index
        } else {
            debug!("Registering mapping {} -> {}", key.source, key.destination);
            self.mappings.push(mapping);
            let index = self.mappings.len() - 1;
            self.index.insert(key, index);
            index
        };

        MappingBuilder {
            config: self,
            index,
        }
    }

    /// Continue configuring an already registered mapping
    pub fn mapping_mut(&mut self, source: &str, destination: &str) -> Option<MappingBuilder<'_>> {
        let index = *self.index.get(&MappingKey::new(source, destination))?;
        Some(MappingBuilder {
            config: self,
            index,
        })
    }

    pub fn get_mapping(&self, source: &str, destination: &str) -> Option<&Mapping> {
        self.index
            .get(&MappingKey::new(source, destination))
            .map(|&index| &self.mappings[index])
    }

    pub fn has_mapping(&self, source: &str, destination: &str) -> bool {
        self.index.contains_key(&MappingKey::new(source, destination))
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// End configuration; the returned catalog only hands out shared references
    pub fn seal(self) -> MappingCatalog {
        debug!("Sealing {} mapping(s)", self.mappings.len());
        MappingCatalog {
            default_options: self.default_options,
            mappings: self.mappings,
            index: self.index,
        }
    }
}

impl ConfigRegistry for AutoMapperConfig {
    fn default_options(&self) -> &Options {
        &self.default_options
    }

    fn property_schema(&self) -> Arc<dyn PropertySchema> {
        Arc::clone(&self.schema)
    }
}

impl std::fmt::Debug for AutoMapperConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoMapperConfig")
            .field("default_options", &self.default_options)
            .field("mappings", &self.mappings)
            .finish_non_exhaustive()
    }
}

/// Fluent handle on one mapping inside an [`AutoMapperConfig`]
pub struct MappingBuilder<'a> {
    config: &'a mut AutoMapperConfig,
    index: usize,
}

impl<'a> MappingBuilder<'a> {
    fn entity(&mut self) -> &mut Mapping {
        &mut self.config.mappings[self.index]
    }

    /// See [`Mapping::for_member`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PropertyNotFound`] if the source type has no
    /// such property.
    pub fn for_member(
        mut self,
        property: &str,
        operation: impl Into<MemberOperation>,
    ) -> crate::Result<Self> {
        self.entity().for_member(property, operation)?;
        Ok(self)
    }

    pub fn set_defaults(mut self, configure: impl FnOnce(&mut Options)) -> Self {
        self.entity().set_defaults(configure);
        self
    }

    pub fn skip_constructor(mut self) -> Self {
        self.entity().skip_constructor();
        self
    }

    pub fn dont_skip_constructor(mut self) -> Self {
        self.entity().dont_skip_constructor();
        self
    }

    pub fn with_naming_conventions(
        mut self,
        source: Arc<dyn NamingConvention>,
        destination: Arc<dyn NamingConvention>,
    ) -> Self {
        self.entity().with_naming_conventions(source, destination);
        self
    }

    pub fn with_default_operation(mut self, operation: Operation) -> Self {
        self.entity().with_default_operation(operation);
        self
    }

    /// Register the inverse mapping and continue with it.
    ///
    /// Naming conventions are carried over swapped when both are set. The
    /// reverse mapping shares nothing else with this one.
    pub fn reverse_map(self) -> MappingBuilder<'a> {
        self.reverse_map_with(|_| {})
    }

    /// Like [`MappingBuilder::reverse_map`], then apply `extra` to the
    /// reverse mapping's options.
    pub fn reverse_map_with(self, extra: impl FnOnce(&mut Options)) -> MappingBuilder<'a> {
        let forward = &self.config.mappings[self.index];
        let key = MappingKey::new(forward.source_type_name(), forward.destination_type_name())
            .reversed();
        let conventions = forward.options().naming_conventions();

        let config = self.config;
        let mut reverse = config.register_mapping(key.source, key.destination);
        if let Some((source, destination)) = conventions {
            reverse = reverse.with_naming_conventions(destination, source);
        }
        reverse.set_defaults(extra)
    }

    /// The mapping being configured
    pub fn mapping(&self) -> &Mapping {
        &self.config.mappings[self.index]
    }
}

impl std::fmt::Debug for MappingBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MappingBuilder").field(self.mapping()).finish()
    }
}

impl Deref for MappingBuilder<'_> {
    type Target = Mapping;

    fn deref(&self) -> &Mapping {
        self.mapping()
    }
}

/// Sealed, read-only set of mappings for the execution engine
#[derive(Debug)]
pub struct MappingCatalog {
    default_options: Options,
    mappings: Vec<Mapping>,
    index: HashMap<MappingKey, usize>,
}

impl MappingCatalog {
    pub fn get(&self, source: &str, destination: &str) -> Option<&Mapping> {
        self.index
            .get(&MappingKey::new(source, destination))
            .map(|&index| &self.mappings[index])
    }

    pub fn contains(&self, source: &str, destination: &str) -> bool {
        self.index.contains_key(&MappingKey::new(source, destination))
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mapping> {
        self.mappings.iter()
    }

    /// The template options were cloned from
    pub fn default_options(&self) -> &Options {
        &self.default_options
    }
}
