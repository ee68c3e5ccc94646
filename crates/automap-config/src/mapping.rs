//! The per-pair mapping entity
//!
//! A [`Mapping`] is extended through `&mut` builder calls during
//! configuration and only read afterwards. Once its registry is sealed into a
//! [`crate::MappingCatalog`] nothing can obtain a `&mut Mapping` any more.

use crate::naming::NamingConvention;
use crate::operation::{Operation, TransformFn};
use crate::options::{self, Options, SharedOptions};
use crate::registry::ConfigRegistry;
use automap_ir::{Object, Value};
use automap_schema::PropertySchema;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// What `for_member` accepts: a full operation or a bare transform function
pub enum MemberOperation {
    Operation(Operation),
    Transform(TransformFn),
}

impl MemberOperation {
    /// Wrap a closure as a transform
    pub fn transform<F>(transform: F) -> Self
    where
        F: Fn(&Object) -> crate::Result<Value> + Send + Sync + 'static,
    {
        Self::Transform(Arc::new(transform))
    }

    fn into_operation(self) -> Operation {
        match self {
            MemberOperation::Operation(operation) => operation,
            MemberOperation::Transform(transform) => Operation::from(transform),
        }
    }
}

impl From<Operation> for MemberOperation {
    fn from(operation: Operation) -> Self {
        Self::Operation(operation)
    }
}

impl From<TransformFn> for MemberOperation {
    fn from(transform: TransformFn) -> Self {
        Self::Transform(transform)
    }
}

/// Transform rules from one source type to one destination type
pub struct Mapping {
    source_type: String,
    destination_type: String,
    operations: HashMap<String, Operation>,
    options: SharedOptions,
    schema: Arc<dyn PropertySchema>,
}

impl Mapping {
    /// Create a mapping with a snapshot of the registry's default options
    pub fn new<R>(
        source_type: impl Into<String>,
        destination_type: impl Into<String>,
        registry: &R,
    ) -> Self
    where
        R: ConfigRegistry + ?Sized,
    {
        Self {
            source_type: source_type.into(),
            destination_type: destination_type.into(),
            operations: HashMap::new(),
            options: options::share(registry.default_options().clone()),
            schema: registry.property_schema(),
        }
    }

    pub fn source_type_name(&self) -> &str {
        &self.source_type
    }

    pub fn destination_type_name(&self) -> &str {
        &self.destination_type
    }

    /// Register the operation producing `property`.
    ///
    /// A later registration for the same property replaces the earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PropertyNotFound`] if the source type has no
    /// such property. The mapping is left unchanged in that case.
    pub fn for_member(
        &mut self,
        property: &str,
        operation: impl Into<MemberOperation>,
    ) -> crate::Result<&mut Self> {
        if !self.schema.has_property(&self.source_type, property) {
            return Err(crate::Error::property_not_found(
                property,
                self.source_type.clone(),
            ));
        }

        let mut operation = operation.into().into_operation();
        operation.set_options(&self.options);

        debug!(
            "{} -> {}: {} mapped with {:?}",
            self.source_type,
            self.destination_type,
            property,
            operation.kind()
        );
        self.operations.insert(property.to_string(), operation);

        Ok(self)
    }

    /// The operation producing `property`.
    ///
    /// Unregistered properties get a fresh copy of the current default
    /// operation, configured with this mapping's options.
    pub fn mapping_operation_for(&self, property: &str) -> Operation {
        if let Some(operation) = self.operations.get(property) {
            return operation.clone();
        }

        trace!(
            "{} -> {}: no operation for {}, using default",
            self.source_type, self.destination_type, property
        );
        let mut operation = options::read(&self.options).default_operation().clone();
        operation.set_options(&self.options);
        operation
    }

    pub fn has_operation_for(&self, property: &str) -> bool {
        self.operations.contains_key(property)
    }

    /// Properties with an explicitly registered operation, in no particular order
    pub fn registered_properties(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    /// Change several options in one call.
    ///
    /// `configure` works on a copy that replaces the live options when it
    /// returns, so no lock is held while it runs.
    pub fn set_defaults(&mut self, configure: impl FnOnce(&mut Options)) -> &mut Self {
        let mut updated = self.options();
        configure(&mut updated);
        *options::write(&self.options) = updated;
        self
    }

    /// Snapshot of this mapping's options
    pub fn options(&self) -> Options {
        options::read(&self.options).clone()
    }

    /// The live options operations of this mapping refer to
    pub fn shared_options(&self) -> SharedOptions {
        Arc::clone(&self.options)
    }

    pub fn skip_constructor(&mut self) -> &mut Self {
        options::write(&self.options).skip_constructor();
        self
    }

    pub fn dont_skip_constructor(&mut self) -> &mut Self {
        options::write(&self.options).dont_skip_constructor();
        self
    }

    pub fn with_naming_conventions(
        &mut self,
        source: Arc<dyn NamingConvention>,
        destination: Arc<dyn NamingConvention>,
    ) -> &mut Self {
        let mut options = options::write(&self.options);
        options.set_source_naming_convention(source);
        options.set_destination_naming_convention(destination);
        drop(options);
        self
    }

    /// Replace the fallback used for unregistered properties.
    ///
    /// Operations already handed out by [`Mapping::mapping_operation_for`]
    /// keep the rule they were created with.
    pub fn with_default_operation(&mut self, operation: Operation) -> &mut Self {
        options::write(&self.options).set_default_operation(operation);
        self
    }
}

impl std::fmt::Debug for Mapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapping")
            .field("source_type", &self.source_type)
            .field("destination_type", &self.destination_type)
            .field("operations", &self.operations)
            .field("options", &self.options())
            .finish_non_exhaustive()
    }
}
