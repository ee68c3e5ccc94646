//! Mapping operations
//!
//! An [`Operation`] produces the value of one destination property. The
//! mapping that stores an operation hands it a weak reference to the
//! mapping's [`Options`]; the operation only reads them when it is applied.

use crate::options::{self, Options, SharedOptions};
use automap_ir::{Object, Value};
use std::sync::{Arc, RwLock, Weak};

/// User-supplied transform reading the whole source object
pub type TransformFn = Arc<dyn Fn(&Object) -> crate::Result<Value> + Send + Sync>;

/// The rule an operation applies
#[derive(Clone)]
pub enum OperationKind {
    /// Compute the value with a transform function
    Custom(TransformFn),

    /// Leave the destination property untouched
    Ignore,

    /// Copy the source property matching the destination name, translated
    /// through the mapping's naming conventions when both are set
    ConventionDefault,
}

impl OperationKind {
    fn label(&self) -> &'static str {
        match self {
            OperationKind::Custom(_) => "Custom",
            OperationKind::Ignore => "Ignore",
            OperationKind::ConventionDefault => "ConventionDefault",
        }
    }
}

impl std::fmt::Debug for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A transformation rule for a single destination property
#[derive(Clone)]
pub struct Operation {
    kind: OperationKind,
    options: Option<Weak<RwLock<Options>>>,
}

impl Operation {
    fn from_kind(kind: OperationKind) -> Self {
        Self {
            kind,
            options: None,
        }
    }

    /// Wrap a transform function
    pub fn map_from<F>(transform: F) -> Self
    where
        F: Fn(&Object) -> crate::Result<Value> + Send + Sync + 'static,
    {
        Self::from_kind(OperationKind::Custom(Arc::new(transform)))
    }

    pub fn ignore() -> Self {
        Self::from_kind(OperationKind::Ignore)
    }

    pub fn convention_default() -> Self {
        Self::from_kind(OperationKind::ConventionDefault)
    }

    pub fn kind(&self) -> &OperationKind {
        &self.kind
    }

    /// Point this operation at the options of the mapping configuring it.
    ///
    /// Only a weak reference is kept; the mapping remains the sole owner.
    pub fn set_options(&mut self, options: &SharedOptions) {
        self.options = Some(Arc::downgrade(options));
    }

    /// The options this operation was configured with, if the owning mapping is still alive
    pub fn options(&self) -> Option<SharedOptions> {
        self.options.as_ref().and_then(Weak::upgrade)
    }

    pub fn has_options(&self) -> bool {
        self.options().is_some()
    }

    /// Whether both operations apply the same rule.
    ///
    /// Custom operations match only when they wrap the same function
    /// instance. Attached options are not compared.
    pub fn same_rule(&self, other: &Operation) -> bool {
        match (&self.kind, &other.kind) {
            (OperationKind::Custom(a), OperationKind::Custom(b)) => Arc::ptr_eq(a, b),
            (OperationKind::Ignore, OperationKind::Ignore)
            | (OperationKind::ConventionDefault, OperationKind::ConventionDefault) => true,
            _ => false,
        }
    }

    /// Produce the value for `destination_property` from `source`.
    ///
    /// `Ok(None)` means the destination property should be left as is.
    ///
    /// # Errors
    ///
    /// Returns whatever error a custom transform function returns.
    pub fn apply(
        &self,
        source: &Object,
        destination_property: &str,
    ) -> crate::Result<Option<Value>> {
        match &self.kind {
            OperationKind::Ignore => Ok(None),
            OperationKind::Custom(transform) => transform(source).map(Some),
            OperationKind::ConventionDefault => {
                let source_property = self.source_property_name(destination_property);
                Ok(source.get(&source_property).cloned())
            }
        }
    }

    fn source_property_name(&self, destination_property: &str) -> String {
        let conventions = match self.options() {
            Some(shared) => {
                let options = options::read(&shared);
                options.naming_conventions()
            }
            None => None,
        };

        match conventions {
            Some((source, destination)) => {
                destination.translate(destination_property, source.as_ref())
            }
            None => destination_property.to_string(),
        }
    }
}

impl From<TransformFn> for Operation {
    fn from(transform: TransformFn) -> Self {
        Self::from_kind(OperationKind::Custom(transform))
    }
}

impl std::fmt::Debug for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("kind", &self.kind)
            .field("has_options", &self.has_options())
            .finish()
    }
}
