//! Per-mapping options
//!
//! Every [`crate::Mapping`] owns its own copy of [`Options`], cloned from the
//! registry template when the mapping is created. The copy lives behind a
//! [`SharedOptions`] so operations configured by the mapping can hold a
//! non-owning reference to it and read it when they are applied.

use crate::naming::NamingConvention;
use crate::operation::Operation;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Options owned by a single mapping and observed by its operations
pub type SharedOptions = Arc<RwLock<Options>>;

/// Settings scoped to one mapping
#[derive(Debug, Clone)]
pub struct Options {
    source_naming_convention: Option<Arc<dyn NamingConvention>>,
    destination_naming_convention: Option<Arc<dyn NamingConvention>>,
    skip_constructor: bool,
    default_operation: Operation,
}

impl Options {
    pub fn new() -> Self {
        Self {
            source_naming_convention: None,
            destination_naming_convention: None,
            skip_constructor: false,
            default_operation: Operation::convention_default(),
        }
    }

    pub fn source_naming_convention(&self) -> Option<&Arc<dyn NamingConvention>> {
        self.source_naming_convention.as_ref()
    }

    pub fn set_source_naming_convention(&mut self, convention: Arc<dyn NamingConvention>) {
        self.source_naming_convention = Some(convention);
    }

    pub fn destination_naming_convention(&self) -> Option<&Arc<dyn NamingConvention>> {
        self.destination_naming_convention.as_ref()
    }

    pub fn set_destination_naming_convention(&mut self, convention: Arc<dyn NamingConvention>) {
        self.destination_naming_convention = Some(convention);
    }

    /// Both conventions as a `(source, destination)` pair, if both are set
    pub fn naming_conventions(
        &self,
    ) -> Option<(Arc<dyn NamingConvention>, Arc<dyn NamingConvention>)> {
        match (
            &self.source_naming_convention,
            &self.destination_naming_convention,
        ) {
            (Some(source), Some(destination)) => {
                Some((Arc::clone(source), Arc::clone(destination)))
            }
            _ => None,
        }
    }

    /// Names are translated only when both sides have a convention
    pub fn should_convert_name(&self) -> bool {
        self.source_naming_convention.is_some() && self.destination_naming_convention.is_some()
    }

    /// Tell the execution engine to bypass the destination type's constructor
    pub fn skip_constructor(&mut self) {
        self.skip_constructor = true;
    }

    pub fn dont_skip_constructor(&mut self) {
        self.skip_constructor = false;
    }

    pub fn should_skip_constructor(&self) -> bool {
        self.skip_constructor
    }

    /// Template the fallback operation for unmapped properties is cloned from
    pub fn default_operation(&self) -> &Operation {
        &self.default_operation
    }

    pub fn set_default_operation(&mut self, operation: Operation) {
        self.default_operation = operation;
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Options {
    fn eq(&self, other: &Self) -> bool {
        fn same_convention(
            a: Option<&Arc<dyn NamingConvention>>,
            b: Option<&Arc<dyn NamingConvention>>,
        ) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => a.name() == b.name(),
                (None, None) => true,
                _ => false,
            }
        }

        same_convention(
            self.source_naming_convention(),
            other.source_naming_convention(),
        ) && same_convention(
            self.destination_naming_convention(),
            other.destination_naming_convention(),
        ) && self.skip_constructor == other.skip_constructor
            && self.default_operation.same_rule(&other.default_operation)
    }
}

/// Wrap options so they can be shared with operations
pub fn share(options: Options) -> SharedOptions {
    Arc::new(RwLock::new(options))
}

// Lock poisoning is ignored so option access never fails.
pub(crate) fn read(options: &SharedOptions) -> RwLockReadGuard<'_, Options> {
    options.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write(options: &SharedOptions) -> RwLockWriteGuard<'_, Options> {
    options.write().unwrap_or_else(PoisonError::into_inner)
}
