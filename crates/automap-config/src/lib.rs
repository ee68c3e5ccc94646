//! # automap-config
//!
//! Mapping configuration for object-to-object transformations.
//!
//! A [`Mapping`] binds a source type to a destination type, records one
//! [`Operation`] per destination property, and carries its own copy of the
//! registry's default [`Options`]. Mappings are created and owned by an
//! [`AutoMapperConfig`], configured through [`MappingBuilder`], and finally
//! sealed into a read-only [`MappingCatalog`] for the execution engine.

pub mod mapping;
pub mod naming;
pub mod operation;
pub mod options;
pub mod registry;

pub use mapping::{Mapping, MemberOperation};
pub use naming::NamingConvention;
pub use operation::{Operation, OperationKind, TransformFn};
pub use options::{Options, SharedOptions};
pub use registry::{AutoMapperConfig, ConfigRegistry, MappingBuilder, MappingCatalog, MappingKey};

use thiserror::Error;

/// Errors that can occur while configuring or applying mappings
#[derive(Error, Debug)]
pub enum Error {
    #[error("Property '{property}' does not exist on type {type_name}")]
    PropertyNotFound { property: String, type_name: String },

    #[error("Transform error: {0}")]
    Transform(String),

    #[error("Value error: {0}")]
    Value(#[from] automap_ir::Error),
}

impl Error {
    /// Build a property-not-found error for a property on a source type.
    pub fn property_not_found(property: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::PropertyNotFound {
            property: property.into(),
            type_name: type_name.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
