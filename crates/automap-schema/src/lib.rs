//! # automap-schema
//!
//! Type descriptors and the property-lookup capability used to validate
//! mapping registrations.
//!
//! Types may name a parent type; properties declared anywhere up the parent
//! chain count as members of the child.

pub mod loader;
pub mod model;
pub mod registry;

pub use loader::SchemaLoader;
pub use model::{PropertyDefinition, TypeDescriptor};
pub use registry::{PropertySchema, SchemaRegistry};

use thiserror::Error;

/// Errors that can occur when working with type descriptors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Type not found: {0}")]
    NotFound(String),

    #[error("Invalid descriptor format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
