#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # automap-ir
//!
//! Property values and object shapes that mapping operations read from and
//! produce.
//!
//! The configuration layer never walks object graphs itself; it only needs a
//! neutral representation of a source object so that transform functions and
//! the convention-default operation have something to read.

/// Flat, named objects keyed by property name.
pub mod object;
/// Scalar property values.
pub mod value;

/// Object shape handed to operations.
pub use object::Object;
/// Property value type.
pub use value::Value;

use thiserror::Error;

/// Errors that can occur when working with the IR
#[derive(Error, Debug)]
pub enum Error {
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Conversion error in {context}: {message}")]
    Conversion { context: String, message: String },
}

impl Error {
    /// Build a type-mismatch error from the expected and actual value kinds.
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Build a conversion error with conversion context.
    pub fn conversion(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conversion {
            context: context.into(),
            message: message.into(),
        }
    }
}

/// Crate-local result type for IR operations.
pub type Result<T> = std::result::Result<T, Error>;
