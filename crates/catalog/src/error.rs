//! Error types for the catalog crate.
//!
//! Every failure while reading, parsing or validating a movie catalog is
//! reported through [`CatalogError`]. The algorithms never see these: once a
//! `Catalog` exists it is valid by construction.

use crate::types::MovieId;
use thiserror::Error;

/// Errors that can occur while building a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Line in a catalog file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    Parse {
        file: String,
        line: usize,
        reason: String,
    },

    /// A field had a value outside its domain (negative rating, zero weight...)
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two movies share the same id
    #[error("Duplicate movie id {id}")]
    DuplicateMovie { id: MovieId },

    /// A similarity edge points at a movie that is not in the catalog
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: MovieId },

    /// Catalog-wide validation failed
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenience alias for results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
