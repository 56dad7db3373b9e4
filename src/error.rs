//! Error types for catalog construction and query parsing.
//!
//! Lookups and searches themselves never fail: absence is `None`, no match is
//! an empty `Vec`. Errors only arise when building a catalog from records or
//! when parsing a search discriminator supplied by a caller.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two records share the same identifier
    #[error("duplicate plant id '{0}'")]
    DuplicateId(String),

    /// A record has an empty identifier (position in the input slice)
    #[error("plant at position {index} has an empty id")]
    EmptyId { index: usize },

    /// Search `type` was neither "name" nor "ailment"
    #[error("unknown search type '{0}' (expected 'name' or 'ailment')")]
    UnknownSearchKind(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
