//! Herbal Garden Catalog
//!
//! Search and retrieval over a small, static catalog of AYUSH medicinal
//! plants. The catalog is built once per process and never mutated.
//!
//! Module layout:
//! - `plant`: The plant record type
//! - `seed`: Built-in catalog data
//! - `catalog`: Lookup by id, search by name, search by ailment
//! - `utils/`: Query normalization
//! - `view_models`: Cards and search envelopes for the frontend
//! - `api_server`: Axum JSON API (feature `api`)

pub mod error;
pub mod plant;
pub mod seed;
pub mod catalog;
pub mod utils;
pub mod view_models;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::CatalogError;
pub use plant::PlantRecord;
pub use catalog::{catalog, Catalog, SearchKind, FEATURED_COUNT};
pub use view_models::{PlantCard, SearchResults};

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
