//! Plant Catalog Store
//!
//! Holds the fixed, read-only collection of plant records and answers three
//! queries: exact lookup by id, containment search over names, and
//! containment search over treated ailments.
//!
//! Searches are linear scans in catalog order. The catalog is a handful of
//! records, so no term index is built; results are never re-ranked.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::plant::PlantRecord;
use crate::seed;
use crate::utils::normalization::{any_contains_normalized, contains_normalized, normalize_query};

/// Number of plants shown in the home page "Featured Herbs" strip
pub const FEATURED_COUNT: usize = 3;

/// Which field family a search runs over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    #[default]
    Name,
    Ailment,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Name => "name",
            SearchKind::Ailment => "ailment",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SearchKind::Name),
            "ailment" => Ok(SearchKind::Ailment),
            _ => Err(CatalogError::UnknownSearchKind(s.to_string())),
        }
    }
}

/// Immutable in-memory plant catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Records in insertion order (the display order)
    plants: Vec<PlantRecord>,
    /// id -> position in `plants`
    by_id: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate ids
    pub fn new(plants: Vec<PlantRecord>) -> Result<Self> {
        let mut by_id = FxHashMap::default();
        by_id.reserve(plants.len());

        for (index, plant) in plants.iter().enumerate() {
            if plant.id.is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if by_id.insert(plant.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(plant.id.clone()));
            }
        }

        tracing::info!("Plant catalog built ({} plants)", plants.len());

        Ok(Self { plants, by_id })
    }

    /// Catalog of the built-in AYUSH plants
    pub fn builtin() -> Result<Self> {
        Self::new(seed::seed_records())
    }

    /// Exact, case-sensitive lookup. No trimming is applied to `id`.
    pub fn get_by_id(&self, id: &str) -> Option<&PlantRecord> {
        self.by_id.get(id).map(|&idx| &self.plants[idx])
    }

    /// Plants whose common or botanical name contains the query
    ///
    /// The query is trimmed and lower-cased first; an empty query matches
    /// every plant.
    pub fn search_by_name(&self, query: &str) -> Vec<&PlantRecord> {
        let needle = normalize_query(query);

        let results: Vec<&PlantRecord> = self
            .plants
            .iter()
            .filter(|p| {
                contains_normalized(&p.common_name, &needle)
                    || contains_normalized(&p.botanical_name, &needle)
            })
            .collect();

        tracing::debug!("Name search '{}' returned {} plants", needle, results.len());
        results
    }

    /// Plants with at least one treated ailment containing the query
    pub fn search_by_ailment(&self, query: &str) -> Vec<&PlantRecord> {
        let needle = normalize_query(query);

        let results: Vec<&PlantRecord> = self
            .plants
            .iter()
            .filter(|p| any_contains_normalized(&p.ailments_treated, &needle))
            .collect();

        tracing::debug!("Ailment search '{}' returned {} plants", needle, results.len());
        results
    }

    /// Dispatch on the search discriminator
    pub fn search(&self, kind: SearchKind, query: &str) -> Vec<&PlantRecord> {
        match kind {
            SearchKind::Name => self.search_by_name(query),
            SearchKind::Ailment => self.search_by_ailment(query),
        }
    }

    /// All plants in catalog order
    pub fn all(&self) -> &[PlantRecord] {
        &self.plants
    }

    /// The first `count` plants (clamped to catalog size)
    pub fn featured(&self, count: usize) -> &[PlantRecord] {
        &self.plants[..count.min(self.plants.len())]
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.plants.iter().map(|p| p.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Process-wide built-in catalog, built on first access
///
/// An invalid seed table yields an empty catalog and an error log.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Built-in plant catalog is invalid: {}", e);
            Catalog {
                plants: Vec::new(),
                by_id: FxHashMap::default(),
            }
        }
    })
}
