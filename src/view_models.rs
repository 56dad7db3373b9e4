//! View Models for the Catalog API
//!
//! Serializable shapes the browser consumes for list views and search
//! results. The full [`PlantRecord`] is served as-is for the detail view.

use serde::Serialize;

use crate::catalog::SearchKind;
use crate::plant::PlantRecord;

/// Characters of the description shown on a card before the ellipsis
pub const EXCERPT_CHARS: usize = 120;

/// Badge text when a plant lists no parts used
pub const DEFAULT_BADGE: &str = "Herbal";

/// Summary card for grids and result lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantCard {
    pub id: String,
    pub common_name: String,
    pub botanical_name: String,
    /// First letter of the common name, used as the image placeholder
    pub initial: String,
    pub badge: String,
    pub excerpt: String,
    pub href: String,
}

impl From<&PlantRecord> for PlantCard {
    fn from(plant: &PlantRecord) -> Self {
        Self {
            id: plant.id.clone(),
            common_name: plant.common_name.clone(),
            botanical_name: plant.botanical_name.clone(),
            initial: plant.common_name.chars().next().map(String::from).unwrap_or_default(),
            badge: plant
                .parts_used
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_BADGE.to_string()),
            excerpt: excerpt(&plant.description, EXCERPT_CHARS),
            href: plant.href(),
        }
    }
}

/// First `max_chars` characters followed by "..." (always appended)
fn excerpt(text: &str, max_chars: usize) -> String {
    let end = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    format!("{}...", &text[..end])
}

/// Cards for a list of plants, preserving order
pub fn cards<'a, I>(plants: I) -> Vec<PlantCard>
where
    I: IntoIterator<Item = &'a PlantRecord>,
{
    plants.into_iter().map(PlantCard::from).collect()
}

/// Search response envelope
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub kind: SearchKind,
    pub count: usize,
    pub results: Vec<PlantCard>,
}

impl SearchResults {
    pub fn new(query: &str, kind: SearchKind, plants: &[&PlantRecord]) -> Self {
        let results = cards(plants.iter().copied());
        Self {
            query: query.trim().to_string(),
            kind,
            count: results.len(),
            results,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
