//! Plant record model
//!
//! One record per medicinal plant. Field names serialize in camelCase so the
//! JSON shape matches what the browser frontend already consumes.

use serde::{Deserialize, Serialize};

/// A single plant in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    /// Stable identifier, also the `/plant/{id}` route segment
    pub id: String,
    pub common_name: String,
    pub botanical_name: String,
    pub family_name: String,
    pub image_url: String,
    pub description: String,
    pub medicinal_uses: Vec<String>,
    pub parts_used: Vec<String>,
    pub ailments_treated: Vec<String>,
    pub identification_tips: Vec<String>,
}

impl PlantRecord {
    /// Detail page route for this plant
    pub fn href(&self) -> String {
        format!("/plant/{}", self.id)
    }
}
