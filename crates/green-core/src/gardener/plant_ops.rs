//! Plant catalog lookups for the Gardener.

use super::Gardener;
use crate::models::PlantDefinition;

impl Gardener {
    /// Every plant the catalog knows, in catalog order.
    pub fn list_plants(&self) -> Vec<PlantDefinition> {
        self.catalog.plants()
    }

    /// Looks up a plant by its catalog slug.
    pub fn get_plant(&self, plant_id: &str) -> Option<PlantDefinition> {
        self.catalog.lookup(plant_id.trim())
    }
}
