//! Plant catalog: read-only reference data for plant types.
//!
//! The catalog is consulted when a planting is created (to generate its
//! tasks) and when plants are listed. The built-in catalog carries the
//! plants grown in the Winston, Oregon household garden (zones 8b/9a).

use std::{collections::HashSet, path::Path};

use crate::{
    error::{GardenError, Result},
    models::PlantDefinition,
};

const WINSTON_PLANTS: &str = include_str!("../assets/plants.json");

/// Lookup of plant definitions by catalog slug.
pub trait PlantCatalog: Send + Sync {
    /// Returns the definition for `plant_id`, if the catalog knows it.
    fn lookup(&self, plant_id: &str) -> Option<PlantDefinition>;

    /// Every plant in the catalog, in catalog order.
    fn plants(&self) -> Vec<PlantDefinition>;
}

/// A catalog held in memory.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    plants: Vec<PlantDefinition>,
}

impl StaticCatalog {
    /// Builds a catalog, rejecting empty or duplicate IDs.
    pub fn new(plants: Vec<PlantDefinition>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(plants.len());
        for plant in &plants {
            if plant.id.trim().is_empty() {
                return Err(GardenError::invalid_input("id")
                    .with_reason(format!("Plant '{}' has an empty catalog ID", plant.name)));
            }
            if !seen.insert(plant.id.as_str()) {
                return Err(GardenError::invalid_input("id")
                    .with_reason(format!("Duplicate plant ID '{}' in catalog", plant.id)));
            }
        }
        Ok(Self { plants })
    }

    /// The built-in household catalog.
    pub fn winston() -> Result<Self> {
        Self::from_json(WINSTON_PLANTS)
    }

    /// Parses a catalog from a JSON array of plant definitions.
    pub fn from_json(json: &str) -> Result<Self> {
        let plants: Vec<PlantDefinition> = serde_json::from_str(json)?;
        Self::new(plants)
    }

    /// Reads a catalog file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| GardenError::FileSystem {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loading plant catalog from {}", path.display());
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

impl PlantCatalog for StaticCatalog {
    fn lookup(&self, plant_id: &str) -> Option<PlantDefinition> {
        self.plants.iter().find(|plant| plant.id == plant_id).cloned()
    }

    fn plants(&self) -> Vec<PlantDefinition> {
        self.plants.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::models::WateringNeeds;

    #[test]
    fn test_winston_catalog_contents() {
        let catalog = StaticCatalog::winston().expect("built-in catalog parses");
        assert_eq!(catalog.len(), 10);

        let tomato = catalog.lookup("tomato").expect("tomato");
        assert_eq!(tomato.name, "Tomato");
        assert_eq!(tomato.variety, "Cherokee Purple");
        assert_eq!(tomato.watering_needs, WateringNeeds::High);
        assert_eq!(tomato.days_to_maturity, Some(80));

        let rosemary = catalog.lookup("rosemary").expect("rosemary");
        assert_eq!(rosemary.watering_needs, WateringNeeds::Low);
        assert!(rosemary.is_perennial);

        let spinach = catalog.lookup("spinach").expect("spinach");
        assert_eq!(spinach.sun_requirement.as_deref(), Some("Partial Sun"));
        assert_eq!(spinach.spacing_inches, Some(6.0));
        assert_eq!(spinach.kind.as_deref(), Some("Vegetable"));

        assert!(catalog.plants().iter().all(|plant| plant.greenhouse_suitable));
    }

    #[test]
    fn test_lookup_unknown_plant() {
        let catalog = StaticCatalog::winston().expect("built-in catalog parses");
        assert!(catalog.lookup("kudzu").is_none());
        assert!(catalog.lookup("Tomato").is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": "pea", "name": "Pea", "variety": "Sugar Snap", "wateringNeeds": "medium"},
            {"id": "pea", "name": "Pea", "variety": "Oregon Giant", "wateringNeeds": "medium"}
        ]"#;
        match StaticCatalog::from_json(json).unwrap_err() {
            GardenError::InvalidInput { field, reason } => {
                assert_eq!(field, "id");
                assert!(reason.contains("Duplicate plant ID 'pea'"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_minimal_definition_defaults() {
        let json = r#"[{"id": "garlic", "name": "Garlic", "variety": "Music", "wateringNeeds": "low"}]"#;
        let catalog = StaticCatalog::from_json(json).expect("valid catalog");
        let garlic = catalog.lookup("garlic").expect("garlic");
        assert_eq!(garlic.days_to_maturity, None);
        assert!(!garlic.is_perennial);
        assert!(garlic.companion_plants.is_empty());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        assert!(matches!(
            StaticCatalog::from_json("{not json"),
            Err(GardenError::Serialization { .. })
        ));
        assert!(matches!(
            StaticCatalog::from_json(r#"[{"id": "x", "name": "X", "variety": "Y", "wateringNeeds": "soggy"}]"#),
            Err(GardenError::Serialization { .. })
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"id": "leek", "name": "Leek", "variety": "King Richard", "wateringNeeds": "medium", "daysToMaturity": 75}}]"#
        )
        .expect("write catalog");

        let catalog = StaticCatalog::from_path(file.path()).expect("catalog file loads");
        assert_eq!(catalog.lookup("leek").and_then(|p| p.days_to_maturity), Some(75));

        assert!(matches!(
            StaticCatalog::from_path("/nonexistent/plants.json"),
            Err(GardenError::FileSystem { .. })
        ));
    }
}
