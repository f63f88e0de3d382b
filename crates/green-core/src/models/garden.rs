//! Garden and area model definitions.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Kind of growing space an area provides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AreaType {
    /// Open-air bed
    #[default]
    Outdoor,

    /// Covered, heated or glazed space
    Greenhouse,
}

impl FromStr for AreaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "outdoor" | "bed" => Ok(AreaType::Outdoor),
            "greenhouse" => Ok(AreaType::Greenhouse),
            _ => Err(format!("Invalid area type: {s}")),
        }
    }
}

impl AreaType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaType::Outdoor => "outdoor",
            AreaType::Greenhouse => "greenhouse",
        }
    }
}

/// A bed, greenhouse or other growing space inside a garden.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Area {
    /// Unique identifier for the area
    pub id: u64,

    /// ID of the garden the area belongs to
    pub garden_id: u64,

    /// Display name, e.g. "Perimeter Bed"
    pub name: String,

    pub area_type: AreaType,

    /// Length in feet
    pub length_ft: Option<f64>,

    /// Width in feet
    pub width_ft: Option<f64>,
}

/// A user's garden with its areas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Garden {
    /// Unique identifier for the garden
    pub id: u64,

    /// Owning user
    pub user_id: String,

    /// Name of the garden
    pub name: String,

    /// Free-form location description
    pub location: Option<String>,

    /// Timestamp when the garden was created (UTC)
    pub created_at: Timestamp,

    /// Growing areas (always loaded with the garden)
    #[serde(default)]
    pub areas: Vec<Area>,
}

impl Garden {
    /// Finds one of this garden's areas by ID.
    pub fn area(&self, area_id: u64) -> Option<&Area> {
        self.areas.iter().find(|area| area.id == area_id)
    }
}

/// A deleted garden with the number of records removed alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GardenDeleted {
    pub garden: Garden,
    pub plantings_removed: usize,
    pub tasks_removed: usize,
}

/// Row counts removed when a user's data is cleared.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataCleared {
    pub gardens: usize,
    pub plantings: usize,
    pub tasks: usize,
}

impl DataCleared {
    /// Returns true when there was nothing to remove.
    pub fn is_empty(&self) -> bool {
        self.gardens == 0 && self.plantings == 0 && self.tasks == 0
    }
}
