//! Plant reference data as published by the plant catalog.

use std::{num::NonZeroU32, str::FromStr};

use serde::{Deserialize, Serialize};

use super::interval_days;

/// How thirsty a plant is. Drives the watering interval of generated tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WateringNeeds {
    Low,
    Medium,
    High,
}

impl WateringNeeds {
    /// Days between waterings for a plant with these needs.
    ///
    /// ```rust
    /// use green_core::models::WateringNeeds;
    ///
    /// assert_eq!(WateringNeeds::High.watering_interval().get(), 2);
    /// assert_eq!(WateringNeeds::Medium.watering_interval().get(), 3);
    /// assert_eq!(WateringNeeds::Low.watering_interval().get(), 5);
    /// ```
    pub fn watering_interval(&self) -> NonZeroU32 {
        const HIGH: NonZeroU32 = interval_days(2);
        const MEDIUM: NonZeroU32 = interval_days(3);
        const LOW: NonZeroU32 = interval_days(5);

        match self {
            WateringNeeds::High => HIGH,
            WateringNeeds::Medium => MEDIUM,
            WateringNeeds::Low => LOW,
        }
    }

    /// Convert to the lowercase string used in catalog files
    pub fn as_str(&self) -> &'static str {
        match self {
            WateringNeeds::Low => "low",
            WateringNeeds::Medium => "medium",
            WateringNeeds::High => "high",
        }
    }
}

impl FromStr for WateringNeeds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(WateringNeeds::Low),
            "medium" => Ok(WateringNeeds::Medium),
            "high" => Ok(WateringNeeds::High),
            _ => Err(format!("Invalid watering needs: {s}")),
        }
    }
}

/// A plant type known to the catalog.
///
/// Read-only for the rest of the crate: plantings reference a definition by
/// `id` and tasks copy the `name` at generation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlantDefinition {
    /// Catalog slug, e.g. `tomato`
    pub id: String,

    /// Common name
    pub name: String,

    /// Cultivar planted in the household garden
    pub variety: String,

    /// Vegetable, Herb, Fruit, ...
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Watering needs
    pub watering_needs: WateringNeeds,

    /// Days from planting to first harvest, if the plant is harvested
    #[serde(default)]
    pub days_to_maturity: Option<u32>,

    /// Whether the plant does well under glass
    #[serde(default)]
    pub greenhouse_suitable: bool,

    #[serde(default)]
    pub sun_requirement: Option<String>,

    /// Months (1-12) in which the plant can go in the ground
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub planting_months: Vec<u8>,

    /// Months (1-12) in which the plant is usually harvested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub harvest_months: Vec<u8>,

    /// Spacing between plants in inches
    #[serde(default, rename = "spacing")]
    pub spacing_inches: Option<f64>,

    #[serde(default)]
    pub is_perennial: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub companion_plants: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avoid_plants: Vec<String>,

    #[serde(default)]
    pub pest_info: Option<String>,
}
