//! Parameter structures for garden operations
//!
//! These structures are shared by every interface (the CLI today) without
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Gardener     │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│  (validation)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Raw user input (quantities as signed integers, dates and statuses as
//! strings) is kept verbatim here so that validation happens in one place,
//! in the `validate` methods below, and yields [`GardenError::InvalidInput`].

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    engine::TaskView,
    error::{GardenError, Result},
    models::{AreaType, PlantingChanges, PlantingStatus},
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Description of one growing area, used when creating gardens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AreaSpec {
    /// Name of the area (required)
    pub name: String,
    /// 'outdoor' (default) or 'greenhouse'
    pub area_type: Option<String>,
    /// Optional length in feet
    pub length_ft: Option<f64>,
    /// Optional width in feet
    pub width_ft: Option<f64>,
}

impl AreaSpec {
    /// Validate the area and return its parsed type.
    ///
    /// # Errors
    ///
    /// * `GardenError::InvalidInput` - empty name, unknown type or
    ///   non-positive dimensions
    pub fn validate(&self) -> Result<AreaType> {
        if self.name.trim().is_empty() {
            return Err(GardenError::invalid_input("area.name").with_reason("Area name is required"));
        }

        for (field, value) in [("area.length_ft", self.length_ft), ("area.width_ft", self.width_ft)] {
            if let Some(value) = value {
                if !(value.is_finite() && value > 0.0) {
                    return Err(GardenError::invalid_input(field)
                        .with_reason(format!("Dimension must be a positive number, got {value}")));
                }
            }
        }

        match &self.area_type {
            Some(area_type) => area_type.parse::<AreaType>().map_err(|reason| {
                GardenError::invalid_input("area.area_type")
                    .with_reason(format!("{reason}. Must be 'outdoor' or 'greenhouse'"))
            }),
            None => Ok(AreaType::default()),
        }
    }
}

/// Parameters for creating a new garden.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGarden {
    /// Name of the garden (required)
    pub name: String,
    /// Optional free-form location
    pub location: Option<String>,
    /// Growing areas; at least one is required
    #[serde(default)]
    pub areas: Vec<AreaSpec>,
}

impl CreateGarden {
    /// Validate the garden and return the parsed type of every area.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use green_core::params::{AreaSpec, CreateGarden};
    ///
    /// let params = CreateGarden {
    ///     name: "Home".to_string(),
    ///     location: None,
    ///     areas: vec![],
    /// };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<Vec<AreaType>> {
        if self.name.trim().is_empty() {
            return Err(GardenError::invalid_input("name").with_reason("Garden name is required"));
        }
        if self.areas.is_empty() {
            return Err(GardenError::invalid_input("areas")
                .with_reason("A garden needs at least one area"));
        }
        self.areas.iter().map(AreaSpec::validate).collect()
    }
}

/// Parameters for renaming a garden.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameGarden {
    /// Garden ID
    pub id: u64,
    /// New name (required)
    pub name: String,
}

/// Parameters for adding an area to an existing garden.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddArea {
    /// Garden ID
    pub garden_id: u64,
    /// The area to add
    #[serde(flatten)]
    pub area: AreaSpec,
}

/// Parameters for deleting a garden with everything planted in it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteGarden {
    /// Garden ID
    pub id: u64,
    /// Must be true; deletion also removes plantings and tasks
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for recording a new planting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlanting {
    /// Garden the plants go into
    pub garden_id: u64,
    /// Area within that garden
    pub area_id: u64,
    /// Catalog slug of the plant
    pub plant_id: String,
    /// Number of plants, must be at least 1
    pub quantity: i64,
    /// Planting day as `YYYY-MM-DD`
    pub date_planted: String,
    /// Optional location notes used in task descriptions
    pub location_notes: Option<String>,
}

impl CreatePlanting {
    /// Validate quantity and date, returning them in their stored form.
    ///
    /// The plant ID is checked against the catalog by the caller.
    ///
    /// # Errors
    ///
    /// * `GardenError::InvalidInput` - quantity below 1 or unparseable date
    ///
    /// # Examples
    ///
    /// ```rust
    /// use green_core::params::CreatePlanting;
    ///
    /// let params = CreatePlanting {
    ///     garden_id: 1,
    ///     area_id: 1,
    ///     plant_id: "tomato".to_string(),
    ///     quantity: 3,
    ///     date_planted: "2025-04-01".to_string(),
    ///     location_notes: None,
    /// };
    /// let (quantity, date) = params.validate()?;
    /// assert_eq!(quantity, 3);
    /// assert_eq!(date.to_string(), "2025-04-01");
    /// # Result::<(), green_core::GardenError>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<(u32, Date)> {
        let quantity = validate_quantity(self.quantity)?;
        let date_planted = parse_date("date_planted", &self.date_planted)?;
        Ok((quantity, date_planted))
    }
}

/// Parameters for updating an existing planting.
///
/// Only quantity, location notes and status may change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlanting {
    /// Planting ID to update (required)
    pub id: u64,
    /// New quantity, at least 1
    pub quantity: Option<i64>,
    /// New location notes
    pub location_notes: Option<String>,
    /// New status ('active' or 'removed')
    pub status: Option<String>,
}

impl UpdatePlanting {
    /// Validate the update and return the typed changes.
    ///
    /// # Errors
    ///
    /// * `GardenError::InvalidInput` - quantity below 1 or unknown status
    pub fn validate(&self) -> Result<PlantingChanges> {
        let quantity = self.quantity.map(validate_quantity).transpose()?;
        let status = self
            .status
            .as_deref()
            .map(|status| {
                status.parse::<PlantingStatus>().map_err(|reason| {
                    GardenError::invalid_input("status")
                        .with_reason(format!("{reason}. Must be 'active' or 'removed'"))
                })
            })
            .transpose()?;

        Ok(PlantingChanges {
            quantity,
            location_notes: self.location_notes.clone(),
            status,
        })
    }
}

/// Parameters for listing plantings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlantings {
    /// Restrict to one garden
    pub garden_id: Option<u64>,
    /// Restrict to one area
    pub area_id: Option<u64>,
    /// Show removed plantings instead of active ones
    #[serde(default)]
    pub removed: bool,
}

/// Parameters for listing tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTasks {
    /// Which slice of the task list to show
    #[serde(default)]
    pub view: TaskView,
}

/// Parameters for wiping all of a user's data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClearData {
    /// Must be true to proceed
    #[serde(default)]
    pub confirmed: bool,
}

fn validate_quantity(quantity: i64) -> Result<u32> {
    if quantity < 1 {
        return Err(GardenError::invalid_input("quantity")
            .with_reason(format!("Quantity must be at least 1, got {quantity}")));
    }
    u32::try_from(quantity).map_err(|_| {
        GardenError::invalid_input("quantity")
            .with_reason(format!("Quantity {quantity} is too large"))
    })
}

/// Parses a `YYYY-MM-DD` calendar date from user input.
pub fn parse_date(field: &str, input: &str) -> Result<Date> {
    input.trim().parse::<Date>().map_err(|e| {
        GardenError::invalid_input(field)
            .with_reason(format!("'{input}' is not a valid date (expected YYYY-MM-DD): {e}"))
    })
}

/// Requires the caller to have confirmed a destructive operation.
pub(crate) fn require_confirmation(confirmed: bool, what: &str) -> Result<()> {
    if confirmed {
        Ok(())
    } else {
        Err(GardenError::invalid_input("confirmed").with_reason(format!(
            "{what} requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion."
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planting_params(quantity: i64, date_planted: &str) -> CreatePlanting {
        CreatePlanting {
            garden_id: 1,
            area_id: 1,
            plant_id: "kale".to_string(),
            quantity,
            date_planted: date_planted.to_string(),
            location_notes: None,
        }
    }

    #[test]
    fn test_create_planting_validate_ok() {
        let (quantity, date) = planting_params(4, " 2025-03-15 ")
            .validate()
            .expect("valid planting");
        assert_eq!(quantity, 4);
        assert_eq!(date, Date::constant(2025, 3, 15));
    }

    #[test]
    fn test_create_planting_rejects_zero_quantity() {
        match planting_params(0, "2025-03-15").validate().unwrap_err() {
            GardenError::InvalidInput { field, reason } => {
                assert_eq!(field, "quantity");
                assert!(reason.contains("at least 1"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_create_planting_rejects_negative_quantity() {
        assert!(planting_params(-3, "2025-03-15").validate().is_err());
    }

    #[test]
    fn test_create_planting_rejects_bad_date() {
        for bad in ["", "yesterday", "2025-02-30", "15/03/2025"] {
            match planting_params(1, bad).validate().unwrap_err() {
                GardenError::InvalidInput { field, .. } => assert_eq!(field, "date_planted"),
                other => panic!("Expected InvalidInput error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_update_planting_validate_status() {
        let params = UpdatePlanting {
            id: 1,
            status: Some("Removed".to_string()),
            ..Default::default()
        };
        let changes = params.validate().expect("valid update");
        assert_eq!(changes.status, Some(PlantingStatus::Removed));
        assert_eq!(changes.quantity, None);
    }

    #[test]
    fn test_update_planting_invalid_status() {
        let params = UpdatePlanting {
            id: 1,
            status: Some("composted".to_string()),
            ..Default::default()
        };
        match params.validate().unwrap_err() {
            GardenError::InvalidInput { field, reason } => {
                assert_eq!(field, "status");
                assert!(reason.contains("Invalid planting status: composted"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_update_planting_no_changes() {
        let changes = UpdatePlanting::default().validate().expect("empty update");
        assert!(changes.is_empty());
    }

    #[test]
    fn test_create_garden_requires_named_areas() {
        let params = CreateGarden {
            name: "Home".to_string(),
            location: None,
            areas: vec![AreaSpec {
                name: "  ".to_string(),
                ..Default::default()
            }],
        };
        match params.validate().unwrap_err() {
            GardenError::InvalidInput { field, .. } => assert_eq!(field, "area.name"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_create_garden_area_types() {
        let params = CreateGarden {
            name: "Home".to_string(),
            location: Some("Winston, OR".to_string()),
            areas: vec![
                AreaSpec {
                    name: "Perimeter Bed".to_string(),
                    area_type: None,
                    length_ft: Some(80.0),
                    width_ft: Some(2.0),
                },
                AreaSpec {
                    name: "Greenhouse 1".to_string(),
                    area_type: Some("greenhouse".to_string()),
                    length_ft: None,
                    width_ft: None,
                },
            ],
        };
        assert_eq!(
            params.validate().expect("valid garden"),
            vec![AreaType::Outdoor, AreaType::Greenhouse]
        );
    }

    #[test]
    fn test_area_rejects_negative_dimension() {
        let spec = AreaSpec {
            name: "Bed".to_string(),
            length_ft: Some(-1.0),
            ..Default::default()
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_require_confirmation() {
        assert!(require_confirmation(true, "Planting deletion").is_ok());
        let err = require_confirmation(false, "Planting deletion").unwrap_err();
        assert!(err.to_string().contains("Planting deletion requires explicit confirmation"));
    }
}
