//! Planting model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{PlantingStatus, Task};

/// A quantity of one plant placed in one garden area on one date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Planting {
    /// Unique identifier for the planting
    pub id: u64,

    /// Owning user
    pub user_id: String,

    /// Garden the planting lives in
    pub garden_id: u64,

    /// Area within the garden
    pub area_id: u64,

    /// Catalog slug of the plant
    pub plant_id: String,

    /// Number of plants, at least 1
    pub quantity: u32,

    /// Calendar day the plants went in
    pub date_planted: Date,

    /// Where exactly in the area, e.g. "north end of bed"
    pub location_notes: Option<String>,

    #[serde(default)]
    pub status: PlantingStatus,

    /// Timestamp when the planting was recorded (UTC)
    pub created_at: Timestamp,
}

/// A planting that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlanting {
    pub user_id: String,
    pub garden_id: u64,
    pub area_id: u64,
    pub plant_id: String,
    pub quantity: u32,
    pub date_planted: Date,
    pub location_notes: Option<String>,
}

impl NewPlanting {
    /// Materializes the draft as an active planting.
    pub fn into_planting(self, id: u64, created_at: Timestamp) -> Planting {
        Planting {
            id,
            user_id: self.user_id,
            garden_id: self.garden_id,
            area_id: self.area_id,
            plant_id: self.plant_id,
            quantity: self.quantity,
            date_planted: self.date_planted,
            location_notes: self.location_notes,
            status: PlantingStatus::Active,
            created_at,
        }
    }
}

/// Fields of a planting that may change after creation.
///
/// Produced by [`crate::params::UpdatePlanting::validate`]; `None` keeps the
/// stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantingChanges {
    pub quantity: Option<u32>,
    pub location_notes: Option<String>,
    pub status: Option<PlantingStatus>,
}

impl PlantingChanges {
    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.location_notes.is_none() && self.status.is_none()
    }

    /// Human-readable list of the changes, for update confirmations.
    pub fn describe(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(quantity) = self.quantity {
            changes.push(format!("Quantity set to {quantity}"));
        }
        if let Some(notes) = &self.location_notes {
            changes.push(format!("Location notes set to \"{notes}\""));
        }
        if let Some(status) = self.status {
            changes.push(format!("Status set to {}", status.as_str()));
        }
        changes
    }
}

/// A stored planting together with the tasks generated for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlantingCreated {
    pub planting: Planting,
    pub tasks: Vec<Task>,
}

/// A deleted planting and the IDs of the tasks removed with it.
///
/// Callers holding a task list drop every task whose ID is listed here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlantingDeleted {
    pub planting: Planting,
    pub removed_task_ids: Vec<u64>,
}
