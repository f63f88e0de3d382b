//! Result wrapper types for displaying operation outcomes.
//!
//! Each wrapper opens with a one-line confirmation naming the resource and
//! its ID, followed by the resource itself where that is useful.

use std::fmt;

use super::datetime::LongDate;
use crate::{
    engine::TaskCompletion,
    models::{Area, DataCleared, Garden, GardenDeleted, Planting, PlantingCreated, PlantingDeleted},
};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use green_core::{display::CreateResult, models::{Garden, Area, AreaType}};
/// use jiff::Timestamp;
///
/// let garden = Garden {
///     id: 1,
///     user_id: "household".to_string(),
///     name: "Home".to_string(),
///     location: Some("Winston, OR".to_string()),
///     created_at: Timestamp::now(),
///     areas: vec![Area {
///         id: 1,
///         garden_id: 1,
///         name: "Greenhouse".to_string(),
///         area_type: AreaType::Greenhouse,
///         length_ft: Some(10.0),
///         width_ft: Some(8.0),
///     }],
/// };
///
/// let output = CreateResult::new(garden).to_string();
/// assert!(output.starts_with("Created garden with ID: 1"));
/// assert!(output.contains("- Greenhouse (ID: 1, greenhouse, 10×8 ft)"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Garden> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created garden with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Area> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added area to garden {} with ID: {}",
            self.resource.garden_id, self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<PlantingCreated> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let PlantingCreated { planting, tasks } = &self.resource;
        writeln!(f, "Created planting with ID: {}", planting.id)?;
        writeln!(f)?;
        write!(f, "{planting}")?;

        writeln!(f, "### Scheduled tasks")?;
        writeln!(f)?;
        for task in tasks {
            write!(
                f,
                "- {}: {} on {}",
                task.task_type.with_icon(),
                task.details,
                LongDate(&task.due_date)
            )?;
            match task.recurring_days {
                Some(days) => writeln!(f, ", then every {days} days")?,
                None => writeln!(f)?,
            }
        }
        Ok(())
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of changes applied.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for UpdateResult<Garden> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated garden with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<Planting> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated planting with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<PlantingDeleted> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let PlantingDeleted {
            planting,
            removed_task_ids,
        } = &self.resource;
        writeln!(
            f,
            "Deleted planting {} ({} × {}) and {} tasks",
            planting.id,
            planting.plant_id,
            planting.quantity,
            removed_task_ids.len()
        )
    }
}

impl fmt::Display for DeleteResult<GardenDeleted> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted garden '{}' (ID: {}) with {} plantings and {} tasks",
            self.resource.garden.name,
            self.resource.garden.id,
            self.resource.plantings_removed,
            self.resource.tasks_removed
        )
    }
}

impl fmt::Display for DeleteResult<DataCleared> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.resource.is_empty() {
            return writeln!(f, "Nothing to clear.");
        }
        writeln!(
            f,
            "Removed {} gardens, {} plantings and {} tasks",
            self.resource.gardens, self.resource.plantings, self.resource.tasks
        )
    }
}

impl fmt::Display for TaskCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Completed task {}: {}",
            self.completed.id, self.completed.details
        )?;
        if let Some(next) = &self.successor {
            writeln!(f)?;
            writeln!(
                f,
                "Next {} scheduled for {} (task {}).",
                next.task_type.with_icon().to_lowercase(),
                LongDate(&next.due_date),
                next.id
            )?;
        }
        Ok(())
    }
}
