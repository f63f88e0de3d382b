//! Data models for gardens, plantings, tasks and plant reference data.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that data structures stay separate from
//! presentation.
//!
//! # Relationships
//!
//! ```text
//! Garden 1──* Area 1──* Planting *──1 PlantDefinition (catalog)
//!                          │
//!                          1
//!                          │
//!                          * Task ──(recurrence)──▶ successor Task
//! ```
//!
//! A [`Planting`] owns its [`Task`]s: deleting the planting deletes them.
//! Tasks are otherwise stored and addressed on their own.
//!
//! # Examples
//!
//! ```rust
//! use green_core::models::{Task, TaskStatus, TaskType};
//! use jiff::{civil::date, Timestamp};
//! use std::num::NonZeroU32;
//!
//! let task = Task {
//!     id: 1,
//!     user_id: "household".to_string(),
//!     planting_id: 7,
//!     garden_id: 1,
//!     task_type: TaskType::Water,
//!     due_date: date(2025, 4, 3),
//!     status: TaskStatus::Pending,
//!     completed_at: None,
//!     details: "Water your Tomato in your garden".to_string(),
//!     related_plant_name: "Tomato".to_string(),
//!     related_area_id: 2,
//!     recurring_days: NonZeroU32::new(2),
//!     notification_sent: false,
//!     created_at: Timestamp::now(),
//! };
//! assert!(task.is_recurring());
//! println!("{}", task);
//! ```

use std::num::NonZeroU32;

pub mod filters;
pub mod garden;
pub mod plant;
pub mod planting;
pub mod status;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

pub use filters::PlantingFilter;
pub use garden::{Area, AreaType, DataCleared, Garden, GardenDeleted};
pub use plant::{PlantDefinition, WateringNeeds};
pub use planting::{NewPlanting, Planting, PlantingChanges, PlantingCreated, PlantingDeleted};
pub use status::{PlantingStatus, TaskStatus};
pub use summary::TaskSummary;
pub use task::{NewTask, Task, TaskType};

/// Builds a day interval in const context.
pub(crate) const fn interval_days(days: u32) -> NonZeroU32 {
    match NonZeroU32::new(days) {
        Some(interval) => interval,
        None => panic!("interval must be at least one day"),
    }
}
