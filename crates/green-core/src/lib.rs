//! Core library for the Green garden assistant.
//!
//! Green keeps a register of gardens and what has been planted in them, and
//! turns each planting into a schedule of care tasks: watering, harvest and
//! pest checks. Completing a recurring task schedules its next occurrence.
//!
//! - [`engine`] holds the scheduling rules as pure functions
//! - [`db`] persists gardens, plantings and tasks in SQLite
//! - [`Gardener`] ties both together behind an async API scoped to one user
//! - [`display`] formats everything as markdown for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use green_core::{
//!     params::{AreaSpec, CreateGarden, CreatePlanting, Id, ListTasks},
//!     engine::TaskView,
//!     GardenerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gardener = GardenerBuilder::new()
//!     .with_database_path(Some("garden.db"))
//!     .build()
//!     .await?;
//!
//! let garden = gardener
//!     .create_garden(&CreateGarden {
//!         name: "Home".to_string(),
//!         location: None,
//!         areas: vec![AreaSpec {
//!             name: "Greenhouse".to_string(),
//!             area_type: Some("greenhouse".to_string()),
//!             ..Default::default()
//!         }],
//!     })
//!     .await?;
//!
//! gardener
//!     .create_planting(&CreatePlanting {
//!         garden_id: garden.id,
//!         area_id: garden.areas[0].id,
//!         plant_id: "basil".to_string(),
//!         quantity: 4,
//!         date_planted: "2025-05-10".to_string(),
//!         location_notes: Some("by the door".to_string()),
//!     })
//!     .await?;
//!
//! let due = gardener.list_tasks(&ListTasks { view: TaskView::Today }).await?;
//! for task in &due {
//!     let completion = gardener.complete_task(&Id { id: task.id }).await?;
//!     println!("{completion}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod clock;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod gardener;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use catalog::{PlantCatalog, StaticCatalog};
pub use clock::{Clock, FixedClock, SystemClock};
pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, UpdateResult};
pub use engine::{DueLabel, TaskCompletion, TaskView};
pub use error::{ErrorKind, GardenError, Result};
pub use gardener::{Gardener, GardenerBuilder, DEFAULT_USER};
pub use models::{
    Area, AreaType, Garden, PlantDefinition, Planting, PlantingStatus, Task, TaskStatus,
    TaskSummary, TaskType, WateringNeeds,
};
