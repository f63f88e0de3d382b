//! High-level API for the garden register and task engine.
//!
//! [`Gardener`] is the single entry point used by interfaces such as the
//! CLI. It binds one user, one plant catalog and one clock to a database
//! file, and exposes async operations that run the blocking SQLite work
//! on tokio's blocking pool.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (display-ready │───▶│ (garden_ops,    │───▶│   (via db/)     │
//! │   wrappers)     │    │  planting_ops,  │    │                 │
//! └─────────────────┘    │  task_ops)      │    └─────────────────┘
//!                        └────────┬────────┘
//!                                 │ pure rules
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │     engine      │
//!                        └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use green_core::{
//!     params::{AreaSpec, CreateGarden, CreatePlanting},
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
//!         location: Some("Winston, OR".to_string()),
//!         areas: vec![AreaSpec {
//!             name: "Perimeter Bed".to_string(),
//!             ..Default::default()
//!         }],
//!     })
//!     .await?;
//!
//! let created = gardener
//!     .create_planting(&CreatePlanting {
//!         garden_id: garden.id,
//!         area_id: garden.areas[0].id,
//!         plant_id: "tomato".to_string(),
//!         quantity: 2,
//!         date_planted: "2025-05-01".to_string(),
//!         location_notes: None,
//!     })
//!     .await?;
//! assert_eq!(created.tasks.len(), 3);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use jiff::{civil::Date, Timestamp};
use tokio::task;

use crate::{
    catalog::PlantCatalog,
    clock::Clock,
    db::Database,
    error::{GardenError, Result},
};

pub mod builder;
pub mod garden_ops;
pub mod handlers;
pub mod plant_ops;
pub mod planting_ops;
pub mod task_ops;


pub use builder::{GardenerBuilder, DEFAULT_USER};

/// Main interface for managing gardens, plantings and tasks.
#[derive(Clone)]
pub struct Gardener {
    pub(crate) db_path: PathBuf,
    pub(crate) user_id: String,
    pub(crate) catalog: Arc<dyn PlantCatalog>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl Gardener {
    pub(crate) fn new(
        db_path: PathBuf,
        user_id: String,
        catalog: Arc<dyn PlantCatalog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            db_path,
            user_id,
            catalog,
            clock,
        }
    }

    /// The user every operation is scoped to.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Today's date according to the configured clock.
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    pub(crate) fn now(&self) -> Timestamp {
        self.clock.timestamp()
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    pub(crate) async fn run_blocking<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database, &str) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let user_id = self.user_id.clone();
        let now = self.clock.now();
        let (today, time_zone) = (now.date(), now.time_zone().clone());

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?.for_day(today, time_zone);
            op(&mut db, &user_id)
        })
        .await
        .map_err(|e| GardenError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
