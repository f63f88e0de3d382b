//! Builder for creating and configuring Gardener instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::task;

use super::Gardener;
use crate::{
    catalog::{PlantCatalog, StaticCatalog},
    clock::{Clock, SystemClock},
    db::Database,
    error::{GardenError, Result},
};

/// User that owns the data when none is configured.
pub const DEFAULT_USER: &str = "household";

/// Builder for creating and configuring Gardener instances.
#[derive(Clone, Default)]
pub struct GardenerBuilder {
    database_path: Option<PathBuf>,
    user_id: Option<String>,
    catalog: Option<Arc<dyn PlantCatalog>>,
    clock: Option<Arc<dyn Clock>>,
}

impl GardenerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/green/green.db` or `~/.local/share/green/green.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Scopes every operation to `user_id` instead of [`DEFAULT_USER`].
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Replaces the built-in plant catalog.
    pub fn with_catalog(mut self, catalog: impl PlantCatalog + 'static) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Replaces the system clock, e.g. with a [`crate::FixedClock`].
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Builds the configured gardener instance.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::InvalidInput` if the user ID is blank
    /// Returns `GardenError::FileSystem` if the database path is invalid
    /// Returns `GardenError::Database` if database initialization fails
    pub async fn build(self) -> Result<Gardener> {
        let user_id = self
            .user_id
            .unwrap_or_else(|| DEFAULT_USER.to_string())
            .trim()
            .to_string();
        if user_id.is_empty() {
            return Err(GardenError::invalid_input("user_id").with_reason("User ID cannot be empty"));
        }

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GardenError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let catalog: Arc<dyn PlantCatalog> = match self.catalog {
            Some(catalog) => catalog,
            None => Arc::new(StaticCatalog::winston()?),
        };
        let clock: Arc<dyn Clock> = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), GardenError>(())
        })
        .await
        .map_err(|e| GardenError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        log::debug!(
            "Opened garden database at {} for user '{}'",
            db_path.display(),
            user_id
        );
        Ok(Gardener::new(db_path, user_id, catalog, clock))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("green")
            .place_data_file("green.db")
            .map_err(|e| GardenError::XdgDirectory(e.to_string()))
    }
}
