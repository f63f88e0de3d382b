//! Garden register operations for the Gardener.

use super::Gardener;
use crate::{
    error::{GardenError, Result},
    models::{Area, DataCleared, Garden, GardenDeleted},
    params::{require_confirmation, AddArea, ClearData, CreateGarden, DeleteGarden, Id, RenameGarden},
};

impl Gardener {
    /// Creates a garden with its areas.
    ///
    /// # Errors
    ///
    /// * `GardenError::InvalidInput` - blank name, no areas, or an invalid
    ///   area
    pub async fn create_garden(&self, params: &CreateGarden) -> Result<Garden> {
        let area_types = params.validate()?;
        let params = params.clone();
        let now = self.now();

        let garden = self
            .run_blocking(move |db, user_id| db.create_garden(user_id, &params, &area_types, now))
            .await?;
        log::info!(
            "Created garden {} '{}' with {} areas",
            garden.id,
            garden.name,
            garden.areas.len()
        );
        Ok(garden)
    }

    /// Retrieves a garden with its areas.
    pub async fn get_garden(&self, params: &Id) -> Result<Option<Garden>> {
        let id = params.id;
        self.run_blocking(move |db, user_id| db.get_garden(user_id, id))
            .await
    }

    /// Lists the user's gardens.
    pub async fn list_gardens(&self) -> Result<Vec<Garden>> {
        self.run_blocking(|db, user_id| db.list_gardens(user_id)).await
    }

    pub async fn rename_garden(&self, params: &RenameGarden) -> Result<Garden> {
        if params.name.trim().is_empty() {
            return Err(GardenError::invalid_input("name").with_reason("Garden name is required"));
        }
        let RenameGarden { id, name } = params.clone();
        self.run_blocking(move |db, user_id| db.rename_garden(user_id, id, &name))
            .await
    }

    /// Adds an area to an existing garden.
    pub async fn add_area(&self, params: &AddArea) -> Result<Area> {
        let area_type = params.area.validate()?;
        let AddArea { garden_id, area } = params.clone();

        let area = self
            .run_blocking(move |db, user_id| db.add_area(user_id, garden_id, &area, area_type))
            .await?;
        log::info!("Added area {} to garden {}", area.id, garden_id);
        Ok(area)
    }

    /// Deletes a garden with its areas, plantings and their tasks.
    ///
    /// # Errors
    ///
    /// * `GardenError::InvalidInput` - `confirmed` is false
    /// * `GardenError::GardenNotFound` - no such garden for this user
    pub async fn delete_garden(&self, params: &DeleteGarden) -> Result<GardenDeleted> {
        require_confirmation(params.confirmed, "Garden deletion")?;
        let id = params.id;

        let deleted = self
            .run_blocking(move |db, user_id| db.delete_garden(user_id, id))
            .await?;
        log::info!(
            "Deleted garden {} with {} plantings and {} tasks",
            id,
            deleted.plantings_removed,
            deleted.tasks_removed
        );
        Ok(deleted)
    }

    /// Removes every garden, planting and task owned by the current user.
    pub async fn clear_user_data(&self, params: &ClearData) -> Result<DataCleared> {
        require_confirmation(params.confirmed, "Clearing all garden data")?;

        let cleared = self
            .run_blocking(|db, user_id| db.clear_user_data(user_id))
            .await?;
        log::warn!(
            "Cleared data for user '{}': {} gardens, {} plantings, {} tasks",
            self.user_id,
            cleared.gardens,
            cleared.plantings,
            cleared.tasks
        );
        Ok(cleared)
    }
}
