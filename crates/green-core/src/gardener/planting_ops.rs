//! Planting register operations for the Gardener.

use super::Gardener;
use crate::{
    engine::generate_initial_tasks,
    error::{GardenError, Result},
    models::{NewPlanting, Planting, PlantingDeleted, PlantingCreated, PlantingFilter},
    params::{CreatePlanting, Id, ListPlantings, UpdatePlanting},
};

impl Gardener {
    /// Records a planting and generates its initial tasks.
    ///
    /// The planting and its tasks are stored together or not at all.
    ///
    /// # Errors
    ///
    /// * `GardenError::InvalidInput` - quantity below 1, unparseable date,
    ///   plant unknown to the catalog, or area outside the garden
    /// * `GardenError::GardenNotFound` - the garden is not the user's
    pub async fn create_planting(&self, params: &CreatePlanting) -> Result<PlantingCreated> {
        let (quantity, date_planted) = params.validate()?;
        let plant_id = params.plant_id.trim();
        let plant = self.catalog.lookup(plant_id).ok_or_else(|| {
            GardenError::invalid_input("plant_id")
                .with_reason(format!("Unknown plant '{plant_id}'"))
        })?;

        let draft = NewPlanting {
            user_id: self.user_id.clone(),
            garden_id: params.garden_id,
            area_id: params.area_id,
            plant_id: plant.id.clone(),
            quantity,
            date_planted,
            location_notes: params.location_notes.clone(),
        };
        let now = self.now();

        let created = self
            .run_blocking(move |db, _| {
                db.create_planting(draft, now, |planting| generate_initial_tasks(planting, &plant))
            })
            .await?;
        log::info!(
            "Created planting {} ({}) with {} tasks",
            created.planting.id,
            created.planting.plant_id,
            created.tasks.len()
        );
        Ok(created)
    }

    /// Retrieves a planting by its ID.
    pub async fn get_planting(&self, params: &Id) -> Result<Option<Planting>> {
        let id = params.id;
        self.run_blocking(move |db, user_id| db.get_planting(user_id, id))
            .await
    }

    /// Lists plantings, active ones unless `removed` is set.
    pub async fn list_plantings(&self, params: &ListPlantings) -> Result<Vec<Planting>> {
        let filter = PlantingFilter::from(params);
        self.run_blocking(move |db, user_id| db.list_plantings(user_id, &filter))
            .await
    }

    /// Updates quantity, location notes or status of a planting.
    ///
    /// Details of tasks already generated are not rewritten.
    pub async fn update_planting(&self, params: &UpdatePlanting) -> Result<Planting> {
        let changes = params.validate()?;
        let id = params.id;

        let planting = self
            .run_blocking(move |db, user_id| db.update_planting(user_id, id, &changes))
            .await?;
        log::info!("Updated planting {id}");
        Ok(planting)
    }

    /// Deletes a planting together with every task generated from it.
    ///
    /// # Errors
    ///
    /// * `GardenError::PlantingNotFound` - no such planting for this user
    pub async fn delete_planting(&self, params: &Id) -> Result<PlantingDeleted> {
        let id = params.id;

        let deleted = self
            .run_blocking(move |db, user_id| db.delete_planting(user_id, id))
            .await?;
        log::info!(
            "Deleted planting {} and {} tasks",
            id,
            deleted.removed_task_ids.len()
        );
        Ok(deleted)
    }
}
