//! Handler operations that return display-ready wrapper types.
//!
//! Interfaces call these instead of the raw operations when they only need
//! to print the outcome.

use super::Gardener;
use crate::{
    display::{CreateResult, DeleteResult, Gardens, Plantings, Plants, TaskList, Tasks, UpdateResult},
    error::{GardenError, Result},
    models::{
        Area, DataCleared, Garden, GardenDeleted, PlantDefinition, Planting, PlantingCreated,
        PlantingDeleted, Task,
    },
    params::{
        AddArea, ClearData, CreateGarden, CreatePlanting, DeleteGarden, Id, ListPlantings,
        ListTasks, RenameGarden, UpdatePlanting,
    },
};

impl Gardener {
    /// Handle creating a garden.
    pub async fn create_garden_result(&self, params: &CreateGarden) -> Result<CreateResult<Garden>> {
        self.create_garden(params).await.map(CreateResult::new)
    }

    /// Handle listing the user's gardens.
    pub async fn list_gardens_display(&self) -> Result<Gardens> {
        self.list_gardens().await.map(Gardens)
    }

    /// Handle showing one garden; unknown IDs are an error here.
    pub async fn show_garden(&self, params: &Id) -> Result<Garden> {
        self.get_garden(params)
            .await?
            .ok_or(GardenError::GardenNotFound { id: params.id })
    }

    /// Handle renaming a garden.
    pub async fn rename_garden_result(&self, params: &RenameGarden) -> Result<UpdateResult<Garden>> {
        let garden = self.rename_garden(params).await?;
        let change = format!("Name set to \"{}\"", garden.name);
        Ok(UpdateResult::with_changes(garden, vec![change]))
    }

    /// Handle adding an area.
    pub async fn add_area_result(&self, params: &AddArea) -> Result<CreateResult<Area>> {
        self.add_area(params).await.map(CreateResult::new)
    }

    /// Handle deleting a garden with confirmation.
    pub async fn delete_garden_result(
        &self,
        params: &DeleteGarden,
    ) -> Result<DeleteResult<GardenDeleted>> {
        self.delete_garden(params).await.map(DeleteResult::new)
    }

    /// Handle clearing all of the user's data with confirmation.
    pub async fn clear_user_data_result(
        &self,
        params: &ClearData,
    ) -> Result<DeleteResult<DataCleared>> {
        self.clear_user_data(params).await.map(DeleteResult::new)
    }

    /// Handle listing the plant catalog.
    pub fn list_plants_display(&self) -> Plants {
        Plants(self.list_plants())
    }

    /// Handle showing one catalog plant.
    pub fn show_plant(&self, plant_id: &str) -> Result<PlantDefinition> {
        self.get_plant(plant_id).ok_or_else(|| {
            GardenError::invalid_input("plant_id").with_reason(format!("Unknown plant '{plant_id}'"))
        })
    }

    /// Handle recording a planting.
    pub async fn create_planting_result(
        &self,
        params: &CreatePlanting,
    ) -> Result<CreateResult<PlantingCreated>> {
        self.create_planting(params).await.map(CreateResult::new)
    }

    /// Handle listing plantings.
    pub async fn list_plantings_display(&self, params: &ListPlantings) -> Result<Plantings> {
        self.list_plantings(params).await.map(Plantings)
    }

    /// Handle showing a planting together with its tasks.
    pub async fn show_planting(&self, params: &Id) -> Result<(Planting, Tasks)> {
        let planting = self
            .get_planting(params)
            .await?
            .ok_or(GardenError::PlantingNotFound { id: params.id })?;
        let tasks = self.tasks_for_planting(params).await?;
        Ok((planting, Tasks(tasks)))
    }

    /// Handle updating a planting, listing the applied changes.
    pub async fn update_planting_result(
        &self,
        params: &UpdatePlanting,
    ) -> Result<UpdateResult<Planting>> {
        let changes = params.validate()?.describe();
        let planting = self.update_planting(params).await?;
        Ok(UpdateResult::with_changes(planting, changes))
    }

    /// Handle deleting a planting and its tasks.
    pub async fn delete_planting_result(&self, params: &Id) -> Result<DeleteResult<PlantingDeleted>> {
        self.delete_planting(params).await.map(DeleteResult::new)
    }

    /// Handle listing one task view with due labels for today.
    pub async fn list_tasks_display(&self, params: &ListTasks) -> Result<TaskList> {
        let tasks = self.list_tasks(params).await?;
        Ok(TaskList {
            view: params.view,
            today: self.today(),
            tasks,
        })
    }

    /// Handle showing one task; unknown IDs are an error here.
    pub async fn show_task(&self, params: &Id) -> Result<Task> {
        self.get_task(params)
            .await?
            .ok_or(GardenError::TaskNotFound { id: params.id })
    }
}
