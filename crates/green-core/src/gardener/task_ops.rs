//! Task engine operations for the Gardener.

use super::Gardener;
use crate::{
    engine::{plan_completion, sort_for_display, TaskCompletion},
    error::{GardenError, Result},
    models::{Task, TaskSummary},
    params::{Id, ListTasks},
};

impl Gardener {
    /// Completes a task, scheduling its successor if it recurs.
    ///
    /// # Errors
    ///
    /// * `GardenError::TaskNotFound` - no such task for this user
    /// * `GardenError::NotYetDue` - the task is due after today; nothing is
    ///   changed
    /// * `GardenError::InvalidInput` - the task is already completed
    pub async fn complete_task(&self, params: &Id) -> Result<TaskCompletion> {
        let id = params.id;
        let today = self.today();
        let now = self.now();

        let result = self
            .run_blocking(move |db, user_id| {
                db.complete_task(user_id, id, |task| plan_completion(task, today, now))
            })
            .await;

        match &result {
            Ok(completion) => match &completion.successor {
                Some(next) => log::info!(
                    "Completed task {id}; next occurrence {} due {}",
                    next.id,
                    next.due_date
                ),
                None => log::info!("Completed task {id}"),
            },
            Err(GardenError::NotYetDue { due_date, .. }) => {
                log::debug!("Task {id} is not due until {due_date}");
            }
            Err(_) => {}
        }
        result
    }

    /// Retrieves a task by its ID.
    pub async fn get_task(&self, params: &Id) -> Result<Option<Task>> {
        let id = params.id;
        self.run_blocking(move |db, user_id| db.get_task(user_id, id))
            .await
    }

    /// Tasks in the requested view, in display order.
    pub async fn list_tasks(&self, params: &ListTasks) -> Result<Vec<Task>> {
        let view = params.view;
        let today = self.today();
        let tasks = self
            .run_blocking(|db, user_id| db.list_tasks(user_id))
            .await?;
        Ok(view.apply(tasks, today))
    }

    /// Every task generated from a planting, in display order.
    pub async fn tasks_for_planting(&self, params: &Id) -> Result<Vec<Task>> {
        let planting_id = params.id;
        let today = self.today();
        let mut tasks = self
            .run_blocking(move |db, user_id| {
                if db.get_planting(user_id, planting_id)?.is_none() {
                    return Err(GardenError::PlantingNotFound { id: planting_id });
                }
                db.tasks_for_planting(user_id, planting_id)
            })
            .await?;
        sort_for_display(&mut tasks, today);
        Ok(tasks)
    }

    /// Task counts for the dashboard, relative to today.
    pub async fn task_summary(&self) -> Result<TaskSummary> {
        let today = self.today();
        let tasks = self
            .run_blocking(|db, user_id| db.list_tasks(user_id))
            .await?;
        Ok(TaskSummary::from_tasks(&tasks, today))
    }
}
