//! Completion eligibility, the pending → completed transition and
//! recurrence.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::generate::days_after;
use crate::{
    error::{GardenError, Result},
    models::{NewTask, Task, TaskStatus},
};

/// Whether a task due on `due_date` may be completed on `today`.
///
/// Only calendar days are compared: a task is eligible from the start of
/// its due day onward.
pub fn is_eligible(due_date: Date, today: Date) -> bool {
    due_date <= today
}

/// Fails with `GardenError::NotYetDue` when `task` falls due after `today`.
pub fn ensure_eligible(task: &Task, today: Date) -> Result<()> {
    if is_eligible(task.due_date, today) {
        Ok(())
    } else {
        Err(GardenError::NotYetDue {
            task_id: task.id,
            due_date: task.due_date,
        })
    }
}

/// The draft successor of a recurring task, or `None` for one-off tasks.
///
/// Every field is copied except the due date, which advances by the
/// recurrence interval; the draft is pending with `notification_sent`
/// cleared.
pub fn next_occurrence(task: &Task) -> Result<Option<NewTask>> {
    let Some(interval) = task.recurring_days else {
        return Ok(None);
    };

    Ok(Some(NewTask {
        user_id: task.user_id.clone(),
        planting_id: task.planting_id,
        garden_id: task.garden_id,
        task_type: task.task_type,
        due_date: days_after(task.due_date, i64::from(interval.get()))?,
        details: task.details.clone(),
        related_plant_name: task.related_plant_name.clone(),
        related_area_id: task.related_area_id,
        recurring_days: task.recurring_days,
    }))
}

/// What a completion will write: the closed task and its successor draft.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionPlan {
    pub completed: Task,
    pub successor: Option<NewTask>,
}

/// Plans the completion of `task` on `today` at instant `now`.
///
/// # Errors
///
/// * `GardenError::InvalidInput` - the task is already completed
/// * `GardenError::NotYetDue` - the task is due after `today`
pub fn plan_completion(task: &Task, today: Date, now: Timestamp) -> Result<CompletionPlan> {
    if task.is_completed() {
        return Err(GardenError::invalid_input("status")
            .with_reason(format!("Task {} is already completed", task.id)));
    }
    ensure_eligible(task, today)?;

    let successor = next_occurrence(task)?;
    let completed = Task {
        status: TaskStatus::Completed,
        completed_at: Some(now),
        ..task.clone()
    };

    Ok(CompletionPlan {
        completed,
        successor,
    })
}

/// Result of completing a task, as stored.
///
/// Callers holding a task list apply this delta: replace `completed` and
/// append `successor` if present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskCompletion {
    pub completed: Task,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successor: Option<Task>,
}
