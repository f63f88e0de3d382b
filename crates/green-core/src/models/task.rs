//! Task model definition and related functionality.

use std::{num::NonZeroU32, str::FromStr};

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// The garden action a task asks for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TaskType {
    Water,
    Harvest,
    PestCheck,
    /// Anything not covered by the generated kinds
    General,
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "water" => Ok(TaskType::Water),
            "harvest" => Ok(TaskType::Harvest),
            "pestcheck" | "pest_check" | "pest-check" => Ok(TaskType::PestCheck),
            "general" => Ok(TaskType::General),
            _ => Err(format!("Invalid task type: {s}")),
        }
    }
}

impl TaskType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Water => "water",
            TaskType::Harvest => "harvest",
            TaskType::PestCheck => "pestCheck",
            TaskType::General => "general",
        }
    }

    /// Short label with an icon for list display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskType::Water => "💧 Water",
            TaskType::Harvest => "🧺 Harvest",
            TaskType::PestCheck => "🐛 Pest check",
            TaskType::General => "ℹ Task",
        }
    }
}

/// A scheduled garden action tied to a planting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// Owning user
    pub user_id: String,

    /// Planting the task was derived from
    pub planting_id: u64,

    /// Garden of the planting, copied for display
    pub garden_id: u64,

    pub task_type: TaskType,

    /// Calendar day the task falls due
    pub due_date: Date,

    pub status: TaskStatus,

    /// Present iff `status` is `Completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    /// Rendered description, fixed at generation time
    pub details: String,

    pub related_plant_name: String,

    pub related_area_id: u64,

    /// Recurrence interval in days; `None` for one-off tasks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_days: Option<NonZeroU32>,

    /// Owned by the notifier; never changed by the task engine except when
    /// a successor resets it
    #[serde(default)]
    pub notification_sent: bool,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,
}

impl Task {
    /// Whether completing this task schedules a successor.
    pub fn is_recurring(&self) -> bool {
        self.recurring_days.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// A task that has not been stored yet.
///
/// Status is implicitly pending and `notification_sent` false; the store
/// assigns the ID and creation timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub user_id: String,
    pub planting_id: u64,
    pub garden_id: u64,
    pub task_type: TaskType,
    pub due_date: Date,
    pub details: String,
    pub related_plant_name: String,
    pub related_area_id: u64,
    pub recurring_days: Option<NonZeroU32>,
}

impl NewTask {
    /// Materializes the draft once the store has assigned an ID.
    pub fn into_task(self, id: u64, created_at: Timestamp) -> Task {
        Task {
            id,
            user_id: self.user_id,
            planting_id: self.planting_id,
            garden_id: self.garden_id,
            task_type: self.task_type,
            due_date: self.due_date,
            status: TaskStatus::Pending,
            completed_at: None,
            details: self.details,
            related_plant_name: self.related_plant_name,
            related_area_id: self.related_area_id,
            recurring_days: self.recurring_days,
            notification_sent: false,
            created_at,
        }
    }
}
