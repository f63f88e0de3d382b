//! Status enumerations for plantings and tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of planting statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlantingStatus {
    /// Planting is growing in its area
    #[default]
    Active,

    /// Planting has been pulled but the record is kept
    Removed,
}

impl FromStr for PlantingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PlantingStatus::Active),
            "removed" => Ok(PlantingStatus::Removed),
            _ => Err(format!("Invalid planting status: {s}")),
        }
    }
}

impl PlantingStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantingStatus::Active => "active",
            PlantingStatus::Removed => "removed",
        }
    }
}

/// Type-safe enumeration of task statuses.
///
/// The only transition is `Pending` → `Completed`; completion is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task is waiting for its due date or for the gardener
    #[default]
    Pending,

    /// Task has been done
    Completed,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "completed" | "done" => Ok(TaskStatus::Completed),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl TaskStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use green_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(TaskStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "✓ Completed",
            TaskStatus::Pending => "○ Pending",
        }
    }
}
