//! Task summary counts for the dashboard.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Task;
use crate::engine::TaskView;

/// Counts of tasks per view, relative to one calendar day.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskSummary {
    /// Day the counts were taken for
    pub today: Option<Date>,
    /// Pending tasks due exactly today
    pub due_today: u32,
    /// Pending tasks due before today
    pub overdue: u32,
    /// Pending tasks due on other days of this week
    pub this_week: u32,
    /// All pending tasks
    pub pending: u32,
    /// All completed tasks
    pub completed: u32,
}

impl TaskSummary {
    /// Tally a task list as seen on `today`.
    pub fn from_tasks(tasks: &[Task], today: Date) -> Self {
        let count = |view: TaskView| {
            let matching = tasks.iter().filter(|task| view.matches(task, today)).count();
            u32::try_from(matching).unwrap_or(u32::MAX)
        };

        let overdue = count(TaskView::Overdue);
        Self {
            today: Some(today),
            due_today: count(TaskView::Today).saturating_sub(overdue),
            overdue,
            this_week: count(TaskView::ThisWeek),
            pending: count(TaskView::Pending),
            completed: count(TaskView::Completed),
        }
    }
}
