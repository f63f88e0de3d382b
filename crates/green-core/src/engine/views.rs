//! Date-relative task views: filters, ordering and due labels.
//!
//! Everything here is a pure function of a task and "today"; no engine
//! state is consulted.

use std::{cmp::Ordering, fmt, str::FromStr};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::generate::days_after;
use crate::models::{Task, TaskStatus};

/// A slice of the task list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskView {
    /// Every pending task
    #[default]
    Pending,
    /// Pending tasks due today or earlier
    Today,
    /// Pending tasks due on any other day of the current Sunday to
    /// Saturday week
    #[serde(rename = "week")]
    ThisWeek,
    /// Pending tasks due before today
    Overdue,
    /// Completed tasks
    Completed,
    /// Everything
    All,
}

impl FromStr for TaskView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TaskView::Pending),
            "today" => Ok(TaskView::Today),
            "week" | "thisweek" | "this_week" => Ok(TaskView::ThisWeek),
            "overdue" => Ok(TaskView::Overdue),
            "completed" | "done" => Ok(TaskView::Completed),
            "all" => Ok(TaskView::All),
            _ => Err(format!("Invalid task view: {s}")),
        }
    }
}

impl TaskView {
    /// Whether `task` belongs in this view on `today`.
    pub fn matches(&self, task: &Task, today: Date) -> bool {
        let pending = task.status == TaskStatus::Pending;
        match self {
            TaskView::Pending => pending,
            TaskView::Today => pending && task.due_date <= today,
            TaskView::ThisWeek => {
                pending
                    && task.due_date != today
                    && task.due_date >= start_of_week(today)
                    && task.due_date <= end_of_week(today)
            }
            TaskView::Overdue => pending && task.due_date < today,
            TaskView::Completed => !pending,
            TaskView::All => true,
        }
    }

    /// Heading used when the view is printed.
    pub fn title(&self) -> &'static str {
        match self {
            TaskView::Pending => "Pending tasks",
            TaskView::Today => "Due today",
            TaskView::ThisWeek => "This week",
            TaskView::Overdue => "Overdue tasks",
            TaskView::Completed => "Completed tasks",
            TaskView::All => "All tasks",
        }
    }

    /// Keeps the tasks matching this view, in display order.
    pub fn apply(&self, tasks: Vec<Task>, today: Date) -> Vec<Task> {
        let mut tasks: Vec<Task> = tasks
            .into_iter()
            .filter(|task| self.matches(task, today))
            .collect();
        sort_for_display(&mut tasks, today);
        tasks
    }
}

/// Sunday starting the week that contains `today`.
pub fn start_of_week(today: Date) -> Date {
    let days_since = i64::from(today.weekday().to_sunday_zero_offset());
    days_after(today, -days_since).unwrap_or(Date::MIN)
}

/// Saturday ending the week that contains `today`.
pub fn end_of_week(today: Date) -> Date {
    let days_left = 6 - i64::from(today.weekday().to_sunday_zero_offset());
    days_after(today, days_left).unwrap_or(Date::MAX)
}

/// Pending before completed, overdue first, then by due date and ID.
pub fn sort_for_display(tasks: &mut [Task], today: Date) {
    tasks.sort_by(|a, b| display_order(a, b, today));
}

fn display_order(a: &Task, b: &Task, today: Date) -> Ordering {
    let overdue = |task: &Task| task.status == TaskStatus::Pending && task.due_date < today;

    a.is_completed()
        .cmp(&b.is_completed())
        .then_with(|| overdue(b).cmp(&overdue(a)))
        .then_with(|| a.due_date.cmp(&b.due_date))
        .then_with(|| a.id.cmp(&b.id))
}

/// Relative description of a due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueLabel {
    Today,
    Tomorrow,
    Overdue,
    /// Later this week; shown as the weekday name
    ThisWeek(Date),
    /// Further out; shown as month and day
    Later(Date),
}

impl DueLabel {
    /// Labels `due_date` as seen on `today`.
    ///
    /// ```rust
    /// use green_core::engine::DueLabel;
    /// use jiff::civil::date;
    ///
    /// let monday = date(2025, 6, 2);
    /// assert_eq!(DueLabel::new(monday, monday).to_string(), "Today");
    /// assert_eq!(DueLabel::new(date(2025, 6, 3), monday).to_string(), "Tomorrow");
    /// assert_eq!(DueLabel::new(date(2025, 6, 5), monday).to_string(), "Thursday");
    /// assert_eq!(DueLabel::new(date(2025, 6, 20), monday).to_string(), "Jun 20");
    /// assert_eq!(DueLabel::new(date(2025, 5, 30), monday).to_string(), "Overdue");
    /// ```
    pub fn new(due_date: Date, today: Date) -> Self {
        if due_date == today {
            DueLabel::Today
        } else if due_date < today {
            DueLabel::Overdue
        } else if days_after(today, 1).is_ok_and(|tomorrow| tomorrow == due_date) {
            DueLabel::Tomorrow
        } else if due_date <= end_of_week(today) {
            DueLabel::ThisWeek(due_date)
        } else {
            DueLabel::Later(due_date)
        }
    }
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueLabel::Today => write!(f, "Today"),
            DueLabel::Tomorrow => write!(f, "Tomorrow"),
            DueLabel::Overdue => write!(f, "Overdue"),
            DueLabel::ThisWeek(date) => write!(f, "{}", date.strftime("%A")),
            DueLabel::Later(date) => write!(f, "{}", date.strftime("%b %-d")),
        }
    }
}
