//! The task engine: pure scheduling rules over plantings and tasks.
//!
//! Nothing in this module touches storage. The [`crate::Gardener`] facade
//! pairs these rules with database transactions:
//!
//! * [`generate_initial_tasks`] derives the starting tasks for a planting
//! * [`plan_completion`] checks eligibility and drafts the successor of a
//!   recurring task
//! * [`TaskView`] and [`DueLabel`] slice and describe task lists relative
//!   to a calendar day

pub mod completion;
pub mod generate;
pub mod views;

pub use completion::{
    ensure_eligible, is_eligible, next_occurrence, plan_completion, CompletionPlan,
    TaskCompletion,
};
pub use generate::{
    generate_initial_tasks, FIRST_PEST_CHECK_AFTER_DAYS, FIRST_WATERING_AFTER_DAYS,
    PEST_CHECK_INTERVAL,
};
pub use views::{end_of_week, sort_for_display, start_of_week, DueLabel, TaskView};
