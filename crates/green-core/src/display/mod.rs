//! Markdown presentation of models, collections and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds collection newtypes and result wrappers so that each
//! interface prints the same text for the same outcome.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Collections &  │    │    Markdown     │
//! │ (Garden, Task)  │───▶│  Result Types   │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use green_core::{display::OperationStatus, engine::TaskView};
//!
//! let status = OperationStatus::success("Cleared 2 gardens".to_string());
//! assert_eq!(status.to_string(), "Success: Cleared 2 gardens\n");
//! assert_eq!(TaskView::Today.title(), "Due today");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Gardens, Plantings, Plants, TaskList, Tasks};
pub use datetime::{LocalDateTime, LongDate};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::{OperationStatus, StatusLevel};
