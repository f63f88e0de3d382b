//! SQLite persistence for gardens, plantings and tasks.
//!
//! Every query is scoped by the caller's `user_id`; a record owned by
//! another user is reported exactly like a missing one. Operations that
//! touch several tables (planting creation with its generated tasks, task
//! completion with its successor, cascade deletes) run in one transaction
//! and roll back together.

use std::path::Path;

use jiff::{civil::Date, tz::TimeZone, Zoned};
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod garden_queries;
pub mod planting_queries;
pub mod schema;
pub mod task_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
    /// Day substituted for a missing due date on legacy task rows
    today: Date,
    /// Zone in which timestamp due dates are read as calendar days
    time_zone: TimeZone,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let now = Zoned::now();
        let db = Self {
            connection,
            today: now.date(),
            time_zone: now.time_zone().clone(),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Sets the calendar used to read task due dates.
    ///
    /// `today` stands in for a missing due date and `time_zone` turns
    /// timestamp due dates into calendar days. Both should come from the
    /// same clock so that eligibility compares days in one zone.
    pub fn for_day(mut self, today: Date, time_zone: TimeZone) -> Self {
        self.today = today;
        self.time_zone = time_zone;
        self
    }
}

/// Converts a stored row ID to the public ID type.
fn to_id(value: i64) -> u64 {
    // Row IDs come from AUTOINCREMENT keys and are never negative
    u64::try_from(value).unwrap_or_default()
}

/// Converts a public ID to the stored row ID type.
///
/// IDs past `i64::MAX` cannot exist in SQLite and map to a key no row has.
fn to_sql_id(id: u64) -> i64 {
    i64::try_from(id).unwrap_or(i64::MAX)
}
