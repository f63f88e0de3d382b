//! Task storage, completion and queries.

use std::num::NonZeroU32;

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use rusqlite::{params, types::Type, Connection, OptionalExtension};

use super::{to_id, to_sql_id};
use crate::{
    engine::{CompletionPlan, TaskCompletion},
    error::{DatabaseResultExt, GardenError, Result},
    models::{NewTask, Task, TaskStatus, TaskType},
};

const TASK_COLUMNS: &str = "id, user_id, planting_id, garden_id, task_type, due_date, status, completed_at, details, related_plant_name, related_area_id, recurring_days, notification_sent, created_at";
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (user_id, planting_id, garden_id, task_type, due_date, status, details, related_plant_name, related_area_id, recurring_days, notification_sent, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, 0, ?11)";
const COMPLETE_TASK_SQL: &str = "UPDATE tasks SET status = ?1, completed_at = ?2, due_date = ?3 WHERE id = ?4 AND user_id = ?5 AND status = ?6";

/// How stored due dates are read as calendar days.
#[derive(Clone, Copy)]
struct DueCalendar<'a> {
    today: Date,
    time_zone: &'a TimeZone,
}

/// Reads a stored due date as a calendar day.
///
/// Accepts `YYYY-MM-DD` as well as RFC 3339 timestamps written by older
/// clients, which are reduced to their date in `time_zone`. A missing value
/// means the task is due `today`.
pub(crate) fn normalize_due_date(
    raw: Option<&str>,
    today: Date,
    time_zone: &TimeZone,
) -> std::result::Result<Date, String> {
    let Some(raw) = raw else {
        return Ok(today);
    };
    let raw = raw.trim();

    // Timestamps first: a plain date parse would keep the local date part
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Ok(ts.to_zoned(time_zone.clone()).date());
    }
    raw.parse::<Date>()
        .map_err(|e| format!("Invalid due date '{raw}': {e}"))
}

fn build_task_from_row(row: &rusqlite::Row, calendar: DueCalendar) -> rusqlite::Result<Task> {
    let type_str: String = row.get(4)?;
    let task_type = type_str.parse::<TaskType>().map_err(|reason| {
        rusqlite::Error::FromSqlConversionFailure(4, Type::Text, reason.into())
    })?;

    let due_raw: Option<String> = row.get(5)?;
    let due_date = normalize_due_date(due_raw.as_deref(), calendar.today, calendar.time_zone)
        .map_err(|reason| {
            rusqlite::Error::FromSqlConversionFailure(5, Type::Text, reason.into())
        })?;

    let status_str: String = row.get(6)?;
    let status = status_str.parse::<TaskStatus>().map_err(|reason| {
        rusqlite::Error::FromSqlConversionFailure(6, Type::Text, reason.into())
    })?;

    let completed_at = row
        .get::<_, Option<String>>(7)?
        .map(|s| s.parse::<Timestamp>())
        .transpose()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?;

    // Zero or negative intervals from hand-edited rows read as one-off tasks
    let recurring_days = row
        .get::<_, Option<i64>>(11)?
        .and_then(|days| u32::try_from(days).ok())
        .and_then(NonZeroU32::new);

    Ok(Task {
        id: to_id(row.get(0)?),
        user_id: row.get(1)?,
        planting_id: to_id(row.get(2)?),
        garden_id: to_id(row.get(3)?),
        task_type,
        due_date,
        status,
        completed_at,
        details: row.get(8)?,
        related_plant_name: row.get(9)?,
        related_area_id: to_id(row.get(10)?),
        recurring_days,
        notification_sent: row.get(12)?,
        created_at: row.get::<_, String>(13)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(13, Type::Text, Box::new(e))
        })?,
    })
}

/// Inserts a pending task and returns it as stored.
pub(super) fn insert_task(conn: &Connection, draft: NewTask, now: Timestamp) -> Result<Task> {
    conn.execute(
        INSERT_TASK_SQL,
        params![
            &draft.user_id,
            to_sql_id(draft.planting_id),
            to_sql_id(draft.garden_id),
            draft.task_type.as_str(),
            draft.due_date.to_string(),
            TaskStatus::Pending.as_str(),
            &draft.details,
            &draft.related_plant_name,
            to_sql_id(draft.related_area_id),
            draft.recurring_days.map(NonZeroU32::get),
            now.to_string()
        ],
    )
    .db_context("Failed to insert task")?;

    Ok(draft.into_task(to_id(conn.last_insert_rowid()), now))
}

fn query_tasks(
    conn: &Connection,
    calendar: DueCalendar,
    condition: &str,
    params: &[&dyn rusqlite::ToSql],
) -> Result<Vec<Task>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE {condition} ORDER BY due_date, id"
        ))
        .db_context("Failed to prepare task query")?;
    let tasks = stmt
        .query_map(params, |row| build_task_from_row(row, calendar))
        .db_context("Failed to query tasks")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read task rows")?;
    Ok(tasks)
}

fn load_task(conn: &Connection, calendar: DueCalendar, user_id: &str, id: u64) -> Result<Option<Task>> {
    conn.query_row(
        &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1 AND user_id = ?2"),
        params![to_sql_id(id), user_id],
        |row| build_task_from_row(row, calendar),
    )
    .optional()
    .db_context("Failed to query task")
}

impl super::Database {
    fn due_calendar(&self) -> DueCalendar<'_> {
        DueCalendar {
            today: self.today,
            time_zone: &self.time_zone,
        }
    }

    /// Retrieves a task by its ID.
    pub fn get_task(&self, user_id: &str, id: u64) -> Result<Option<Task>> {
        load_task(&self.connection, self.due_calendar(), user_id, id)
    }

    /// Every task owned by the user, by due date.
    pub fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>> {
        query_tasks(&self.connection, self.due_calendar(), "user_id = ?1", params![user_id])
    }

    /// Tasks generated from one planting, by due date.
    pub fn tasks_for_planting(&self, user_id: &str, planting_id: u64) -> Result<Vec<Task>> {
        query_tasks(
            &self.connection,
            self.due_calendar(),
            "user_id = ?1 AND planting_id = ?2",
            params![user_id, to_sql_id(planting_id)],
        )
    }

    /// Completes a task as decided by `plan`, inserting the planned
    /// successor in the same transaction.
    ///
    /// `plan` sees the stored task and either refuses (its error is
    /// returned unchanged and nothing is written) or returns what to write.
    pub fn complete_task<F>(&mut self, user_id: &str, id: u64, plan: F) -> Result<TaskCompletion>
    where
        F: FnOnce(&Task) -> Result<CompletionPlan>,
    {
        // Built from fields so the transaction can borrow the connection
        let calendar = DueCalendar {
            today: self.today,
            time_zone: &self.time_zone,
        };
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let task = load_task(&tx, calendar, user_id, id)?.ok_or(GardenError::TaskNotFound { id })?;
        let CompletionPlan {
            completed,
            successor,
        } = plan(&task)?;

        let completed_at = completed.completed_at.map(|ts| ts.to_string());
        let rows = tx
            .execute(
                COMPLETE_TASK_SQL,
                params![
                    TaskStatus::Completed.as_str(),
                    completed_at,
                    completed.due_date.to_string(),
                    to_sql_id(id),
                    user_id,
                    TaskStatus::Pending.as_str()
                ],
            )
            .db_context("Failed to complete task")?;
        if rows == 0 {
            return Err(GardenError::invalid_input("status")
                .with_reason(format!("Task {id} is already completed")));
        }

        let now = completed.completed_at.unwrap_or(task.created_at);
        let successor = successor
            .map(|draft| insert_task(&tx, draft, now))
            .transpose()?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(TaskCompletion {
            completed,
            successor,
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn pacific() -> TimeZone {
        TimeZone::fixed(jiff::tz::offset(-7))
    }

    #[test]
    fn test_due_date_plain_date() {
        assert_eq!(
            normalize_due_date(Some("2025-06-09"), date(2025, 1, 1), &pacific()),
            Ok(date(2025, 6, 9))
        );
    }

    #[test]
    fn test_due_date_timestamp_reduces_to_local_date() {
        let today = date(2025, 1, 1);
        assert_eq!(
            normalize_due_date(Some("2025-06-09T22:30:00-07:00"), today, &pacific()),
            Ok(date(2025, 6, 9))
        );
        // Early morning UTC is still the previous evening in Oregon
        assert_eq!(
            normalize_due_date(Some("2025-06-10T01:00:00Z"), today, &pacific()),
            Ok(date(2025, 6, 9))
        );
        assert_eq!(
            normalize_due_date(Some("2025-06-10T01:00:00Z"), today, &TimeZone::UTC),
            Ok(date(2025, 6, 10))
        );
    }

    #[test]
    fn test_missing_due_date_is_today() {
        assert_eq!(
            normalize_due_date(None, date(2025, 3, 3), &TimeZone::UTC),
            Ok(date(2025, 3, 3))
        );
    }

    #[test]
    fn test_garbage_due_date_is_rejected() {
        let err = normalize_due_date(Some("next tuesday"), date(2025, 3, 3), &TimeZone::UTC)
            .unwrap_err();
        assert!(err.contains("Invalid due date 'next tuesday'"));
    }
}
