//! Planting CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, Connection, OptionalExtension};

use super::{garden_queries::garden_exists, task_queries::insert_task, to_id, to_sql_id};
use crate::{
    error::{DatabaseResultExt, GardenError, Result},
    models::{
        NewPlanting, NewTask, Planting, PlantingChanges, PlantingCreated, PlantingDeleted,
        PlantingFilter, PlantingStatus,
    },
};

const PLANTING_COLUMNS: &str = "id, user_id, garden_id, area_id, plant_id, quantity, date_planted, location_notes, status, created_at";
const INSERT_PLANTING_SQL: &str = "INSERT INTO plantings (user_id, garden_id, area_id, plant_id, quantity, date_planted, location_notes, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const CHECK_AREA_IN_GARDEN_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM areas WHERE id = ?1 AND garden_id = ?2)";
const UPDATE_PLANTING_SQL: &str = "UPDATE plantings SET quantity = ?1, location_notes = ?2, status = ?3 WHERE id = ?4 AND user_id = ?5";
const SELECT_PLANTING_TASK_IDS_SQL: &str =
    "SELECT id FROM tasks WHERE planting_id = ?1 AND user_id = ?2 ORDER BY id";
const DELETE_PLANTING_TASKS_SQL: &str = "DELETE FROM tasks WHERE planting_id = ?1 AND user_id = ?2";
const DELETE_PLANTING_SQL: &str = "DELETE FROM plantings WHERE id = ?1 AND user_id = ?2";

fn build_planting_from_row(row: &rusqlite::Row) -> rusqlite::Result<Planting> {
    let status_str: String = row.get(8)?;
    let status = status_str.parse::<PlantingStatus>().map_err(|reason| {
        rusqlite::Error::FromSqlConversionFailure(8, Type::Text, reason.into())
    })?;

    let quantity: i64 = row.get(5)?;
    let quantity = u32::try_from(quantity)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Integer, Box::new(e)))?;

    Ok(Planting {
        id: to_id(row.get(0)?),
        user_id: row.get(1)?,
        garden_id: to_id(row.get(2)?),
        area_id: to_id(row.get(3)?),
        plant_id: row.get(4)?,
        quantity,
        date_planted: row.get::<_, String>(6)?.parse::<Date>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
        })?,
        location_notes: row.get(7)?,
        status,
        created_at: row.get::<_, String>(9)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(e))
        })?,
    })
}

fn load_planting(conn: &Connection, user_id: &str, id: u64) -> Result<Option<Planting>> {
    conn.query_row(
        &format!("SELECT {PLANTING_COLUMNS} FROM plantings WHERE id = ?1 AND user_id = ?2"),
        params![to_sql_id(id), user_id],
        build_planting_from_row,
    )
    .optional()
    .db_context("Failed to query planting")
}

impl super::Database {
    /// Stores a planting and the tasks `generate` derives from it.
    ///
    /// Both are written in one transaction: if generation or any insert
    /// fails, nothing is stored.
    ///
    /// # Errors
    ///
    /// * `GardenError::GardenNotFound` - the garden is not the user's
    /// * `GardenError::InvalidInput` - the area is not part of the garden
    pub fn create_planting<F>(
        &mut self,
        planting: NewPlanting,
        now: Timestamp,
        generate: F,
    ) -> Result<PlantingCreated>
    where
        F: FnOnce(&Planting) -> Result<Vec<NewTask>>,
    {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !garden_exists(&tx, &planting.user_id, planting.garden_id)? {
            return Err(GardenError::GardenNotFound {
                id: planting.garden_id,
            });
        }

        let area_in_garden: bool = tx
            .query_row(
                CHECK_AREA_IN_GARDEN_SQL,
                params![to_sql_id(planting.area_id), to_sql_id(planting.garden_id)],
                |row| row.get(0),
            )
            .db_context("Failed to check area")?;
        if !area_in_garden {
            return Err(GardenError::invalid_input("area_id").with_reason(format!(
                "Area {} is not part of garden {}",
                planting.area_id, planting.garden_id
            )));
        }

        tx.execute(
            INSERT_PLANTING_SQL,
            params![
                &planting.user_id,
                to_sql_id(planting.garden_id),
                to_sql_id(planting.area_id),
                &planting.plant_id,
                planting.quantity,
                planting.date_planted.to_string(),
                planting.location_notes.as_deref(),
                PlantingStatus::Active.as_str(),
                now.to_string()
            ],
        )
        .db_context("Failed to insert planting")?;

        let planting = planting.into_planting(to_id(tx.last_insert_rowid()), now);

        let tasks = generate(&planting)?
            .into_iter()
            .map(|draft| insert_task(&tx, draft, now))
            .collect::<Result<Vec<_>>>()?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(PlantingCreated { planting, tasks })
    }

    /// Retrieves a planting by its ID.
    pub fn get_planting(&self, user_id: &str, id: u64) -> Result<Option<Planting>> {
        load_planting(&self.connection, user_id, id)
    }

    /// Lists the user's plantings, most recently planted first.
    pub fn list_plantings(&self, user_id: &str, filter: &PlantingFilter) -> Result<Vec<Planting>> {
        let mut query = format!("SELECT {PLANTING_COLUMNS} FROM plantings WHERE user_id = ?");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(user_id.to_string())];

        if let Some(garden_id) = filter.garden_id {
            query.push_str(" AND garden_id = ?");
            params_vec.push(Box::new(to_sql_id(garden_id)));
        }
        if let Some(area_id) = filter.area_id {
            query.push_str(" AND area_id = ?");
            params_vec.push(Box::new(to_sql_id(area_id)));
        }
        if let Some(status) = filter.status {
            query.push_str(" AND status = ?");
            params_vec.push(Box::new(status.as_str()));
        }
        query.push_str(" ORDER BY date_planted DESC, id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare planting query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();
        let plantings = stmt
            .query_map(&params_refs[..], build_planting_from_row)
            .db_context("Failed to query plantings")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read planting rows")?;
        Ok(plantings)
    }

    /// Applies `changes` to a planting and returns the stored result.
    ///
    /// Task details already generated for the planting are left as they
    /// are.
    pub fn update_planting(
        &mut self,
        user_id: &str,
        id: u64,
        changes: &PlantingChanges,
    ) -> Result<Planting> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut planting =
            load_planting(&tx, user_id, id)?.ok_or(GardenError::PlantingNotFound { id })?;

        if let Some(quantity) = changes.quantity {
            planting.quantity = quantity;
        }
        if let Some(notes) = &changes.location_notes {
            planting.location_notes = Some(notes.clone());
        }
        if let Some(status) = changes.status {
            planting.status = status;
        }

        tx.execute(
            UPDATE_PLANTING_SQL,
            params![
                planting.quantity,
                planting.location_notes.as_deref(),
                planting.status.as_str(),
                to_sql_id(id),
                user_id
            ],
        )
        .db_context("Failed to update planting")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(planting)
    }

    /// Deletes a planting and every task generated from it.
    pub fn delete_planting(&mut self, user_id: &str, id: u64) -> Result<PlantingDeleted> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let planting =
            load_planting(&tx, user_id, id)?.ok_or(GardenError::PlantingNotFound { id })?;
        let sql_id = to_sql_id(id);

        let removed_task_ids = {
            let mut stmt = tx
                .prepare(SELECT_PLANTING_TASK_IDS_SQL)
                .db_context("Failed to prepare task query")?;
            let ids = stmt
                .query_map(params![sql_id, user_id], |row| row.get::<_, i64>(0).map(to_id))
                .db_context("Failed to query planting tasks")?
                .collect::<rusqlite::Result<Vec<_>>>()
                .db_context("Failed to read task IDs")?;
            ids
        };

        tx.execute(DELETE_PLANTING_TASKS_SQL, params![sql_id, user_id])
            .db_context("Failed to delete planting tasks")?;
        tx.execute(DELETE_PLANTING_SQL, params![sql_id, user_id])
            .db_context("Failed to delete planting")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(PlantingDeleted {
            planting,
            removed_task_ids,
        })
    }
}
