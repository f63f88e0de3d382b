//! Garden and area CRUD operations.

use jiff::Timestamp;
use rusqlite::{params, types::Type, Connection, OptionalExtension};

use super::{to_id, to_sql_id};
use crate::{
    error::{DatabaseResultExt, GardenError, Result},
    models::{Area, AreaType, DataCleared, Garden, GardenDeleted},
    params::{AreaSpec, CreateGarden},
};

const INSERT_GARDEN_SQL: &str =
    "INSERT INTO gardens (user_id, name, location, created_at) VALUES (?1, ?2, ?3, ?4)";
const INSERT_AREA_SQL: &str = "INSERT INTO areas (garden_id, name, area_type, length_ft, width_ft) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_GARDEN_SQL: &str =
    "SELECT id, user_id, name, location, created_at FROM gardens WHERE id = ?1 AND user_id = ?2";
const SELECT_GARDENS_SQL: &str =
    "SELECT id, user_id, name, location, created_at FROM gardens WHERE user_id = ?1 ORDER BY id";
const SELECT_AREAS_SQL: &str = "SELECT id, garden_id, name, area_type, length_ft, width_ft FROM areas WHERE garden_id = ?1 ORDER BY id";
const CHECK_GARDEN_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM gardens WHERE id = ?1 AND user_id = ?2)";
const RENAME_GARDEN_SQL: &str = "UPDATE gardens SET name = ?1 WHERE id = ?2 AND user_id = ?3";
const DELETE_GARDEN_TASKS_SQL: &str = "DELETE FROM tasks WHERE user_id = ?1 AND planting_id IN (SELECT id FROM plantings WHERE garden_id = ?2)";
const DELETE_GARDEN_PLANTINGS_SQL: &str =
    "DELETE FROM plantings WHERE user_id = ?1 AND garden_id = ?2";
const DELETE_GARDEN_AREAS_SQL: &str = "DELETE FROM areas WHERE garden_id = ?1";
const DELETE_GARDEN_SQL: &str = "DELETE FROM gardens WHERE id = ?1 AND user_id = ?2";
const DELETE_USER_TASKS_SQL: &str = "DELETE FROM tasks WHERE user_id = ?1";
const DELETE_USER_PLANTINGS_SQL: &str = "DELETE FROM plantings WHERE user_id = ?1";
const DELETE_USER_AREAS_SQL: &str =
    "DELETE FROM areas WHERE garden_id IN (SELECT id FROM gardens WHERE user_id = ?1)";
const DELETE_USER_GARDENS_SQL: &str = "DELETE FROM gardens WHERE user_id = ?1";

fn build_garden_from_row(row: &rusqlite::Row) -> rusqlite::Result<Garden> {
    Ok(Garden {
        id: to_id(row.get(0)?),
        user_id: row.get(1)?,
        name: row.get(2)?,
        location: row.get(3)?,
        created_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
        })?,
        areas: Vec::new(),
    })
}

fn build_area_from_row(row: &rusqlite::Row) -> rusqlite::Result<Area> {
    let type_str: String = row.get(3)?;
    let area_type = type_str.parse::<AreaType>().map_err(|reason| {
        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, reason.into())
    })?;

    Ok(Area {
        id: to_id(row.get(0)?),
        garden_id: to_id(row.get(1)?),
        name: row.get(2)?,
        area_type,
        length_ft: row.get(4)?,
        width_ft: row.get(5)?,
    })
}

fn load_areas(conn: &Connection, garden_id: u64) -> Result<Vec<Area>> {
    let mut stmt = conn
        .prepare(SELECT_AREAS_SQL)
        .db_context("Failed to prepare area query")?;
    let areas = stmt
        .query_map(params![to_sql_id(garden_id)], build_area_from_row)
        .db_context("Failed to query areas")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read area rows")?;
    Ok(areas)
}

/// Loads a garden with its areas.
fn load_garden(conn: &Connection, user_id: &str, id: u64) -> Result<Option<Garden>> {
    let garden = conn
        .query_row(SELECT_GARDEN_SQL, params![to_sql_id(id), user_id], build_garden_from_row)
        .optional()
        .db_context("Failed to query garden")?;

    match garden {
        Some(mut garden) => {
            garden.areas = load_areas(conn, garden.id)?;
            Ok(Some(garden))
        }
        None => Ok(None),
    }
}

fn insert_area(conn: &Connection, garden_id: u64, spec: &AreaSpec, area_type: AreaType) -> Result<Area> {
    let name = spec.name.trim();
    conn.execute(
        INSERT_AREA_SQL,
        params![
            to_sql_id(garden_id),
            name,
            area_type.as_str(),
            spec.length_ft,
            spec.width_ft
        ],
    )
    .db_context("Failed to insert area")?;

    Ok(Area {
        id: to_id(conn.last_insert_rowid()),
        garden_id,
        name: name.to_string(),
        area_type,
        length_ft: spec.length_ft,
        width_ft: spec.width_ft,
    })
}

/// Whether `user_id` owns the garden `id`.
pub(super) fn garden_exists(conn: &Connection, user_id: &str, id: u64) -> Result<bool> {
    conn.query_row(CHECK_GARDEN_EXISTS_SQL, params![to_sql_id(id), user_id], |row| {
        row.get(0)
    })
    .db_context("Failed to check garden existence")
}

impl super::Database {
    /// Creates a garden and its areas in one transaction.
    ///
    /// `area_types` holds the validated type of each entry in
    /// `params.areas`, in the same order.
    pub fn create_garden(
        &mut self,
        user_id: &str,
        params: &CreateGarden,
        area_types: &[AreaType],
        now: Timestamp,
    ) -> Result<Garden> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let name = params.name.trim();
        tx.execute(
            INSERT_GARDEN_SQL,
            params![user_id, name, params.location.as_deref(), now.to_string()],
        )
        .db_context("Failed to insert garden")?;
        let id = to_id(tx.last_insert_rowid());

        let areas = params
            .areas
            .iter()
            .zip(area_types)
            .map(|(spec, &area_type)| insert_area(&tx, id, spec, area_type))
            .collect::<Result<Vec<_>>>()?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Garden {
            id,
            user_id: user_id.to_string(),
            name: name.to_string(),
            location: params.location.clone(),
            created_at: now,
            areas,
        })
    }

    /// Retrieves a garden with its areas.
    pub fn get_garden(&self, user_id: &str, id: u64) -> Result<Option<Garden>> {
        load_garden(&self.connection, user_id, id)
    }

    /// Lists the user's gardens, oldest first.
    pub fn list_gardens(&self, user_id: &str) -> Result<Vec<Garden>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_GARDENS_SQL)
            .db_context("Failed to prepare garden query")?;
        let mut gardens = stmt
            .query_map(params![user_id], build_garden_from_row)
            .db_context("Failed to query gardens")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read garden rows")?;

        for garden in &mut gardens {
            garden.areas = load_areas(&self.connection, garden.id)?;
        }
        Ok(gardens)
    }

    pub fn rename_garden(&mut self, user_id: &str, id: u64, name: &str) -> Result<Garden> {
        let rows = self
            .connection
            .execute(RENAME_GARDEN_SQL, params![name.trim(), to_sql_id(id), user_id])
            .db_context("Failed to rename garden")?;
        if rows == 0 {
            return Err(GardenError::GardenNotFound { id });
        }

        load_garden(&self.connection, user_id, id)?.ok_or(GardenError::GardenNotFound { id })
    }

    /// Adds an area to one of the user's gardens.
    pub fn add_area(
        &mut self,
        user_id: &str,
        garden_id: u64,
        spec: &AreaSpec,
        area_type: AreaType,
    ) -> Result<Area> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !garden_exists(&tx, user_id, garden_id)? {
            return Err(GardenError::GardenNotFound { id: garden_id });
        }
        let area = insert_area(&tx, garden_id, spec, area_type)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(area)
    }

    /// Deletes a garden together with its areas, plantings and tasks.
    pub fn delete_garden(&mut self, user_id: &str, id: u64) -> Result<GardenDeleted> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let garden = load_garden(&tx, user_id, id)?.ok_or(GardenError::GardenNotFound { id })?;
        let sql_id = to_sql_id(id);

        let tasks_removed = tx
            .execute(DELETE_GARDEN_TASKS_SQL, params![user_id, sql_id])
            .db_context("Failed to delete garden tasks")?;
        let plantings_removed = tx
            .execute(DELETE_GARDEN_PLANTINGS_SQL, params![user_id, sql_id])
            .db_context("Failed to delete garden plantings")?;
        tx.execute(DELETE_GARDEN_AREAS_SQL, params![sql_id])
            .db_context("Failed to delete garden areas")?;
        tx.execute(DELETE_GARDEN_SQL, params![sql_id, user_id])
            .db_context("Failed to delete garden")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(GardenDeleted {
            garden,
            plantings_removed,
            tasks_removed,
        })
    }

    /// Removes every garden, planting and task owned by `user_id`.
    pub fn clear_user_data(&mut self, user_id: &str) -> Result<DataCleared> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let tasks = tx
            .execute(DELETE_USER_TASKS_SQL, params![user_id])
            .db_context("Failed to delete tasks")?;
        let plantings = tx
            .execute(DELETE_USER_PLANTINGS_SQL, params![user_id])
            .db_context("Failed to delete plantings")?;
        tx.execute(DELETE_USER_AREAS_SQL, params![user_id])
            .db_context("Failed to delete areas")?;
        let gardens = tx
            .execute(DELETE_USER_GARDENS_SQL, params![user_id])
            .db_context("Failed to delete gardens")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(DataCleared {
            gardens,
            plantings,
            tasks,
        })
    }
}
