// src/db/parking_records.rs
use chrono::NaiveDateTime;
use rusqlite::{params, OptionalExtension, Row};
use tracing::info;

use crate::db::connection::{Database, DbError};
use crate::domain::{ParkingError, ParkingRecord, ParkingRecordRepository, ParkingResult, RecordId};

const SELECT_COLUMNS: &str = "select id, plate, vehicle_type, entry_time, exit_time, total_cost from parking_records";

impl From<DbError> for ParkingError {
    fn from(err: DbError) -> Self {
        ParkingError::Storage(err.to_string())
    }
}

/// Parking records stored in the `parking_records` table.
#[derive(Debug, Clone)]
pub struct SqliteParkingRecordRepository {
    db: Database,
}

impl SqliteParkingRecordRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn query_records(&self, sql: &str) -> ParkingResult<Vec<ParkingRecord>> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(sql).map_err(DbError::from)?;
            let rows = stmt.query_map([], hydrate).map_err(DbError::from)?;

            let mut out = Vec::new();
            for r in rows {
                out.push(r.map_err(DbError::from)??);
            }
            Ok(out)
        })
    }
}

/// Column decoding can fail in SQLite; the decoded values can still break record invariants.
fn hydrate(row: &Row<'_>) -> rusqlite::Result<ParkingResult<ParkingRecord>> {
    Ok(ParkingRecord::reconstitute(
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get::<_, NaiveDateTime>(3)?,
        row.get::<_, Option<NaiveDateTime>>(4)?,
        row.get::<_, Option<f64>>(5)?,
    ))
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl ParkingRecordRepository for SqliteParkingRecordRepository {
    fn save_entry(&self, record: &ParkingRecord) -> ParkingResult<RecordId> {
        self.db.with_conn(|conn| {
            let inserted = conn.execute(
                "insert into parking_records (plate, vehicle_type, entry_time) values (?, ?, ?)",
                params![record.plate(), record.vehicle_type(), record.entry_time()],
            );

            match inserted {
                Ok(_) => Ok(conn.last_insert_rowid()),
                // Lost a race with another entry for the same plate.
                Err(e) if is_unique_violation(&e) => Err(ParkingError::Conflict(format!(
                    "Vehicle with plate {} is already parked.",
                    record.plate()
                ))),
                Err(e) => Err(DbError::from(e).into()),
            }
        })
    }

    fn update_exit(&self, record: &ParkingRecord) -> ParkingResult<()> {
        let Some(id) = record.id() else {
            return Err(ParkingError::InvalidInput(
                "Cannot update a record without an id.".into(),
            ));
        };
        let (Some(exit_time), Some(total_cost)) = (record.exit_time(), record.total_cost()) else {
            return Err(ParkingError::InvalidInput(format!(
                "Record {id} has no exit to store."
            )));
        };

        let changed = self.db.with_conn(|conn| {
            conn.execute(
                "update parking_records
                 set exit_time = ?, total_cost = ?
                 where id = ? and exit_time is null",
                params![exit_time, total_cost, id],
            )
            .map_err(DbError::from)
        })?;

        if changed == 0 {
            return Err(ParkingError::InvariantViolation(format!(
                "The parking record for plate {} has already exited.",
                record.plate()
            )));
        }
        Ok(())
    }

    fn delete(&self, id: RecordId) -> ParkingResult<()> {
        let removed = self.db.with_conn(|conn| {
            conn.execute("delete from parking_records where id = ?", params![id])
                .map_err(DbError::from)
        })?;

        info!(id, removed, "parking record deleted");
        Ok(())
    }

    fn find_active_by_plate(&self, plate: &str) -> ParkingResult<Option<ParkingRecord>> {
        let sql = format!("{SELECT_COLUMNS} where plate = ? and exit_time is null limit 1");

        self.db.with_conn(|conn| {
            conn.query_row(&sql, params![plate.to_uppercase()], hydrate)
                .optional()
                .map_err(|e| ParkingError::from(DbError::from(e)))?
                .transpose()
        })
    }

    fn find_all_active(&self) -> ParkingResult<Vec<ParkingRecord>> {
        self.query_records(&format!(
            "{SELECT_COLUMNS} where exit_time is null order by entry_time desc, id desc"
        ))
    }

    fn find_all(&self) -> ParkingResult<Vec<ParkingRecord>> {
        self.query_records(&format!(
            "{SELECT_COLUMNS} order by entry_time desc, id desc"
        ))
    }
}
