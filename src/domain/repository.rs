// src/domain/repository.rs
use crate::domain::error::ParkingResult;
use crate::domain::record::{ParkingRecord, RecordId};

/// Durable storage for parking records.
///
/// Implementations must make "no other active session for this plate" and
/// "record still active" hold atomically with the write that depends on them.
pub trait ParkingRecordRepository {
    /// Persist a new, active record and return the identity it was given.
    ///
    /// Fails with `Conflict` if the plate already has an active record.
    fn save_entry(&self, record: &ParkingRecord) -> ParkingResult<RecordId>;

    /// Persist the exit fields of a record that was active in storage.
    fn update_exit(&self, record: &ParkingRecord) -> ParkingResult<()>;

    fn delete(&self, id: RecordId) -> ParkingResult<()>;

    /// Plate comparison is case-insensitive (plates are stored uppercase).
    fn find_active_by_plate(&self, plate: &str) -> ParkingResult<Option<ParkingRecord>>;

    /// Newest entry first.
    fn find_all_active(&self) -> ParkingResult<Vec<ParkingRecord>>;

    /// Newest entry first.
    fn find_all(&self) -> ParkingResult<Vec<ParkingRecord>>;
}
