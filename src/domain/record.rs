// src/domain/record.rs
use chrono::{NaiveDateTime, Utc};

use crate::domain::error::{ParkingError, ParkingResult};

/// Storage-assigned identity of a record.
pub type RecordId = i64;

/// One parking session, from entry to exit.
///
/// Exit time and total cost only ever change together, through [`ParkingRecord::mark_exit`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingRecord {
    id: Option<RecordId>,
    plate: String,
    vehicle_type: String,
    entry_time: NaiveDateTime,
    exit: Option<(NaiveDateTime, f64)>,
}

impl ParkingRecord {
    /// Start a new session at the current instant.
    pub fn create_entry(plate: &str, vehicle_type: &str) -> Self {
        Self::create_entry_at(plate, vehicle_type, Utc::now().naive_utc())
    }

    /// Start a new session at `entry_time`.
    ///
    /// Plate is uppercased and vehicle type lowercased. Neither is validated here;
    /// the vehicle type is only checked when the session is billed.
    pub fn create_entry_at(plate: &str, vehicle_type: &str, entry_time: NaiveDateTime) -> Self {
        Self {
            id: None,
            plate: plate.to_uppercase(),
            vehicle_type: vehicle_type.to_lowercase(),
            entry_time,
            exit: None,
        }
    }

    /// Rebuild a record from stored values, as-is.
    /// Fails when only one of exit time and total cost is present.
    pub fn reconstitute(
        id: RecordId,
        plate: String,
        vehicle_type: String,
        entry_time: NaiveDateTime,
        exit_time: Option<NaiveDateTime>,
        total_cost: Option<f64>,
    ) -> ParkingResult<Self> {
        let exit = match (exit_time, total_cost) {
            (Some(at), Some(cost)) => Some((at, cost)),
            (None, None) => None,
            _ => {
                return Err(ParkingError::InvariantViolation(format!(
                    "Parking record {id} has only one of exit time and total cost."
                )))
            }
        };

        Ok(Self {
            id: Some(id),
            plate,
            vehicle_type,
            entry_time,
            exit,
        })
    }

    /// Close the session. Fails if it was already closed.
    pub fn mark_exit(&mut self, exit_time: NaiveDateTime, total_cost: f64) -> ParkingResult<()> {
        if self.exit.is_some() {
            return Err(ParkingError::InvariantViolation(format!(
                "The parking record for plate {} has already exited.",
                self.plate
            )));
        }

        self.exit = Some((exit_time, total_cost));
        Ok(())
    }

    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }

    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    pub fn entry_time(&self) -> NaiveDateTime {
        self.entry_time
    }

    pub fn exit_time(&self) -> Option<NaiveDateTime> {
        self.exit.map(|(at, _)| at)
    }

    pub fn total_cost(&self) -> Option<f64> {
        self.exit.map(|(_, cost)| cost)
    }

    pub fn is_active(&self) -> bool {
        self.exit.is_none()
    }

    /// Same record carrying the identity storage just assigned.
    #[cfg(test)]
    pub(crate) fn with_id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }
}
