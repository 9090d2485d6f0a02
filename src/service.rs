// src/service.rs
use chrono::{NaiveDateTime, Utc};
use tracing::{info, warn};

use crate::domain::{
    ParkingError, ParkingRecord, ParkingRecordRepository, ParkingResult, PricingStrategy,
    PricingStrategyFactory, Report,
};

/// Entry, exit and billing report over a record repository.
pub struct ParkingService<R> {
    repository: R,
    pricing: PricingStrategyFactory,
}

impl<R: ParkingRecordRepository> ParkingService<R> {
    pub fn new(repository: R, pricing: PricingStrategyFactory) -> Self {
        Self {
            repository,
            pricing,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Vehicle types that can be billed, in display order.
    pub fn vehicle_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pricing.vehicle_types()
    }

    pub fn register_entry(&self, plate: &str, vehicle_type: &str) -> ParkingResult<()> {
        self.register_entry_at(plate, vehicle_type, Utc::now().naive_utc())
    }

    /// Open a session for `plate` at `now`.
    /// Fails with `Conflict` while the plate has an active session.
    pub fn register_entry_at(
        &self,
        plate: &str,
        vehicle_type: &str,
        now: NaiveDateTime,
    ) -> ParkingResult<()> {
        if self.repository.find_active_by_plate(plate)?.is_some() {
            let plate = plate.to_uppercase();
            warn!(%plate, "entry rejected: already parked");
            return Err(ParkingError::Conflict(format!(
                "Vehicle with plate {plate} is already parked."
            )));
        }

        let record = ParkingRecord::create_entry_at(plate, vehicle_type, now);
        let id = self.repository.save_entry(&record)?;

        info!(id, plate = record.plate(), vehicle_type = record.vehicle_type(), "vehicle entered");
        Ok(())
    }

    pub fn register_exit(&self, plate: &str) -> ParkingResult<ParkingRecord> {
        self.register_exit_at(plate, Utc::now().naive_utc())
    }

    /// Close the active session for `plate` at `now`, bill it and persist the exit.
    pub fn register_exit_at(&self, plate: &str, now: NaiveDateTime) -> ParkingResult<ParkingRecord> {
        let Some(mut record) = self.repository.find_active_by_plate(plate)? else {
            let plate = plate.to_uppercase();
            warn!(%plate, "exit rejected: not parked");
            return Err(ParkingError::NotFound(format!(
                "Vehicle with plate {plate} is not parked."
            )));
        };

        let strategy = self.pricing.create_strategy(record.vehicle_type())?;
        let cost = strategy.calculate_cost(record.entry_time(), now);

        record.mark_exit(now, cost)?;
        self.repository.update_exit(&record)?;

        info!(
            id = record.id(),
            plate = record.plate(),
            cost,
            "vehicle exited"
        );
        Ok(record)
    }

    /// Per-type vehicle counts and billed totals over every stored record.
    ///
    /// Active sessions count as vehicles but add nothing to the total.
    /// Records of a type the pricing table does not know are left out.
    pub fn generate_report(&self) -> ParkingResult<Report> {
        let mut report = Report::with_types(self.pricing.vehicle_types());

        for record in self.repository.find_all()? {
            if !report.add(&record) {
                warn!(
                    id = record.id(),
                    vehicle_type = record.vehicle_type(),
                    "unknown vehicle type left out of report"
                );
            }
        }

        Ok(report)
    }
}
