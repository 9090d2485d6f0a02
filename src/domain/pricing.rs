// src/domain/pricing.rs
use chrono::{Duration, NaiveDateTime};

use crate::domain::error::{ParkingError, ParkingResult};

const SECONDS_PER_HOUR: i64 = 3600;

/// Type-specific billing policy.
pub trait PricingStrategy {
    fn hourly_rate(&self) -> f64;

    /// Bill every started hour at the hourly rate.
    ///
    /// The caller guarantees `exit_time >= entry_time`.
    fn calculate_cost(&self, entry_time: NaiveDateTime, exit_time: NaiveDateTime) -> f64 {
        billable_hours(entry_time, exit_time) as f64 * self.hourly_rate()
    }
}

/// Started hours between two instants: any partial hour counts as a full one.
/// Same-instant bills zero. A fraction of a second counts as a started second.
pub fn billable_hours(entry_time: NaiveDateTime, exit_time: NaiveDateTime) -> i64 {
    let elapsed = exit_time - entry_time;
    if elapsed <= Duration::zero() {
        return 0;
    }

    let whole = elapsed.num_seconds();
    let seconds = whole + i64::from(elapsed > Duration::seconds(whole));
    (seconds + SECONDS_PER_HOUR - 1) / SECONDS_PER_HOUR
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CarPricing;

impl PricingStrategy for CarPricing {
    fn hourly_rate(&self) -> f64 {
        5.00
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MotorcyclePricing;

impl PricingStrategy for MotorcyclePricing {
    fn hourly_rate(&self) -> f64 {
        3.00
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TruckPricing;

impl PricingStrategy for TruckPricing {
    fn hourly_rate(&self) -> f64 {
        10.00
    }
}

type StrategyCtor = fn() -> Box<dyn PricingStrategy>;

fn car() -> Box<dyn PricingStrategy> {
    Box::new(CarPricing)
}

fn motorcycle() -> Box<dyn PricingStrategy> {
    Box::new(MotorcyclePricing)
}

fn truck() -> Box<dyn PricingStrategy> {
    Box::new(TruckPricing)
}

/// Vehicle type → strategy constructor. Order is the display order.
const STRATEGY_TABLE: &[(&str, StrategyCtor)] = &[
    ("car", car),
    ("motorcycle", motorcycle),
    ("truck", truck),
];

/// Resolves a vehicle type to its billing policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingStrategyFactory;

impl PricingStrategyFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_strategy(&self, vehicle_type: &str) -> ParkingResult<Box<dyn PricingStrategy>> {
        let normalized = vehicle_type.to_lowercase();

        STRATEGY_TABLE
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, ctor)| ctor())
            .ok_or_else(|| {
                ParkingError::InvalidInput(format!("Unknown vehicle type: {vehicle_type}"))
            })
    }

    /// Every vehicle type this factory can bill, in table order.
    pub fn vehicle_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        STRATEGY_TABLE.iter().map(|(name, _)| *name)
    }
}
