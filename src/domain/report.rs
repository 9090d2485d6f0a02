// src/domain/report.rs
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::record::ParkingRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct ReportLine {
    pub total_vehicles: u64,
    pub total_cost: f64,
}

/// Billing totals per vehicle type, in a fixed order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    lines: Vec<(String, ReportLine)>,
}

impl Report {
    /// Zeroed report over the given vehicle types.
    pub fn with_types<'a>(vehicle_types: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            lines: vehicle_types
                .into_iter()
                .map(|t| (t.to_string(), ReportLine::default()))
                .collect(),
        }
    }

    /// Count the record under its vehicle type and add its cost if it has one.
    ///
    /// Returns false (and changes nothing) when the type is not part of the report.
    pub fn add(&mut self, record: &ParkingRecord) -> bool {
        let vehicle_type = record.vehicle_type().to_lowercase();

        let Some((_, line)) = self.lines.iter_mut().find(|(t, _)| *t == vehicle_type) else {
            return false;
        };

        line.total_vehicles += 1;
        if let Some(cost) = record.total_cost() {
            line.total_cost += cost;
        }
        true
    }

    pub fn get(&self, vehicle_type: &str) -> Option<&ReportLine> {
        self.lines
            .iter()
            .find(|(t, _)| t == vehicle_type)
            .map(|(_, line)| line)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReportLine)> {
        self.lines.iter().map(|(t, line)| (t.as_str(), line))
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.lines.len()))?;
        for (vehicle_type, line) in &self.lines {
            map.serialize_entry(vehicle_type, line)?;
        }
        map.end()
    }
}
