pub mod error;
pub mod pricing;
pub mod record;
pub mod report;
pub mod repository;

pub use error::{ParkingError, ParkingResult};
pub use pricing::{PricingStrategy, PricingStrategyFactory};
pub use record::{ParkingRecord, RecordId};
pub use report::{Report, ReportLine};
pub use repository::ParkingRecordRepository;
