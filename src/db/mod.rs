pub mod connection;
pub mod parking_records;

pub use connection::{init_db, Database, DbError};
pub use parking_records::SqliteParkingRecordRepository;
