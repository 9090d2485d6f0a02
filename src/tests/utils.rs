use crate::db::{init_db, Database, SqliteParkingRecordRepository};
use crate::domain::PricingStrategyFactory;
use crate::router::AppState;
use crate::service::ParkingService;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Initialize a fresh test DB using the production schema, in its own file.
pub fn init_test_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "parking_test_{}_{}_{}.sqlite",
        std::process::id(),
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        DB_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

pub fn test_state(purge_on_exit: bool) -> AppState {
    AppState {
        service: ParkingService::new(
            SqliteParkingRecordRepository::new(init_test_db()),
            PricingStrategyFactory::new(),
        ),
        purge_on_exit,
    }
}
