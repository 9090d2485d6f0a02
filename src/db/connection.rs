use rusqlite::Connection;
use std::cell::RefCell;
use std::fs;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to read schema file {path}: {source}")]
    Schema {
        path: String,
        source: std::io::Error,
    },

    #[error("connection slot unavailable on this thread")]
    ConnectionUnavailable,
}

// Thread-local connection slot, remembered together with the path it was opened for.
thread_local! {
    static DB_CONN: RefCell<Option<(String, Connection)>> = const { RefCell::new(None) };
}

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Provides this thread's connection to the closure, opening it on first use.
    pub fn with_conn<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Connection) -> Result<T, E>,
        E: From<DbError>,
    {
        DB_CONN
            .try_with(|cell| -> Result<T, E> {
                let mut slot = cell.borrow_mut();

                let stale = !matches!(slot.as_ref(), Some((path, _)) if *path == self.path);
                if stale {
                    let conn = Connection::open(&self.path).map_err(DbError::from)?;
                    conn.busy_timeout(BUSY_TIMEOUT).map_err(DbError::from)?;
                    *slot = Some((self.path.clone(), conn));
                }

                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(DbError::ConnectionUnavailable.into()),
                }
            })
            .map_err(|_| DbError::ConnectionUnavailable)?
    }
}

/// Initialize database from a SQL schema file
pub fn init_db(db: &Database, schema_path: &str) -> Result<(), DbError> {
    let schema_sql = fs::read_to_string(schema_path).map_err(|source| DbError::Schema {
        path: schema_path.to_string(),
        source,
    })?;

    db.with_conn(|conn| conn.execute_batch(&schema_sql).map_err(DbError::from))?;

    info!(db = db.path(), schema = schema_path, "database initialized");
    Ok(())
}
