//! Connection bootstrap and schema setup for SQLite.

use super::{DbError, DbResult};
use log::{debug, error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Opens the database file at `path`, creating it when absent.
///
/// The parent directory must already exist.
///
/// # Errors
/// - [`DbError::Open`] when the file cannot be opened or created.
/// - [`DbError::Sqlite`] when connection pragmas cannot be applied.
pub fn connect(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let conn = Connection::open(path).map_err(|source| {
        error!(
            "event=db_open module=db status=error duration_ms={} error_code=db_open_failed error={}",
            started_at.elapsed().as_millis(),
            source
        );
        DbError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;
    conn.busy_timeout(BUSY_TIMEOUT)?;

    debug!(
        "event=db_open module=db status=ok duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(conn)
}

/// Creates the `notes` table if it does not exist yet.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    let started_at = Instant::now();
    match conn.execute_batch(SCHEMA_SQL) {
        Ok(()) => {
            info!(
                "event=db_schema module=db status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=db_schema module=db status=error duration_ms={} error_code=db_schema_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}
