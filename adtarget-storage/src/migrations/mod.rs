//! Schema migrations.
//!
//! Migrations are an ordered list of `(version, migrate)` pairs. Each one runs
//! in its own transaction when the stored version is below its number, and the
//! new version is recorded in `schema_version` before commit.

mod v001_client_state;
mod v002_text_embedding_events;
mod v003_text_embedding_created_at_index;

use rusqlite::{params, Connection};
use tracing::info;

use adtarget_core::errors::{StorageError, TargetingResult};

use crate::to_storage_err;

type Migration = fn(&Connection) -> TargetingResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_client_state::migrate),
    (2, v002_text_embedding_events::migrate),
    (3, v003_text_embedding_created_at_index::migrate),
];

/// Highest schema version this build knows about.
pub const LATEST_VERSION: u32 = 3;

/// Current schema version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> TargetingResult<u32> {
    ensure_version_table(conn)?;
    let version: Option<u32> = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(version.unwrap_or(0))
}

/// Apply every migration newer than the stored version. Returns the number
/// of migrations applied.
pub fn run_migrations(conn: &Connection) -> TargetingResult<usize> {
    let current = current_version(conn)?;
    let mut applied = 0;

    for &(version, migrate) in MIGRATIONS {
        if current >= version {
            continue;
        }
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| to_storage_err(e.to_string()))?;
        migrate(&tx).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        tx.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            params![version],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
        applied += 1;
        info!(version, "applied schema migration");
    }

    Ok(applied)
}

fn ensure_version_table(conn: &Connection) -> TargetingResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
