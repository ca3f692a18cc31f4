//! v001: client_state key/value table.

use rusqlite::Connection;

use adtarget_core::errors::TargetingResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TargetingResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS client_state (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
