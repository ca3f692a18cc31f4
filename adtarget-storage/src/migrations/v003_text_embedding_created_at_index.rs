//! v003: index backing the newest-first scans and the purge.

use rusqlite::Connection;

use adtarget_core::errors::TargetingResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TargetingResult<()> {
    conn.execute_batch(
        "
        CREATE INDEX IF NOT EXISTS idx_text_embedding_events_created_at
            ON text_embedding_events(created_at DESC, id DESC);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
