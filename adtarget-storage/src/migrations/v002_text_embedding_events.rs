//! v002: text_embedding_events.

use rusqlite::Connection;

use adtarget_core::errors::TargetingResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> TargetingResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS text_embedding_events (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at          TEXT NOT NULL,
            locale              TEXT NOT NULL,
            hashed_text_base64  TEXT NOT NULL,
            embedding           BLOB NOT NULL
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
