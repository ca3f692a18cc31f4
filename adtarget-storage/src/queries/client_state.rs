//! JSON blobs keyed by client-state name.

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use adtarget_core::errors::{StorageError, TargetingError, TargetingResult};

use crate::to_storage_err;

/// Load and decode a client-state value. Missing keys yield `None`.
pub fn get_state<T: DeserializeOwned>(conn: &Connection, key: &str) -> TargetingResult<Option<T>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM client_state WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    raw.map(|json| {
        serde_json::from_str(&json).map_err(|e| {
            TargetingError::from(StorageError::MalformedState {
                key: key.to_string(),
                reason: e.to_string(),
            })
        })
    })
    .transpose()
}

/// Encode and upsert a client-state value.
pub fn put_state<T: Serialize>(conn: &Connection, key: &str, value: &T) -> TargetingResult<()> {
    let json = serde_json::to_string(value)?;
    conn.execute(
        "INSERT INTO client_state (key, value, updated_at)
         VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, json],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Remove a client-state value. Returns whether a row existed.
pub fn delete_state(conn: &Connection, key: &str) -> TargetingResult<bool> {
    let deleted = conn
        .execute("DELETE FROM client_state WHERE key = ?1", params![key])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(deleted > 0)
}
