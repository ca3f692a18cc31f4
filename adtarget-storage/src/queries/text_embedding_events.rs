//! Insert, newest-first scan, and purge for `text_embedding_events`.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};

use adtarget_core::errors::{StorageError, TargetingError, TargetingResult};
use adtarget_core::models::TextEmbeddingEvent;

use crate::to_storage_err;

pub fn insert_event(conn: &Connection, event: &TextEmbeddingEvent) -> TargetingResult<()> {
    conn.execute(
        "INSERT INTO text_embedding_events (created_at, locale, hashed_text_base64, embedding)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            format_timestamp(&event.created_at),
            event.locale,
            event.hashed_text_base64,
            encode_embedding(&event.embedding),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// All events ordered by `created_at` descending, newest insert first on ties.
pub fn get_all_events(conn: &Connection) -> TargetingResult<Vec<TextEmbeddingEvent>> {
    let mut stmt = conn
        .prepare(
            "SELECT created_at, locale, hashed_text_base64, embedding
             FROM text_embedding_events
             ORDER BY created_at DESC, id DESC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Vec<u8>>(3)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut events = Vec::new();
    for row in rows {
        let (created_at, locale, hashed_text_base64, blob) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        events.push(TextEmbeddingEvent {
            created_at: parse_timestamp(&created_at)?,
            locale,
            hashed_text_base64,
            embedding: decode_embedding(&blob)?,
        });
    }
    Ok(events)
}

/// Delete every event except the `keep` most recent. Returns rows deleted.
pub fn delete_all_except_most_recent(conn: &Connection, keep: usize) -> TargetingResult<usize> {
    let keep = i64::try_from(keep).unwrap_or(i64::MAX);
    let deleted = conn
        .execute(
            "DELETE FROM text_embedding_events
             WHERE id NOT IN (
                 SELECT id FROM text_embedding_events
                 ORDER BY created_at DESC, id DESC
                 LIMIT ?1
             )",
            params![keep],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(deleted)
}

pub fn count_events(conn: &Connection) -> TargetingResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM text_embedding_events", [], |row| {
            row.get(0)
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

// Fixed-width microsecond timestamps sort correctly as text.
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> TargetingResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            TargetingError::from(StorageError::MalformedState {
                key: "text_embedding_events.created_at".to_string(),
                reason: e.to_string(),
            })
        })
}

fn encode_embedding(embedding: &[f32]) -> Vec<u8> {
    embedding.iter().flat_map(|f| f.to_le_bytes()).collect()
}

fn decode_embedding(bytes: &[u8]) -> TargetingResult<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        return Err(StorageError::MalformedState {
            key: "text_embedding_events.embedding".to_string(),
            reason: format!("blob length {} is not a multiple of 4", bytes.len()),
        }
        .into());
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedding_blob_roundtrip() {
        let embedding = vec![1.0f32, 2.5, -3.7, 0.0];
        let decoded = decode_embedding(&encode_embedding(&embedding)).unwrap();
        assert_eq!(decoded, embedding);
    }

    #[test]
    fn truncated_blob_is_rejected() {
        assert!(decode_embedding(&[0, 0, 0]).is_err());
    }
}
