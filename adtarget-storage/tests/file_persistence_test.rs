//! Integration test: state survives closing and reopening a file database.

use chrono::Utc;

use adtarget_core::config::StorageConfig;
use adtarget_core::models::{BanditArmStatistics, BanditArms, TextEmbeddingEvent};
use adtarget_core::traits::{IBanditStore, ITextEmbeddingEventStore};
use adtarget_storage::migrations::LATEST_VERSION;
use adtarget_storage::pool::pragmas::verify_wal_mode;
use adtarget_storage::StorageEngine;

#[test]
fn state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("adtarget.db");

    {
        let engine = StorageEngine::open(&path).unwrap();
        let mut arms = BanditArms::new();
        arms.insert("sports".into(), BanditArmStatistics { pulls: 4, reward_sum: 2.0 });
        engine.save_bandit_arms(&arms).unwrap();
        engine
            .insert_text_embedding_event(&TextEmbeddingEvent {
                created_at: Utc::now(),
                locale: "de-DE".into(),
                hashed_text_base64: "abc=".into(),
                embedding: vec![0.25; 8],
            })
            .unwrap();
    }

    let engine = StorageEngine::open(&path).unwrap();
    assert_eq!(engine.load_bandit_arms().unwrap()["sports"].pulls, 4);
    let events = engine.get_text_embedding_events().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].embedding, vec![0.25; 8]);
}

#[test]
fn reopen_does_not_rerun_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        db_path: dir.path().join("adtarget.db").display().to_string(),
        ..Default::default()
    };

    let first = StorageEngine::open_with_config(&config).unwrap();
    assert_eq!(first.schema_version().unwrap(), LATEST_VERSION);
    drop(first);

    let second = StorageEngine::open_with_config(&config).unwrap();
    let applied: i64 = second
        .with_conn(|conn| {
            Ok(conn
                .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
                .unwrap())
        })
        .unwrap();
    assert_eq!(applied, i64::from(LATEST_VERSION));
}

#[test]
fn file_database_uses_wal() {
    let dir = tempfile::tempdir().unwrap();
    let engine = StorageEngine::open(&dir.path().join("wal.db")).unwrap();
    assert!(engine.with_conn(verify_wal_mode).unwrap());
}
