//! StorageEngine: owns the connection, runs migrations on open, and
//! implements every store trait the models consume.

use std::path::Path;

use rusqlite::Connection;

use adtarget_core::config::StorageConfig;
use adtarget_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use adtarget_core::constants::state_keys;
use adtarget_core::errors::TargetingResult;
use adtarget_core::models::{
    BanditArms, ClassificationHistory, PurchaseIntentSignalHistory, TextEmbeddingEvent,
};
use adtarget_core::traits::{
    IBanditStore, IClassificationStore, IPurchaseIntentStore, ITextEmbeddingEventStore,
};

use crate::migrations;
use crate::pool::WriteConnection;
use crate::queries::{client_state, text_embedding_events};

/// SQLite-backed persistence collaborator.
pub struct StorageEngine {
    writer: WriteConnection,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> TargetingResult<Self> {
        Self::open_with_timeout(path, DEFAULT_BUSY_TIMEOUT_MS)
    }

    /// Open the database named by `config`.
    pub fn open_with_config(config: &StorageConfig) -> TargetingResult<Self> {
        Self::open_with_timeout(Path::new(&config.db_path), config.busy_timeout_ms)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> TargetingResult<Self> {
        let engine = Self {
            writer: WriteConnection::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn open_with_timeout(path: &Path, busy_timeout_ms: u64) -> TargetingResult<Self> {
        let engine = Self {
            writer: WriteConnection::open(path, busy_timeout_ms)?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> TargetingResult<()> {
        self.writer.with_conn_sync(|conn| {
            migrations::run_migrations(conn)?;
            Ok(())
        })
    }

    /// Run a closure against the underlying connection.
    pub fn with_conn<F, T>(&self, f: F) -> TargetingResult<T>
    where
        F: FnOnce(&Connection) -> TargetingResult<T>,
    {
        self.writer.with_conn_sync(f)
    }

    pub fn schema_version(&self) -> TargetingResult<u32> {
        self.with_conn(migrations::current_version)
    }

    /// Drop every persisted signal (opt-out).
    pub fn clear_all(&self) -> TargetingResult<()> {
        self.with_conn(|conn| {
            client_state::delete_state(conn, state_keys::PURCHASE_INTENT_SIGNAL_HISTORY)?;
            client_state::delete_state(
                conn,
                state_keys::TEXT_CLASSIFICATION_PROBABILITIES_HISTORY,
            )?;
            client_state::delete_state(conn, state_keys::EPSILON_GREEDY_BANDIT_ARMS)?;
            text_embedding_events::delete_all_except_most_recent(conn, 0)?;
            Ok(())
        })
    }
}

impl IPurchaseIntentStore for StorageEngine {
    fn load_purchase_intent_history(&self) -> TargetingResult<PurchaseIntentSignalHistory> {
        self.with_conn(|conn| {
            Ok(
                client_state::get_state(conn, state_keys::PURCHASE_INTENT_SIGNAL_HISTORY)?
                    .unwrap_or_default(),
            )
        })
    }

    fn save_purchase_intent_history(
        &self,
        history: &PurchaseIntentSignalHistory,
    ) -> TargetingResult<()> {
        self.with_conn(|conn| {
            client_state::put_state(conn, state_keys::PURCHASE_INTENT_SIGNAL_HISTORY, history)
        })
    }
}

impl IClassificationStore for StorageEngine {
    fn load_classification_history(&self) -> TargetingResult<ClassificationHistory> {
        self.with_conn(|conn| {
            Ok(client_state::get_state(
                conn,
                state_keys::TEXT_CLASSIFICATION_PROBABILITIES_HISTORY,
            )?
            .unwrap_or_default())
        })
    }

    fn save_classification_history(&self, history: &ClassificationHistory) -> TargetingResult<()> {
        self.with_conn(|conn| {
            client_state::put_state(
                conn,
                state_keys::TEXT_CLASSIFICATION_PROBABILITIES_HISTORY,
                history,
            )
        })
    }
}

impl IBanditStore for StorageEngine {
    fn load_bandit_arms(&self) -> TargetingResult<BanditArms> {
        self.with_conn(|conn| {
            Ok(client_state::get_state(conn, state_keys::EPSILON_GREEDY_BANDIT_ARMS)?
                .unwrap_or_default())
        })
    }

    fn save_bandit_arms(&self, arms: &BanditArms) -> TargetingResult<()> {
        self.with_conn(|conn| {
            client_state::put_state(conn, state_keys::EPSILON_GREEDY_BANDIT_ARMS, arms)
        })
    }
}

impl ITextEmbeddingEventStore for StorageEngine {
    fn insert_text_embedding_event(&self, event: &TextEmbeddingEvent) -> TargetingResult<()> {
        self.with_conn(|conn| text_embedding_events::insert_event(conn, event))
    }

    fn get_text_embedding_events(&self) -> TargetingResult<Vec<TextEmbeddingEvent>> {
        self.with_conn(text_embedding_events::get_all_events)
    }

    fn delete_text_embedding_events_except_most_recent(
        &self,
        keep: usize,
    ) -> TargetingResult<usize> {
        self.with_conn(|conn| text_embedding_events::delete_all_except_most_recent(conn, keep))
    }
}
