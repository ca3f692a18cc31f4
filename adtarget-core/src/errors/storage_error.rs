/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("stored client state `{key}` is malformed: {reason}")]
    MalformedState { key: String, reason: String },

    #[error("storage lock poisoned: {details}")]
    LockPoisoned { details: String },
}
