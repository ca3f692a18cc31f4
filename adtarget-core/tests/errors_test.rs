use adtarget_core::errors::*;

#[test]
fn not_ready_carries_component() {
    let err = TargetingError::not_ready("text_classifier");
    assert!(err.to_string().contains("text_classifier"));
    assert!(err.is_not_ready());
}

#[test]
fn configuration_mismatch_carries_versions() {
    let err = TargetingError::ConfigurationMismatch {
        component: "purchase_intent".into(),
        expected: 3,
        actual: 2,
    };
    let msg = err.to_string();
    assert!(msg.contains("purchase_intent"));
    assert!(msg.contains('3'));
    assert!(msg.contains('2'));
    assert!(!err.is_not_ready());
}

#[test]
fn storage_error_converts_to_targeting_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk full".into(),
    };
    let err: TargetingError = storage_err.into();
    assert!(matches!(err, TargetingError::StorageError(_)));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn resource_error_converts_to_targeting_error() {
    let err: TargetingError = ResourceError::DimensionMismatch {
        expected: 4,
        actual: 3,
    }
    .into();
    assert!(matches!(err, TargetingError::ResourceError(_)));
}

#[test]
fn serde_error_converts_to_targeting_error() {
    let serde_err = serde_json::from_str::<u32>("not a number").unwrap_err();
    let err: TargetingError = serde_err.into();
    assert!(matches!(err, TargetingError::SerializationError(_)));
}

#[test]
fn malformed_state_is_distinguished_from_other_storage_errors() {
    let malformed: TargetingError = StorageError::MalformedState {
        key: "epsilon_greedy_bandit_arms".into(),
        reason: "expected value at line 1 column 1".into(),
    }
    .into();
    assert!(malformed.is_malformed_state());

    let sqlite: TargetingError = StorageError::SqliteError {
        message: "database is locked".into(),
    }
    .into();
    assert!(!sqlite.is_malformed_state());
    assert!(!TargetingError::not_ready("bandit").is_malformed_state());
}
