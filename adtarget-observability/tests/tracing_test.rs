use adtarget_core::config::ObservabilityConfig;
use adtarget_observability::init_tracing;
use adtarget_observability::tracing_setup::spans::names;

#[test]
fn second_init_is_a_no_op() {
    let config = ObservabilityConfig {
        log_level: "debug".into(),
        json: true,
    };
    let first = init_tracing(&config);
    let second = init_tracing(&config);
    assert!(first);
    assert!(!second);
}

#[test]
fn span_macros_use_named_targets() {
    let span = adtarget_observability::bandit_span!("select");
    let _guard = span.enter();
    assert_eq!(names::BANDIT, "adtarget.bandit");
    let user_model = adtarget_observability::user_model_span!();
    drop(user_model);
}
