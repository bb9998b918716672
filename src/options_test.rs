use super::*;

#[test]
fn should_admit_everything_when_default_then_keep_blacklist_empty() {
    let options = ProxyOptions::default();

    assert!(options.blacklist.is_empty());
    assert_eq!(options.whitelist, vec![".*".to_owned()]);
}

#[test]
fn should_preserve_reference_gaps_when_default_then_disable_timeout_and_short_circuit() {
    let options = ProxyOptions::default();

    assert!(options.upstream_timeout.is_none());
    assert!(!options.short_circuit_preflight);
}
