use super::*;

#[test]
fn new_state_does_not_trust_forwarded_for() {
    let state = test_helpers::test_app_state();
    assert!(state.mailer.is_none());
    assert!(!state.trust_forwarded_for);
}

#[test]
fn with_trust_forwarded_for_sets_flag() {
    let state = test_helpers::test_app_state().with_trust_forwarded_for(true);
    assert!(state.trust_forwarded_for);
}

#[test]
fn cloned_state_shares_rate_limiter() {
    let state = test_helpers::test_app_state();
    let clone = state.clone();
    let ip: std::net::IpAddr = "198.51.100.7".parse().unwrap();

    state.rate_limiter.check_and_record(ip).unwrap();
    clone.rate_limiter.check_and_record(ip).unwrap();
    assert!(state.rate_limiter.check_and_record(ip).is_err());
}
