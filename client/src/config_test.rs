use super::*;

#[test]
fn default_config_uses_intern_user_key() {
    assert_eq!(ClientConfig::default().session_key, "internUser");
}

#[test]
fn default_latency_matches_shipped_timings() {
    let latency = MockLatency::default();
    assert_eq!(latency.login, Duration::from_millis(1000));
    assert_eq!(latency.find_internships, Duration::from_millis(1500));
    assert_eq!(latency.apply, Duration::from_millis(600));
}

#[test]
fn none_latency_is_all_zero() {
    let latency = MockLatency::none();
    assert!(latency.login.is_zero());
    assert!(latency.register.is_zero());
    assert!(latency.profile.is_zero());
    assert!(latency.update_profile.is_zero());
    assert!(latency.find_internships.is_zero());
    assert!(latency.list_applications.is_zero());
    assert!(latency.apply.is_zero());
}
