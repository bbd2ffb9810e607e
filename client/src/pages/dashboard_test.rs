use super::*;

#[test]
fn greeting_uses_first_name() {
    let user = UserRecord {
        email: "a@example.com".to_owned(),
        full_name: "Anjali Sharma".to_owned(),
        ..UserRecord::default()
    };
    assert_eq!(greeting(Some(&user)), "Welcome back, Anjali!");
}

#[test]
fn greeting_without_user_is_generic() {
    assert_eq!(greeting(None), "Welcome back!");
}

#[test]
fn shortcuts_point_at_guarded_routes() {
    for (route, _, _) in SHORTCUTS {
        assert!(route.requirement().is_some());
    }
}
