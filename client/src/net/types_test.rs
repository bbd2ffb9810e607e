use super::*;

// =============================================================
// UserRecord
// =============================================================

#[test]
fn user_record_reads_camel_case_payload() {
    let raw = r#"{"email":"a@example.com","fullName":"Asha Rao","profileCompletion":40,"bio":"hi"}"#;
    let user: UserRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(user.email, "a@example.com");
    assert_eq!(user.full_name, "Asha Rao");
    assert_eq!(user.profile_completion, 40);
    assert_eq!(user.bio.as_deref(), Some("hi"));
    assert!(user.extra.is_empty());
}

#[test]
fn user_record_accepts_identifier_alias() {
    let raw = r#"{"identifier":"a@example.com","fullName":"A"}"#;
    let user: UserRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(user.email, "a@example.com");
}

#[test]
fn user_record_rejects_both_email_and_identifier() {
    let raw = r#"{"email":"a@example.com","identifier":"b@example.com"}"#;
    let err = serde_json::from_str::<UserRecord>(raw).unwrap_err();
    assert!(err.to_string().contains("duplicate field"));
}

#[test]
fn identifier_payload_is_written_back_as_email() {
    let user: UserRecord = serde_json::from_str(r#"{"identifier":"a@example.com"}"#).unwrap();
    let encoded = serde_json::to_value(&user).unwrap();
    assert_eq!(encoded["email"], "a@example.com");
    assert!(encoded.get("identifier").is_none());
}

#[test]
fn user_record_keeps_unknown_keys() {
    let raw = r#"{"email":"a@example.com","theme":"dark","badges":[1,2]}"#;
    let user: UserRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(user.extra.get("theme"), Some(&serde_json::json!("dark")));

    let encoded = serde_json::to_value(&user).unwrap();
    assert_eq!(encoded["theme"], "dark");
    assert_eq!(encoded["badges"], serde_json::json!([1, 2]));
}

#[test]
fn user_record_without_email_is_rejected() {
    assert!(serde_json::from_str::<UserRecord>(r#"{"fullName":"A"}"#).is_err());
}

#[test]
fn first_name_uses_leading_word() {
    let user = UserRecord { email: "a@b.c".to_owned(), full_name: "Anjali Sharma".to_owned(), ..UserRecord::default() };
    assert_eq!(user.first_name(), "Anjali");
}

#[test]
fn first_name_falls_back_to_email() {
    let user = UserRecord { email: "a@b.c".to_owned(), ..UserRecord::default() };
    assert_eq!(user.first_name(), "a@b.c");
}

// =============================================================
// ProfileUpdate
// =============================================================

#[test]
fn profile_update_merges_only_present_fields() {
    let mut user = UserRecord {
        email: "a@b.c".to_owned(),
        full_name: "Old".to_owned(),
        bio: Some("keep".to_owned()),
        ..UserRecord::default()
    };
    let update = ProfileUpdate {
        full_name: Some("New".to_owned()),
        skills: Some("Rust".to_owned()),
        ..ProfileUpdate::default()
    };
    update.apply_to(&mut user);
    assert_eq!(user.full_name, "New");
    assert_eq!(user.skills.as_deref(), Some("Rust"));
    assert_eq!(user.bio.as_deref(), Some("keep"));
    assert_eq!(user.email, "a@b.c");
}

// =============================================================
// Internships and applications
// =============================================================

#[test]
fn score_percent_rounds_and_clamps() {
    let mut internship = Internship {
        id: 1,
        title: "T".to_owned(),
        company: "C".to_owned(),
        location: "L".to_owned(),
        score: 0.876,
    };
    assert_eq!(internship.score_percent(), 88);
    internship.score = 1.7;
    assert_eq!(internship.score_percent(), 100);
}

#[test]
fn application_status_uses_spaced_wire_name() {
    assert_eq!(serde_json::to_string(&ApplicationStatus::UnderReview).unwrap(), r#""Under Review""#);
    let parsed: ApplicationStatus = serde_json::from_str(r#""Shortlisted""#).unwrap();
    assert_eq!(parsed, ApplicationStatus::Shortlisted);
}

#[test]
fn application_flattens_internship_fields() {
    let raw = r#"{"id":2,"title":"Data Analyst Intern","company":"Ministry of Statistics","location":"Delhi","score":0.88,"status":"Shortlisted","dateApplied":"2025-09-25"}"#;
    let app: Application = serde_json::from_str(raw).unwrap();
    assert_eq!(app.id(), 2);
    assert_eq!(app.status, ApplicationStatus::Shortlisted);
    assert_eq!(app.date_applied, "2025-09-25");
}

#[test]
fn toggle_sector_adds_then_removes() {
    let mut prefs = SearchPreferences::default();
    prefs.toggle_sector("Design");
    assert!(prefs.has_sector("Design"));
    prefs.toggle_sector("Finance");
    prefs.toggle_sector("Design");
    assert_eq!(prefs.sectors, vec!["Finance".to_owned()]);
}
