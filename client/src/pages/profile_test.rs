use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::config::MockLatency;
use crate::net::mock_api::MockApi;
use crate::state::session::SessionStore;
use crate::util::storage::{KeyValueStore, MemoryStorage};

const DEMO_EMAIL: &str = "test@example.com";

fn services() -> (Arc<SessionStore>, Arc<MockApi>, AuthActions<MockApi>) {
    let session = Arc::new(SessionStore::new("internUser", Arc::new(MemoryStorage::new()) as Arc<dyn KeyValueStore>));
    session.restore();
    let api = Arc::new(MockApi::new(MockLatency::none()));
    let auth = AuthActions::new(Arc::clone(&session), Arc::clone(&api));
    (session, api, auth)
}

fn bio_update(bio: &str) -> ProfileUpdate {
    ProfileUpdate { bio: Some(bio.to_owned()), ..ProfileUpdate::default() }
}

fn record() -> UserRecord {
    UserRecord {
        email: "test@example.com".to_owned(),
        full_name: "Anjali Sharma".to_owned(),
        phone_number: Some("9876543210".to_owned()),
        profile_completion: 75,
        skills: Some("Python, SQL".to_owned()),
        ..UserRecord::default()
    }
}

#[test]
fn draft_copies_record_and_blanks_missing_fields() {
    let draft = ProfileDraft::from_record(&record());
    assert_eq!(draft.full_name, "Anjali Sharma");
    assert_eq!(draft.phone_number, "9876543210");
    assert_eq!(draft.skills, "Python, SQL");
    assert_eq!(draft.bio, "");
    assert_eq!(draft.profile_image, None);
}

#[test]
fn update_rejects_blank_name() {
    let draft = ProfileDraft { full_name: "   ".to_owned(), ..ProfileDraft::default() };
    assert_eq!(draft.to_update(), Err("Full name cannot be empty."));
}

#[test]
fn update_trims_and_sends_text_fields() {
    let mut draft = ProfileDraft::from_record(&record());
    draft.full_name = "  Anjali S ".to_owned();
    draft.linkedin = " https://linkedin.com/in/anjali ".to_owned();

    let update = draft.to_update().unwrap();
    assert_eq!(update.full_name.as_deref(), Some("Anjali S"));
    assert_eq!(update.linkedin.as_deref(), Some("https://linkedin.com/in/anjali"));
    assert_eq!(update.bio.as_deref(), Some(""));
    assert_eq!(update.profile_image, None);
}

#[test]
fn cleared_field_is_cleared_after_apply() {
    let mut stored = record();
    let mut draft = ProfileDraft::from_record(&stored);
    draft.phone_number.clear();

    draft.to_update().unwrap().apply_to(&mut stored);
    assert_eq!(stored.phone_number.as_deref(), Some(""));
    assert_eq!(stored.full_name, "Anjali Sharma");
    assert_eq!(stored.profile_completion, 75);
}

#[test]
fn draft_round_trips_through_update() {
    let mut stored = record();
    let mut draft = ProfileDraft::from_record(&stored);
    draft.bio = "Data enthusiast".to_owned();
    draft.profile_image = Some("blob:avatar".to_owned());

    draft.to_update().unwrap().apply_to(&mut stored);
    assert_eq!(ProfileDraft::from_record(&stored), draft);
}

#[test]
fn save_refreshes_signed_in_session() {
    let (session, api, auth) = services();
    let current = block_on(api.fetch_profile(DEMO_EMAIL)).unwrap();
    session.set_session(current.clone());

    let saved = block_on(save_profile(&*api, &auth, DEMO_EMAIL, current, bio_update("Updated bio"))).unwrap();
    assert_eq!(saved.bio.as_deref(), Some("Updated bio"));
    assert_eq!(session.get_session().user.and_then(|u| u.bio), Some("Updated bio".to_owned()));
}

#[test]
fn save_counts_as_done_when_refresh_fails() {
    let (session, api, auth) = services();
    let current = block_on(api.fetch_profile(DEMO_EMAIL)).unwrap();

    // No signed-in user, so the session refresh fails after the update lands.
    let saved = block_on(save_profile(&*api, &auth, DEMO_EMAIL, current, bio_update("Kept"))).unwrap();
    assert_eq!(saved.bio.as_deref(), Some("Kept"));
    assert_eq!(saved.email, DEMO_EMAIL);
    assert!(!session.get_session().is_authenticated());
    assert_eq!(block_on(api.fetch_profile(DEMO_EMAIL)).unwrap().bio.as_deref(), Some("Kept"));
}

#[test]
fn save_reports_failed_update() {
    let (_session, api, auth) = services();
    let err = block_on(save_profile(&*api, &auth, "nobody@example.com", record(), bio_update("x"))).unwrap_err();
    assert_eq!(err, ApiError::ProfileUpdateFailed);
}
