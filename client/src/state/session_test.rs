use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::util::storage::MemoryStorage;

const KEY: &str = "internUser";

// =============================================================
// Helpers
// =============================================================

fn user(email: &str) -> UserRecord {
    UserRecord {
        email: email.to_owned(),
        full_name: "Asha Rao".to_owned(),
        profile_completion: 40,
        skills: Some("Rust, SQL".to_owned()),
        ..UserRecord::default()
    }
}

fn store_with(storage: &Arc<MemoryStorage>) -> SessionStore {
    SessionStore::new(KEY, Arc::clone(storage) as Arc<dyn KeyValueStore>)
}

/// Storage that rejects every write, as a full quota would.
struct ReadOnlyStorage(MemoryStorage);

impl KeyValueStore for ReadOnlyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".to_owned()))
    }
}

struct UnreadableStorage;

impl KeyValueStore for UnreadableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_store_is_loading_without_user() {
    let store = store_with(&Arc::new(MemoryStorage::new()));
    let snap = store.get_session();
    assert!(snap.loading);
    assert!(snap.user.is_none());
    assert!(!snap.is_authenticated());
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_with_empty_storage_ends_loading() {
    let store = store_with(&Arc::new(MemoryStorage::new()));
    let snap = store.restore();
    assert!(!snap.loading);
    assert!(!snap.is_authenticated());
    assert_eq!(store.get_session(), snap);
}

#[test]
fn restore_reads_identifier_payload() {
    let storage = Arc::new(MemoryStorage::with_entry(
        KEY,
        r#"{"identifier":"a@example.com","fullName":"A","profileCompletion":10}"#,
    ));
    let store = store_with(&storage);
    store.restore();
    let snap = store.get_session();
    assert!(!snap.loading);
    assert!(snap.is_authenticated());
    assert_eq!(snap.user.unwrap().email, "a@example.com");
}

#[test]
fn restore_with_corrupt_data_ends_loading_without_user() {
    let storage = Arc::new(MemoryStorage::with_entry(KEY, "{not json"));
    let store = store_with(&storage);
    let snap = store.restore();
    assert!(!snap.loading);
    assert!(snap.user.is_none());
}

#[test]
fn restore_purges_corrupt_record() {
    let storage = Arc::new(MemoryStorage::with_entry(KEY, "[1,2,3]"));
    store_with(&storage).restore();
    assert!(!storage.contains(KEY));
}

#[test]
fn restore_with_unreadable_storage_ends_loading() {
    let store = SessionStore::new(KEY, Arc::new(UnreadableStorage));
    let snap = store.restore();
    assert!(!snap.loading);
    assert!(snap.user.is_none());
}

#[test]
fn restore_does_not_rewrite_valid_record() {
    let raw = r#"{"email":"a@example.com"}"#;
    let storage = Arc::new(MemoryStorage::with_entry(KEY, raw));
    store_with(&storage).restore();
    assert_eq!(storage.get(KEY).unwrap().as_deref(), Some(raw));
}

#[test]
fn restore_runs_only_once() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(&storage);
    store.restore();
    storage.set(KEY, r#"{"email":"late@example.com"}"#).unwrap();
    let snap = store.restore();
    assert!(!snap.loading);
    assert!(snap.user.is_none());
}

#[test]
fn loading_never_returns_to_true() {
    let store = store_with(&Arc::new(MemoryStorage::new()));
    store.restore();
    store.set_session(user("a@example.com"));
    store.clear_session();
    store.restore();
    assert!(!store.get_session().loading);
}

// =============================================================
// set_session / clear_session
// =============================================================

#[test]
fn set_session_after_restore_persists_user() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(&storage);
    store.restore();
    store.set_session(user("a@example.com"));
    let raw = storage.get(KEY).unwrap().unwrap();
    let stored: UserRecord = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, user("a@example.com"));
}

#[test]
fn set_session_while_loading_skips_storage() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(&storage);
    store.set_session(user("a@example.com"));
    assert!(store.get_session().is_authenticated());
    assert!(!storage.contains(KEY));
}

#[test]
fn user_set_while_loading_survives_empty_restore() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(&storage);
    store.set_session(user("early@example.com"));

    let snap = store.restore();
    assert!(!snap.loading);
    assert_eq!(snap.user.map(|u| u.email), Some("early@example.com".to_owned()));
    let persisted: UserRecord = serde_json::from_str(&storage.get(KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted.email, "early@example.com");
}

#[test]
fn stored_record_wins_over_user_set_while_loading() {
    let storage = Arc::new(MemoryStorage::with_entry(KEY, r#"{"email":"stored@example.com"}"#));
    let store = store_with(&storage);
    store.set_session(user("early@example.com"));

    let snap = store.restore();
    assert_eq!(snap.user.map(|u| u.email), Some("stored@example.com".to_owned()));
}

#[test]
fn user_set_while_loading_replaces_corrupt_record() {
    let storage = Arc::new(MemoryStorage::with_entry(KEY, "{not json"));
    let store = store_with(&storage);
    store.set_session(user("early@example.com"));

    store.restore();
    assert!(store.get_session().is_authenticated());
    let persisted: UserRecord = serde_json::from_str(&storage.get(KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted.email, "early@example.com");
}

#[test]
fn clear_session_while_loading_keeps_stored_record() {
    let storage = Arc::new(MemoryStorage::with_entry(KEY, r#"{"email":"a@example.com"}"#));
    let store = store_with(&storage);
    store.clear_session();
    assert!(storage.contains(KEY));
}

#[test]
fn clear_session_removes_stored_record() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(&storage);
    store.restore();
    store.set_session(user("a@example.com"));
    store.clear_session();
    let snap = store.get_session();
    assert!(snap.user.is_none());
    assert!(!snap.is_authenticated());
    assert!(!storage.contains(KEY));
}

#[test]
fn authenticated_tracks_user_across_sequences() {
    let store = store_with(&Arc::new(MemoryStorage::new()));
    store.restore();
    let ops: [Option<&str>; 6] = [Some("a@x.io"), None, None, Some("b@x.io"), Some("c@x.io"), None];
    for op in ops {
        match op {
            Some(email) => store.set_session(user(email)),
            None => store.clear_session(),
        }
        let snap = store.get_session();
        assert_eq!(snap.is_authenticated(), snap.user.is_some());
        assert_eq!(snap.user.map(|u| u.email), op.map(str::to_owned));
    }
}

#[test]
fn write_failure_does_not_block_memory_update() {
    let store = SessionStore::new(KEY, Arc::new(ReadOnlyStorage(MemoryStorage::new())));
    store.restore();
    store.set_session(user("a@example.com"));
    assert!(store.get_session().is_authenticated());
    store.clear_session();
    assert!(!store.get_session().is_authenticated());
}

// =============================================================
// Round trip
// =============================================================

#[test]
fn set_session_round_trips_through_fresh_restore() {
    let storage = Arc::new(MemoryStorage::new());
    let mut original = user("a@example.com");
    original.extra.insert("theme".to_owned(), serde_json::json!("dark"));

    let first = store_with(&storage);
    first.restore();
    first.set_session(original.clone());

    let second = store_with(&storage);
    let snap = second.restore();
    assert_eq!(snap.user, Some(original));
}

// =============================================================
// subscribe
// =============================================================

#[test]
fn subscribers_see_every_transition() {
    let store = store_with(&Arc::new(MemoryStorage::new()));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = store.subscribe(move |snap| {
        sink.lock().unwrap().push((snap.loading, snap.is_authenticated()));
    });

    store.restore();
    store.set_session(user("a@example.com"));
    store.clear_session();

    assert_eq!(*seen.lock().unwrap(), vec![(false, false), (false, true), (false, false)]);
}

#[test]
fn dropping_subscription_stops_notifications() {
    let store = store_with(&Arc::new(MemoryStorage::new()));
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let sub = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    store.restore();
    drop(sub);
    store.set_session(user("a@example.com"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn listener_snapshot_matches_store_state() {
    let store = Arc::new(store_with(&Arc::new(MemoryStorage::new())));
    let observer = Arc::clone(&store);
    let agreed = Arc::new(AtomicUsize::new(0));
    let agreed_sink = Arc::clone(&agreed);
    let _sub = store.subscribe(move |snap| {
        if observer.get_session() == *snap {
            agreed_sink.fetch_add(1, Ordering::SeqCst);
        }
    });
    store.restore();
    store.set_session(user("a@example.com"));
    assert_eq!(agreed.load(Ordering::SeqCst), 2);
}

#[test]
fn nested_mutation_leaves_later_listeners_current() {
    let store = Arc::new(store_with(&Arc::new(MemoryStorage::new())));
    store.restore();

    let writer = Arc::clone(&store);
    let _signs_out = store.subscribe(move |snap| {
        if snap.is_authenticated() {
            writer.clear_session();
        }
    });
    let last_seen = Arc::new(Mutex::new(None::<SessionSnapshot>));
    let sink = Arc::clone(&last_seen);
    let _records = store.subscribe(move |snap| {
        *sink.lock().unwrap() = Some(snap.clone());
    });

    store.set_session(user("a@example.com"));

    let last = last_seen.lock().unwrap().clone().unwrap();
    assert!(!store.get_session().is_authenticated());
    assert_eq!(last, store.get_session());
}

#[test]
fn subscription_outliving_store_drops_cleanly() {
    let store = store_with(&Arc::new(MemoryStorage::new()));
    let sub = store.subscribe(|_| {});
    drop(store);
    drop(sub);
}
