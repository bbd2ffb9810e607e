//! Session store: the single source of truth for who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once by the `App` composition root and shared through context as
//! `Arc<SessionStore>`. Route guards and the layout switch observe it through
//! `subscribe`; auth actions are the only writers.
//!
//! DESIGN
//! ======
//! `loading` starts `true` and is flipped exactly once by `restore`. Durable
//! writes mirror every later `user` change; updates made while `loading` is
//! still set stay in memory only, so the record being restored is never
//! overwritten by the restore itself. A stored record wins over a user set
//! during loading; with nothing stored, that user is kept and persisted. Storage is a best-effort cache: read
//! and write failures are logged and never surface to callers.
//!
//! Listeners run synchronously after the state lock is released, so a
//! listener may read the store (or mutate it) without deadlocking. Each
//! listener receives the state current at its own call, so nested mutations
//! never leave a later listener holding a stale snapshot.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::net::types::UserRecord;
use crate::util::storage::{KeyValueStore, StorageError};

/// Consistent view of the session at one observation point.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<UserRecord>,
    pub loading: bool,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for SessionSnapshot {
    /// The pre-restore state: no user, still loading.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

/// Why the stored session could not be used.
#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("could not read stored session: {0}")]
    Storage(#[from] StorageError),
    #[error("stored session is corrupt: {0}")]
    Parse(#[from] serde_json::Error),
}

type Listener = Arc<dyn Fn(&SessionSnapshot) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Handle returned by [`SessionStore::subscribe`]; dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            let mut guard = listeners.lock().unwrap_or_else(PoisonError::into_inner);
            guard.entries.retain(|(id, _)| *id != self.id);
        }
    }
}

pub struct SessionStore {
    key: String,
    storage: Arc<dyn KeyValueStore>,
    state: Mutex<SessionSnapshot>,
    listeners: Arc<Mutex<Listeners>>,
}

impl SessionStore {
    /// Create an unrestored store persisting under `key`.
    pub fn new(key: impl Into<String>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            key: key.into(),
            storage,
            state: Mutex::new(SessionSnapshot::default()),
            listeners: Arc::new(Mutex::new(Listeners::default())),
        }
    }

    /// Current `(user, loading)` pair, read under one lock.
    pub fn get_session(&self) -> SessionSnapshot {
        self.lock_state().clone()
    }

    /// Load the persisted user and end the loading phase.
    ///
    /// Only the first call has any effect. A missing or unreadable record
    /// leaves the in-memory user as it is; a corrupt one is additionally
    /// purged once loading has ended unless a user was set meanwhile.
    pub fn restore(&self) -> SessionSnapshot {
        let snapshot = {
            let mut state = self.lock_state();
            if !state.loading {
                log::warn!("session restore already completed; ignoring repeat call");
                return state.clone();
            }

            let mut corrupt = false;
            let stored = self.read_stored().unwrap_or_else(|err| {
                log::warn!("discarding stored session: {err}");
                corrupt = matches!(err, RestoreError::Parse(_));
                None
            });
            state.loading = false;
            match stored {
                Some(user) => state.user = Some(user),
                // A user set while loading survives an empty restore and is
                // persisted now that writes are allowed.
                None if state.user.is_some() => self.write_through(state.user.as_ref()),
                None if corrupt => self.write_through(None),
                None => {}
            }
            state.clone()
        };
        log::debug!("session restored (authenticated: {})", snapshot.is_authenticated());
        self.notify();
        snapshot
    }

    /// Replace the current user.
    pub fn set_session(&self, user: UserRecord) {
        self.update(Some(user));
    }

    /// Sign the current user out.
    pub fn clear_session(&self) {
        self.update(None);
    }

    /// Register `listener` to run after every state transition.
    pub fn subscribe(&self, listener: impl Fn(&SessionSnapshot) + Send + Sync + 'static) -> Subscription {
        let mut listeners = self.lock_listeners();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        Subscription { id, listeners: Arc::downgrade(&self.listeners) }
    }

    fn update(&self, user: Option<UserRecord>) {
        {
            let mut state = self.lock_state();
            state.user = user;
            if !state.loading {
                self.write_through(state.user.as_ref());
            }
        }
        self.notify();
    }

    fn read_stored(&self) -> Result<Option<UserRecord>, RestoreError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Mirror `user` into durable storage; failures are logged only.
    fn write_through(&self, user: Option<&UserRecord>) {
        let result = match user {
            Some(user) => match serde_json::to_string(user) {
                Ok(raw) => self.storage.set(&self.key, &raw),
                Err(err) => {
                    log::error!("failed to serialize session user: {err}");
                    return;
                }
            },
            None => self.storage.remove(&self.key),
        };
        if let Err(err) = result {
            log::error!("session storage sync failed: {err}");
        }
    }

    /// Run every listener against the state as it is when that listener is
    /// called. A listener that mutates the store triggers a nested pass, and
    /// the remaining listeners of the outer pass then see the newer state
    /// rather than the one that started it.
    fn notify(&self) {
        let listeners: Vec<Listener> = self
            .lock_listeners()
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            let snapshot = self.get_session();
            listener(&snapshot);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_listeners(&self) -> MutexGuard<'_, Listeners> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
