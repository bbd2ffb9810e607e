//! Auth actions: login, register, logout, and profile refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms call these instead of touching the session store directly. Each
//! successful collaborator call ends in exactly one `set_session`; failures
//! return the collaborator error and leave the session untouched.
//!
//! DESIGN
//! ======
//! Only one network-backed action may be in flight at a time. A second call
//! while the latch is held fails fast with `AuthError::Busy` rather than
//! racing the first one to `set_session`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::api::{ApiError, UserDirectory};
use crate::net::types::{NewUser, UserRecord};
use crate::state::session::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Another request is already in progress.")]
    Busy,
    #[error("You are not signed in.")]
    NotSignedIn,
}

/// Releases the in-flight latch on drop, including on early return.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct AuthActions<A> {
    session: Arc<SessionStore>,
    api: Arc<A>,
    in_flight: AtomicBool,
}

impl<A: UserDirectory> AuthActions<A> {
    pub fn new(session: Arc<SessionStore>, api: Arc<A>) -> Self {
        Self { session, api, in_flight: AtomicBool::new(false) }
    }

    /// Whether a network-backed action is currently running.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Sign in and make the returned user the current session.
    ///
    /// # Errors
    ///
    /// `Busy` while another action runs; otherwise the collaborator's error
    /// (`InvalidCredentials`).
    pub async fn login(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        let _latch = self.begin()?;
        let user = self.api.authenticate(email, password).await?;
        self.session.set_session(user.clone());
        log::info!("signed in as {}", user.email);
        Ok(user)
    }

    /// Create an account and sign into it.
    ///
    /// # Errors
    ///
    /// `Busy` while another action runs; otherwise the collaborator's error
    /// (`AccountExists`).
    pub async fn register(&self, new_user: NewUser) -> Result<UserRecord, AuthError> {
        let _latch = self.begin()?;
        let user = self.api.create_account(new_user).await?;
        self.session.set_session(user.clone());
        log::info!("registered {}", user.email);
        Ok(user)
    }

    /// Reload the signed-in user's profile into the session.
    ///
    /// # Errors
    ///
    /// `NotSignedIn` without a session, `Busy` while another action runs,
    /// otherwise the collaborator's error (`ProfileNotFound`).
    pub async fn refresh_profile(&self) -> Result<UserRecord, AuthError> {
        let email = self
            .session
            .get_session()
            .user
            .map(|u| u.email)
            .ok_or(AuthError::NotSignedIn)?;
        let _latch = self.begin()?;
        let user = self.api.fetch_profile(&email).await?;
        self.session.set_session(user.clone());
        Ok(user)
    }

    /// Sign out locally. No collaborator call is made.
    pub fn logout(&self) {
        self.session.clear_session();
        log::info!("signed out");
    }

    fn begin(&self) -> Result<InFlight<'_>, AuthError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlight(&self.in_flight))
            .map_err(|_| AuthError::Busy)
    }
}
