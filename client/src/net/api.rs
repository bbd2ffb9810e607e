//! Collaborator contracts for user and opportunity data.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth actions depend on `UserDirectory`; page views additionally use
//! `OpportunityDirectory`. The shipped implementation is the in-memory
//! `MockApi`, but nothing above this module names it except the composition
//! root.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an explicit `ApiError` returned to the caller. Messages
//! are user-facing and shown verbatim by the initiating form.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Application, ApplyOutcome, Internship, NewUser, ProfileUpdate, SearchPreferences, UserRecord,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("User with this email already exists.")]
    AccountExists,
    #[error("User profile not found.")]
    ProfileNotFound,
    #[error("Failed to update profile.")]
    ProfileUpdateFailed,
    #[error("Internship not found.")]
    InternshipNotFound(u32),
}

/// Account and profile operations.
pub trait UserDirectory {
    /// Check credentials and return the account's public record.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` when the email is unknown or the password differs.
    async fn authenticate(&self, email: &str, password: &str) -> Result<UserRecord, ApiError>;

    /// Create an account and return its public record.
    ///
    /// # Errors
    ///
    /// `AccountExists` when the email is already registered.
    async fn create_account(&self, new_user: NewUser) -> Result<UserRecord, ApiError>;

    /// # Errors
    ///
    /// `ProfileNotFound` when no account has this email.
    async fn fetch_profile(&self, email: &str) -> Result<UserRecord, ApiError>;

    /// # Errors
    ///
    /// `ProfileUpdateFailed` when no account has this email.
    async fn update_profile(&self, email: &str, update: ProfileUpdate) -> Result<(), ApiError>;
}

/// Internship search and application tracking.
pub trait OpportunityDirectory {
    /// # Errors
    ///
    /// Implementations may fail; the mock never does.
    async fn find_internships(&self, preferences: &SearchPreferences) -> Result<Vec<Internship>, ApiError>;

    /// # Errors
    ///
    /// Implementations may fail; the mock never does.
    async fn list_applications(&self, email: &str) -> Result<Vec<Application>, ApiError>;

    /// Track an application for `internship_id`.
    ///
    /// # Errors
    ///
    /// `InternshipNotFound` when the listing does not exist.
    async fn apply(&self, internship_id: u32) -> Result<ApplyOutcome, ApiError>;
}
