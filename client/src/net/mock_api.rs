//! In-memory mock of the user and opportunity services.
//!
//! DESIGN
//! ======
//! All data lives behind one mutex and is seeded on construction. Each call
//! first awaits its configured latency (hydrate builds only) and then does
//! its work under the lock without awaiting, so the guard never crosses a
//! suspension point. Passwords stay inside `StoredAccount` and are never
//! copied into a returned `UserRecord`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "mock_api_test.rs"]
mod mock_api_test;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::api::{ApiError, OpportunityDirectory, UserDirectory};
use super::types::{
    Application, ApplicationStatus, ApplyOutcome, Internship, NewUser, ProfileUpdate, SearchPreferences,
    UserRecord,
};
use crate::config::MockLatency;

/// Profile completion assigned to freshly registered accounts.
const NEW_ACCOUNT_COMPLETION: u8 = 25;

struct StoredAccount {
    password: String,
    record: UserRecord,
}

struct MockDb {
    accounts: HashMap<String, StoredAccount>,
    internships: Vec<Internship>,
    applications: Vec<Application>,
}

/// Seeded in-memory implementation of both collaborator traits.
pub struct MockApi {
    latency: MockLatency,
    db: Mutex<MockDb>,
}

impl MockApi {
    /// Create a mock seeded with the demo account, listings, and one application.
    pub fn new(latency: MockLatency) -> Self {
        let internships = seed_internships();
        let applications = internships
            .iter()
            .find(|i| i.id == 2)
            .map(|i| Application {
                internship: i.clone(),
                status: ApplicationStatus::Shortlisted,
                date_applied: "2025-09-25".to_owned(),
            })
            .into_iter()
            .collect();

        let demo = seed_account();
        let mut accounts = HashMap::new();
        accounts.insert(demo.record.email.clone(), demo);

        Self { latency, db: Mutex::new(MockDb { accounts, internships, applications }) }
    }

    fn db(&self) -> MutexGuard<'_, MockDb> {
        self.db.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new(MockLatency::default())
    }
}

impl UserDirectory for MockApi {
    async fn authenticate(&self, email: &str, password: &str) -> Result<UserRecord, ApiError> {
        pause(self.latency.login).await;
        let db = self.db();
        match db.accounts.get(email) {
            Some(account) if account.password == password => Ok(account.record.clone()),
            _ => Err(ApiError::InvalidCredentials),
        }
    }

    async fn create_account(&self, new_user: NewUser) -> Result<UserRecord, ApiError> {
        pause(self.latency.register).await;
        let mut db = self.db();
        if db.accounts.contains_key(&new_user.email) {
            return Err(ApiError::AccountExists);
        }
        let record = UserRecord {
            profile_image: Some(avatar_url(&new_user.email)),
            email: new_user.email.clone(),
            full_name: new_user.full_name,
            profile_completion: NEW_ACCOUNT_COMPLETION,
            ..UserRecord::default()
        };
        db.accounts
            .insert(new_user.email, StoredAccount { password: new_user.password, record: record.clone() });
        log::debug!("mock api: registered {}", record.email);
        Ok(record)
    }

    async fn fetch_profile(&self, email: &str) -> Result<UserRecord, ApiError> {
        pause(self.latency.profile).await;
        self.db()
            .accounts
            .get(email)
            .map(|account| account.record.clone())
            .ok_or(ApiError::ProfileNotFound)
    }

    async fn update_profile(&self, email: &str, update: ProfileUpdate) -> Result<(), ApiError> {
        pause(self.latency.update_profile).await;
        let mut db = self.db();
        let account = db.accounts.get_mut(email).ok_or(ApiError::ProfileUpdateFailed)?;
        update.apply_to(&mut account.record);
        Ok(())
    }
}

impl OpportunityDirectory for MockApi {
    async fn find_internships(&self, preferences: &SearchPreferences) -> Result<Vec<Internship>, ApiError> {
        pause(self.latency.find_internships).await;
        log::debug!(
            "mock api: search locations={:?} sectors={:?}",
            preferences.locations,
            preferences.sectors
        );
        Ok(self.db().internships.clone())
    }

    async fn list_applications(&self, _email: &str) -> Result<Vec<Application>, ApiError> {
        pause(self.latency.list_applications).await;
        Ok(self.db().applications.clone())
    }

    async fn apply(&self, internship_id: u32) -> Result<ApplyOutcome, ApiError> {
        pause(self.latency.apply).await;
        let mut db = self.db();
        if db.applications.iter().any(|a| a.id() == internship_id) {
            return Ok(ApplyOutcome::AlreadyApplied);
        }
        let internship = db
            .internships
            .iter()
            .find(|i| i.id == internship_id)
            .cloned()
            .ok_or(ApiError::InternshipNotFound(internship_id))?;
        db.applications.insert(
            0,
            Application { internship, status: ApplicationStatus::Applied, date_applied: today() },
        );
        Ok(ApplyOutcome::Applied)
    }
}

/// Simulated network delay; a no-op outside the browser.
async fn pause(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        if !duration.is_zero() {
            gloo_timers::future::sleep(duration).await;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}

fn avatar_url(email: &str) -> String {
    format!("https://i.pravatar.cc/150?u={email}")
}

/// Current UTC date as `YYYY-MM-DD`.
fn today() -> String {
    time::OffsetDateTime::now_utc().date().to_string()
}

fn seed_account() -> StoredAccount {
    let email = "test@example.com";
    StoredAccount {
        password: "password123".to_owned(),
        record: UserRecord {
            email: email.to_owned(),
            full_name: "Anjali Sharma".to_owned(),
            phone_number: Some("9876543210".to_owned()),
            profile_image: Some(avatar_url(email)),
            profile_completion: 75,
            bio: Some(
                "Aspiring software developer with a passion for building scalable web applications \
                 and exploring new technologies. Eager to apply my skills in a real-world setting."
                    .to_owned(),
            ),
            skills: Some("React, Node.js, MongoDB, Express.js, Python".to_owned()),
            linkedin: Some("https://linkedin.com/in/example".to_owned()),
            portfolio: Some("https://example.com".to_owned()),
            extra: serde_json::Map::new(),
        },
    }
}

fn seed_internships() -> Vec<Internship> {
    [
        (1, "AI/ML Intern", "NITI Aayog", "Remote", 0.92),
        (2, "Data Analyst Intern", "Ministry of Statistics", "Delhi", 0.88),
        (3, "Cyber Security Intern", "National Informatics Centre", "Bangalore", 0.85),
        (4, "Frontend Developer Intern", "MyGov India", "Remote", 0.95),
        (5, "Cloud Engineering Intern", "Digital India Corporation", "Hyderabad", 0.89),
    ]
    .into_iter()
    .map(|(id, title, company, location, score)| Internship {
        id,
        title: title.to_owned(),
        company: company.to_owned(),
        location: location.to_owned(),
        score,
    })
    .collect()
}
