//! Client configuration: durable session key and mock API latency.
//!
//! DESIGN
//! ======
//! Values are fixed at build time; `Default` reproduces the shipped behavior
//! and tests construct zero-latency variants explicitly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// `localStorage` key holding the serialized session user.
pub const DEFAULT_SESSION_KEY: &str = "internUser";

/// Simulated network latency per mock API operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockLatency {
    pub login: Duration,
    pub register: Duration,
    pub profile: Duration,
    pub update_profile: Duration,
    pub find_internships: Duration,
    pub list_applications: Duration,
    pub apply: Duration,
}

impl MockLatency {
    /// No artificial delay on any operation.
    pub const fn none() -> Self {
        Self {
            login: Duration::ZERO,
            register: Duration::ZERO,
            profile: Duration::ZERO,
            update_profile: Duration::ZERO,
            find_internships: Duration::ZERO,
            list_applications: Duration::ZERO,
            apply: Duration::ZERO,
        }
    }
}

impl Default for MockLatency {
    fn default() -> Self {
        Self {
            login: Duration::from_millis(1000),
            register: Duration::from_millis(1000),
            profile: Duration::from_millis(500),
            update_profile: Duration::from_millis(800),
            find_internships: Duration::from_millis(1500),
            list_applications: Duration::from_millis(700),
            apply: Duration::from_millis(600),
        }
    }
}

/// Top-level client configuration provided to the composition root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub session_key: String,
    pub latency: MockLatency,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { session_key: DEFAULT_SESSION_KEY.to_owned(), latency: MockLatency::default() }
    }
}
