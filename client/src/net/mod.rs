//! Collaborator contracts and their in-memory implementation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the user and opportunity traits, `mock_api` implements both
//! over seeded data, and `types` defines the shared DTOs.

pub mod api;
pub mod mock_api;
pub mod types;
