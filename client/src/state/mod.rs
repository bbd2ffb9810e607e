//! Session state and the actions that change it.

pub mod auth;
pub mod session;
