//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render layout chrome, guards and small widgets while reading
//! the session snapshot and `AppServices` from Leptos context.

pub mod header;
pub mod layout;
pub mod loading;
pub mod profile_completion;
pub mod route_guard;
pub mod sidebar;
pub mod status_badge;
