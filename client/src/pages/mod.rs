//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped async work (collaborator calls, local
//! form state) and delegates shared widgets to `components`.

pub mod applications;
pub mod auth;
pub mod dashboard;
pub mod finder;
pub mod home;
pub mod profile;
