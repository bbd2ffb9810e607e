//! Route table and guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `evaluate` is the single place that decides whether a guarded route may
//! render. The `RouteGuard` component calls it on every session change and
//! hands `Deny` outcomes to a `Navigator`, which redirects with history
//! replacement.
//!
//! DESIGN
//! ======
//! Guards are pure functions of the current snapshot. While the session is
//! still loading every guarded route is `Pending`, so neither guarded content
//! nor a redirect can appear before restore has finished.


pub mod history;

use crate::state::session::SessionSnapshot;

/// Every routable page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Auth,
    Dashboard,
    FindInternships,
    AppliedInternships,
    Profile,
}

impl AppRoute {
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Auth,
        Self::Dashboard,
        Self::FindInternships,
        Self::AppliedInternships,
        Self::Profile,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Auth => "/auth",
            Self::Dashboard => "/dashboard",
            Self::FindInternships => "/find-internships",
            Self::AppliedInternships => "/applied-internships",
            Self::Profile => "/profile",
        }
    }

    /// Match a location path, ignoring query, fragment, and a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Guard attached to this route, if any.
    pub const fn requirement(self) -> Option<Requirement> {
        match self {
            Self::Home => None,
            Self::Auth => Some(Requirement::Anonymous),
            Self::Dashboard | Self::FindInternships | Self::AppliedInternships | Self::Profile => {
                Some(Requirement::Authenticated)
            }
        }
    }
}

/// Session predicate a guarded route requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// `RequiresAuth`: only signed-in users.
    Authenticated,
    /// `RequiresAnonymous`: only signed-out users (the auth form).
    Anonymous,
}

impl Requirement {
    pub fn is_satisfied(self, snapshot: &SessionSnapshot) -> bool {
        match self {
            Self::Authenticated => snapshot.is_authenticated(),
            Self::Anonymous => !snapshot.is_authenticated(),
        }
    }

    /// Where a denied visitor is sent.
    pub const fn redirect_target(self) -> AppRoute {
        match self {
            Self::Authenticated => AppRoute::Auth,
            Self::Anonymous => AppRoute::Dashboard,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still restoring: show the neutral placeholder.
    Pending,
    Allow,
    /// Redirect (replacing history) to the given route.
    Deny(AppRoute),
}

pub fn evaluate(snapshot: &SessionSnapshot, requirement: Requirement) -> GuardDecision {
    if snapshot.loading {
        GuardDecision::Pending
    } else if requirement.is_satisfied(snapshot) {
        GuardDecision::Allow
    } else {
        GuardDecision::Deny(requirement.redirect_target())
    }
}

/// Evaluate and, on `Deny`, redirect through `navigator`.
pub fn enforce(
    navigator: &impl history::Navigator,
    snapshot: &SessionSnapshot,
    requirement: Requirement,
) -> GuardDecision {
    let decision = evaluate(snapshot, requirement);
    if let GuardDecision::Deny(target) = decision {
        log::debug!("guard denied {} -> {}", navigator.current_path(), target.path());
        navigator.redirect(target.path());
    }
    decision
}

/// Where an unmatched path is sent (with replacement).
pub const FALLBACK_ROUTE: AppRoute = AppRoute::Home;
