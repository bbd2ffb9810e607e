//! Pill showing an application's review stage.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::net::types::ApplicationStatus;

/// CSS modifier class for a status.
pub(crate) fn status_modifier(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Applied => "status-badge--applied",
        ApplicationStatus::UnderReview => "status-badge--review",
        ApplicationStatus::Shortlisted => "status-badge--shortlisted",
        ApplicationStatus::Rejected => "status-badge--rejected",
    }
}

#[component]
pub fn StatusBadge(status: ApplicationStatus) -> impl IntoView {
    view! {
        <span class=format!("status-badge {}", status_modifier(status))>{status.label()}</span>
    }
}
