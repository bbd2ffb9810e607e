//! Dashboard: the authenticated landing route.
//!
//! Reads the signed-in user from the session signal; the surrounding guard
//! guarantees a user is present whenever this renders.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::profile_completion::ProfileCompletion;
use crate::net::types::UserRecord;
use crate::routing::AppRoute;
use crate::state::session::SessionSnapshot;

pub(crate) fn greeting(user: Option<&UserRecord>) -> String {
    user.map_or_else(|| "Welcome back!".to_owned(), |u| format!("Welcome back, {}!", u.first_name()))
}

const SHORTCUTS: [(AppRoute, &str, &str); 3] = [
    (AppRoute::FindInternships, "Find Internships", "Answer a few questions and get ranked matches."),
    (AppRoute::AppliedInternships, "My Applications", "See where each application stands."),
    (AppRoute::Profile, "Edit Profile", "Keep your skills and links up to date."),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let completion = Signal::derive(move || {
        session.with(|s| s.user.as_ref().map_or(0, |u| u.profile_completion))
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2>{move || session.with(|s| greeting(s.user.as_ref()))}</h2>
                <p class="dashboard-page__subtitle">"Here is where your internship search stands."</p>
            </header>
            <div class="dashboard-page__grid">
                <ProfileCompletion completion=completion/>
                {SHORTCUTS
                    .into_iter()
                    .map(|(route, title, body)| {
                        view! {
                            <A href=route.path() attr:class="dashboard-card card">
                                <h3>{title}</h3>
                                <p>{body}</p>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
