//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::pages::auth::REGISTER_HREF;
use crate::routing::AppRoute;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Smart Matching", "Listings are ranked against your background and sector preferences."),
    ("One Profile", "Keep your details in one place and reuse them for every application."),
    ("Track Progress", "Follow each application from submission to shortlist."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Find the internship that fits you"</h1>
                <p class="hero__subtitle">
                    "Government and public-sector internships, matched to your skills and goals."
                </p>
                <div class="hero__actions">
                    <A href=REGISTER_HREF attr:class="btn btn--primary">
                        "Get Started"
                    </A>
                    <A href=AppRoute::Auth.path() attr:class="btn btn--ghost">
                        "I already have an account"
                    </A>
                </div>
            </section>
            <section class="highlights">
                {HIGHLIGHTS
                    .into_iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="highlights__card card">
                                <h3>{title}</h3>
                                <p>{body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
