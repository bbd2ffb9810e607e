//! Navigation sidebar for the authenticated shell.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppServices;
use crate::routing::AppRoute;

/// Sidebar entries in display order.
pub(crate) const NAV_ITEMS: [(AppRoute, &str); 4] = [
    (AppRoute::Dashboard, "Dashboard"),
    (AppRoute::FindInternships, "Find"),
    (AppRoute::AppliedInternships, "Applications"),
    (AppRoute::Profile, "Profile"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        services.auth.logout();
        navigate(AppRoute::Home.path(), NavigateOptions::default());
    };

    view! {
        <aside class="sidebar">
            <A href=AppRoute::Dashboard.path() attr:class="sidebar__brand">
                <img src="/emblem.png" alt="Emblem of India" class="sidebar__emblem"/>
                <span class="sidebar__title">"Intern India"</span>
            </A>
            <nav class="sidebar__nav">
                <ul>
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(route, label)| {
                            view! {
                                <li>
                                    <A href=route.path() attr:class="sidebar__link">
                                        <span>{label}</span>
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            <button class="sidebar__logout" on:click=on_logout>
                "Logout"
            </button>
        </aside>
    }
}
