//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` is the composition root: it builds the one `SessionStore`, the mock
//! API, and the auth actions, provides them through context, and mirrors
//! every session transition into a `RwSignal<SessionSnapshot>` that guards
//! and the layout switch read.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::LayoutSwitch;
use crate::components::route_guard::{FallbackRedirect, RouteGuard};
use crate::config::ClientConfig;
use crate::net::mock_api::MockApi;
use crate::pages::{
    applications::ApplicationsPage, auth::AuthPage, dashboard::DashboardPage, finder::FinderPage, home::HomePage,
    profile::ProfilePage,
};
use crate::routing::Requirement;
use crate::state::auth::AuthActions;
use crate::state::session::SessionStore;
use crate::util::storage::KeyValueStore;

/// Shared services injected into pages via context.
#[derive(Clone)]
pub struct AppServices {
    pub session: Arc<SessionStore>,
    pub auth: Arc<AuthActions<MockApi>>,
    pub api: Arc<MockApi>,
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn session_storage() -> Arc<dyn KeyValueStore> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(crate::util::storage::BrowserStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(crate::util::storage::MemoryStorage::new())
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::default();
    let session = Arc::new(SessionStore::new(config.session_key.clone(), session_storage()));
    let api = Arc::new(MockApi::new(config.latency));
    let auth = Arc::new(AuthActions::new(Arc::clone(&session), Arc::clone(&api)));

    let snapshot = RwSignal::new(session.get_session());
    let subscription = session.subscribe(move |next| {
        let _ = snapshot.try_set(next.clone());
    });
    on_cleanup(move || drop(subscription));

    // Effects only run in the browser, so SSR output stays in the pending state.
    let restorer = Arc::clone(&session);
    Effect::new(move || {
        restorer.restore();
    });

    provide_context(snapshot);
    provide_context(AppServices { session, auth, api });

    view! {
        <Stylesheet id="leptos" href="/pkg/intern-india.css"/>
        <Title text="Intern India"/>

        <Router>
            <LayoutSwitch/>
        </Router>
    }
}

/// Route table, rendered inside whichever layout is active.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <FallbackRedirect/> }>
            <Route path=StaticSegment("") view=HomePage/>
            <Route
                path=StaticSegment("auth")
                view=|| view! { <RouteGuard requirement=Requirement::Anonymous><AuthPage/></RouteGuard> }
            />
            <Route
                path=StaticSegment("dashboard")
                view=|| view! { <RouteGuard requirement=Requirement::Authenticated><DashboardPage/></RouteGuard> }
            />
            <Route
                path=StaticSegment("find-internships")
                view=|| view! { <RouteGuard requirement=Requirement::Authenticated><FinderPage/></RouteGuard> }
            />
            <Route
                path=StaticSegment("applied-internships")
                view=|| view! { <RouteGuard requirement=Requirement::Authenticated><ApplicationsPage/></RouteGuard> }
            />
            <Route
                path=StaticSegment("profile")
                view=|| view! { <RouteGuard requirement=Requirement::Authenticated><ProfilePage/></RouteGuard> }
            />
        </Routes>
    }
}
