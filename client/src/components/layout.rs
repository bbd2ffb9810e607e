//! Layout switch between the public and authenticated shells.
//!
//! DESIGN
//! ======
//! The choice depends on `is_authenticated` alone, never on `loading`; the
//! outer shell may show the public variant while the session restores, but
//! guarded page content never renders early because `RouteGuard` blocks it.
//! Exactly one shell is mounted at a time and switching rebuilds the route
//! tree inside it, so no page state survives a sign-in or sign-out.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;

use crate::app::AppRoutes;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::state::session::SessionSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    /// Header + full-width content.
    Public,
    /// Persistent sidebar + scrolling content.
    Authenticated,
}

impl LayoutKind {
    pub fn for_snapshot(snapshot: &SessionSnapshot) -> Self {
        if snapshot.is_authenticated() { Self::Authenticated } else { Self::Public }
    }
}

#[component]
pub fn LayoutSwitch() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let layout = Memo::new(move |_| LayoutKind::for_snapshot(&session.get()));

    move || match layout.get() {
        LayoutKind::Authenticated => view! { <AppLayout/> }.into_any(),
        LayoutKind::Public => view! { <PublicLayout/> }.into_any(),
    }
}

#[component]
fn AppLayout() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar/>
            <div class="app-layout__content">
                <div class="app-layout__page">
                    <AppRoutes/>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PublicLayout() -> impl IntoView {
    view! {
        <div class="public-layout">
            <Header/>
            <main class="public-layout__main">
                <AppRoutes/>
            </main>
        </div>
    }
}
