//! Route guard component and router-backed navigator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps guarded pages in `AppRoutes`. The decision itself is
//! `routing::evaluate`; this component only re-runs it whenever the session
//! snapshot signal changes and renders the matching outcome.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::LoadingPlaceholder;
use crate::routing::history::Navigator;
use crate::routing::{FALLBACK_ROUTE, GuardDecision, Requirement, enforce, evaluate};
use crate::state::session::SessionSnapshot;

/// `Navigator` over the Leptos router; redirects always replace history.
struct RouterNavigator<F> {
    navigate: F,
    pathname: Memo<String>,
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn current_path(&self) -> String {
        self.pathname.get_untracked()
    }

    fn redirect(&self, path: &str) {
        (self.navigate)(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}

fn router_navigator() -> RouterNavigator<impl Fn(&str, NavigateOptions) + Clone + 'static> {
    RouterNavigator { navigate: use_navigate(), pathname: use_location().pathname }
}

/// Render `children` only when `requirement` holds; otherwise show the
/// placeholder and, once the session has loaded, redirect.
#[component]
pub fn RouteGuard(requirement: Requirement, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let navigator = router_navigator();

    let decision = Memo::new(move |_| evaluate(&session.get(), requirement));
    Effect::new(move || {
        let snapshot = session.get();
        enforce(&navigator, &snapshot, requirement);
    });

    move || match decision.get() {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Pending | GuardDecision::Deny(_) => view! { <LoadingPlaceholder/> }.into_any(),
    }
}

/// Sends unknown paths to the home page without leaving a history entry.
#[component]
pub fn FallbackRedirect() -> impl IntoView {
    let navigator = router_navigator();
    Effect::new(move || {
        log::debug!("no route for {}", navigator.current_path());
        navigator.redirect(FALLBACK_ROUTE.path());
    });
    view! { <LoadingPlaceholder/> }
}
