//! Header for the public shell with sign-in and register entries.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::pages::auth::REGISTER_HREF;
use crate::routing::AppRoute;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <A href=AppRoute::Home.path() attr:class="site-header__brand">
                    <img src="/emblem.png" alt="Emblem of India" class="site-header__emblem"/>
                    <span class="site-header__title">"Intern India"</span>
                </A>
                <div class="site-header__actions">
                    <A href=AppRoute::Auth.path() attr:class="btn btn--ghost">
                        "Login"
                    </A>
                    <A href=REGISTER_HREF attr:class="btn btn--primary">
                        "Register"
                    </A>
                </div>
            </div>
        </header>
    }
}
