//! Profile completion ring with a link to the profile editor.

#[cfg(test)]
#[path = "profile_completion_test.rs"]
mod profile_completion_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::AppRoute;

/// SVG `stroke-dasharray` for a completion percentage on a 100-unit ring.
pub(crate) fn ring_dasharray(completion: u8) -> String {
    format!("{}, 100", completion.min(100))
}

#[component]
pub fn ProfileCompletion(#[prop(into)] completion: Signal<u8>) -> impl IntoView {
    const RING_PATH: &str = "M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831";

    view! {
        <div class="profile-completion card">
            <h4 class="profile-completion__title">"Profile Completion"</h4>
            <p class="profile-completion__hint">"Complete your profile for better matches."</p>
            <div class="profile-completion__body">
                <div class="profile-completion__ring">
                    <svg viewBox="0 0 36 36">
                        <path class="profile-completion__track" stroke-width="3" fill="none" d=RING_PATH/>
                        <path
                            class="profile-completion__value"
                            stroke-width="3"
                            fill="none"
                            stroke-linecap="round"
                            stroke-dasharray=move || ring_dasharray(completion.get())
                            d=RING_PATH
                        />
                    </svg>
                    <span class="profile-completion__label">{move || format!("{}%", completion.get().min(100))}</span>
                </div>
                <A href=AppRoute::Profile.path() attr:class="profile-completion__link">
                    "Update Profile"
                </A>
            </div>
        </div>
    }
}
