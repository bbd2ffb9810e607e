//! Neutral loading placeholder shown while guarded content is unavailable.

use leptos::prelude::*;

#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner"></div>
        </div>
    }
}
