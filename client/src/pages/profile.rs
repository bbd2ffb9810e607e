//! Profile editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the record with `fetch_profile`, edits a `ProfileDraft`, and on save
//! sends the draft as a `ProfileUpdate` then calls `refresh_profile` so the
//! session (and with it the sidebar and dashboard) picks up the new values.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::app::AppServices;
use crate::components::loading::LoadingPlaceholder;
use crate::components::profile_completion::ProfileCompletion;
use crate::net::api::{ApiError, UserDirectory};
use crate::net::types::{ProfileUpdate, UserRecord};
use crate::state::auth::AuthActions;
use crate::state::session::SessionSnapshot;

/// Editable copy of the profile fields. Missing optionals edit as "".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub full_name: String,
    pub phone_number: String,
    pub profile_image: Option<String>,
    pub bio: String,
    pub skills: String,
    pub linkedin: String,
    pub portfolio: String,
}

impl ProfileDraft {
    pub fn from_record(record: &UserRecord) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            full_name: record.full_name.clone(),
            phone_number: text(&record.phone_number),
            profile_image: record.profile_image.clone(),
            bio: text(&record.bio),
            skills: text(&record.skills),
            linkedin: text(&record.linkedin),
            portfolio: text(&record.portfolio),
        }
    }

    /// Build the update to send. Text fields are always sent so clearing one
    /// sticks; the image is only sent when one is set.
    ///
    /// # Errors
    ///
    /// A blank full name.
    pub fn to_update(&self) -> Result<ProfileUpdate, &'static str> {
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            return Err("Full name cannot be empty.");
        }
        Ok(ProfileUpdate {
            full_name: Some(full_name.to_owned()),
            phone_number: Some(self.phone_number.trim().to_owned()),
            profile_image: self.profile_image.clone(),
            bio: Some(self.bio.clone()),
            skills: Some(self.skills.trim().to_owned()),
            linkedin: Some(self.linkedin.trim().to_owned()),
            portfolio: Some(self.portfolio.trim().to_owned()),
        })
    }
}

/// Send `update` for `email`, then reload the session from the collaborator.
///
/// Once the update itself succeeded the save counts as done: if the reload
/// fails (another auth action in flight, or no session) the result is built
/// by applying `update` to `current` and the failure is only logged.
///
/// # Errors
///
/// The collaborator's error from `update_profile` (`ProfileUpdateFailed`).
pub(crate) async fn save_profile<A: UserDirectory>(
    api: &A,
    auth: &AuthActions<A>,
    email: &str,
    current: UserRecord,
    update: ProfileUpdate,
) -> Result<UserRecord, ApiError> {
    api.update_profile(email, update.clone()).await?;
    match auth.refresh_profile().await {
        Ok(profile) => Ok(profile),
        Err(err) => {
            log::warn!("profile saved but session refresh failed: {err}");
            let mut profile = current;
            update.apply_to(&mut profile);
            Ok(profile)
        }
    }
}

/// Object URL for the file chosen in an `<input type="file">`.
#[cfg(feature = "hydrate")]
fn object_url_from_input(ev: &leptos::ev::Event) -> Option<String> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    web_sys::Url::create_object_url_with_blob(&file).ok()
}

#[cfg(not(feature = "hydrate"))]
fn object_url_from_input(_ev: &leptos::ev::Event) -> Option<String> {
    None
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let session = expect_context::<RwSignal<SessionSnapshot>>();

    let record = RwSignal::new(None::<UserRecord>);
    let draft = RwSignal::new(ProfileDraft::default());
    let loading = RwSignal::new(true);
    let editing = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let modal_open = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let email = session.with_untracked(|s| s.user.as_ref().map(|u| u.email.clone()));
    match email.clone() {
        Some(email) => {
            let api = services.api.clone();
            leptos::task::spawn_local(async move {
                match api.fetch_profile(&email).await {
                    Ok(profile) => {
                        let _ = draft.try_set(ProfileDraft::from_record(&profile));
                        let _ = record.try_set(Some(profile));
                    }
                    Err(err) => {
                        log::error!("failed to load profile: {err}");
                        let _ = error.try_set(err.to_string());
                    }
                }
                let _ = loading.try_set(false);
            });
        }
        None => loading.set(false),
    }

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let (Some(email), Some(current)) = (email.clone(), record.get_untracked()) else {
            return;
        };
        let update = match draft.with_untracked(ProfileDraft::to_update) {
            Ok(update) => update,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        saving.set(true);
        error.set(String::new());

        let api = services.api.clone();
        let auth = services.auth.clone();
        leptos::task::spawn_local(async move {
            match save_profile(&*api, &auth, &email, current, update).await {
                Ok(profile) => {
                    let _ = draft.try_set(ProfileDraft::from_record(&profile));
                    let _ = record.try_set(Some(profile));
                    let _ = editing.try_set(false);
                    let _ = modal_open.try_set(true);
                }
                Err(err) => {
                    log::error!("profile save failed: {err}");
                    let _ = error.try_set(err.to_string());
                }
            }
            let _ = saving.try_set(false);
        });
    };

    let on_cancel = move |_| {
        if let Some(profile) = record.get_untracked() {
            draft.set(ProfileDraft::from_record(&profile));
        }
        editing.set(false);
        error.set(String::new());
    };

    let completion = Signal::derive(move || record.with(|r| r.as_ref().map_or(0, |r| r.profile_completion)));

    view! {
        <div class="profile-page">
            <Show when=move || modal_open.get()>
                <div class="modal">
                    <div class="modal__dialog card">
                        <h3>"Profile Updated!"</h3>
                        <p>"Your changes have been saved successfully."</p>
                        <button class="btn btn--primary" on:click=move |_| modal_open.set(false)>
                            "Close"
                        </button>
                    </div>
                </div>
            </Show>

            <div class="profile-page__header">
                <h2>"My Profile"</h2>
                {move || {
                    if editing.get() {
                        view! {
                            <div class="profile-page__actions">
                                <button class="btn btn--ghost" on:click=on_cancel disabled=move || saving.get()>
                                    "Cancel"
                                </button>
                                <button class="btn btn--primary" on:click=on_save.clone() disabled=move || saving.get()>
                                    {move || if saving.get() { "Saving…" } else { "Save Changes" }}
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <button
                                class="btn btn--primary"
                                disabled=move || record.with(Option::is_none)
                                on:click=move |_| editing.set(true)
                            >
                                "Edit Profile"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </div>

            <Show when=move || !error.get().is_empty()>
                <p class="profile-page__error">{move || error.get()}</p>
            </Show>

            {move || {
                if loading.get() {
                    return view! { <LoadingPlaceholder/> }.into_any();
                }
                let Some(profile) = record.get() else {
                    return ().into_any();
                };
                let initial = profile.full_name.chars().next().unwrap_or('?').to_string();
                view! {
                    <div class="profile-grid">
                        <div class="profile-grid__side">
                            <div class="profile-card card">
                                <div class="profile-card__avatar">
                                    {move || match draft.with(|d| d.profile_image.clone()) {
                                        Some(src) => view! { <img src=src alt="Profile"/> }.into_any(),
                                        None => view! { <span class="profile-card__initial">{initial.clone()}</span> }.into_any(),
                                    }}
                                    <Show when=move || editing.get()>
                                        <input
                                            class="profile-card__upload"
                                            type="file"
                                            accept="image/*"
                                            on:change=move |ev| {
                                                if let Some(url) = object_url_from_input(&ev) {
                                                    draft.update(|d| d.profile_image = Some(url));
                                                }
                                            }
                                        />
                                    </Show>
                                </div>
                                <h3>{move || draft.with(|d| d.full_name.clone())}</h3>
                                <p class="profile-card__email">{profile.email.clone()}</p>
                            </div>
                            <ProfileCompletion completion=completion/>
                        </div>

                        <div class="profile-grid__main">
                            <section class="card">
                                <h3>"Personal Details"</h3>
                                <DraftField label="Full Name" kind="text" draft=draft editing=editing
                                    read=|d| d.full_name.clone() write=|d, v| d.full_name = v/>
                                <label class="field">
                                    <span class="field__label">"Email Address"</span>
                                    <input class="field__input" type="email" prop:value=profile.email.clone() disabled=true/>
                                </label>
                                <DraftField label="Phone Number" kind="tel" draft=draft editing=editing
                                    read=|d| d.phone_number.clone() write=|d, v| d.phone_number = v/>
                            </section>
                            <section class="card">
                                <h3>"Professional Details"</h3>
                                <label class="field">
                                    <span class="field__label">"Professional Summary / Bio"</span>
                                    <textarea
                                        class="field__input"
                                        disabled=move || !editing.get()
                                        prop:value=move || draft.with(|d| d.bio.clone())
                                        on:input=move |ev| draft.update(|d| d.bio = event_target_value(&ev))
                                    ></textarea>
                                </label>
                                <DraftField label="Skills (comma-separated)" kind="text" draft=draft editing=editing
                                    read=|d| d.skills.clone() write=|d, v| d.skills = v/>
                            </section>
                            <section class="card">
                                <h3>"Online Presence"</h3>
                                <DraftField label="LinkedIn Profile URL" kind="url" draft=draft editing=editing
                                    read=|d| d.linkedin.clone() write=|d, v| d.linkedin = v/>
                                <DraftField label="Portfolio / Website URL" kind="url" draft=draft editing=editing
                                    read=|d| d.portfolio.clone() write=|d, v| d.portfolio = v/>
                            </section>
                        </div>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

/// One labelled input bound to a draft field.
#[component]
fn DraftField(
    label: &'static str,
    kind: &'static str,
    draft: RwSignal<ProfileDraft>,
    editing: RwSignal<bool>,
    read: fn(&ProfileDraft) -> String,
    write: fn(&mut ProfileDraft, String),
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                class:field__input--editing=move || editing.get()
                type=kind
                disabled=move || !editing.get()
                prop:value=move || draft.with(read)
                on:input=move |ev| draft.update(|d| write(d, event_target_value(&ev)))
            />
        </label>
    }
}
