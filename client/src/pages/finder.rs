//! Internship finder: a three-step preferences wizard with tracked results.
//!
//! SYSTEM CONTEXT
//! ==============
//! Step one collects background, step two sectors and a resume, step three
//! shows matches from `find_internships`. Listings already tracked (seeded
//! from `list_applications` on mount) render a disabled button.

#[cfg(test)]
#[path = "finder_test.rs"]
mod finder_test;

use std::collections::HashSet;

use leptos::prelude::*;

use crate::app::AppServices;
use crate::net::api::OpportunityDirectory;
use crate::net::types::{Internship, SearchPreferences};
use crate::state::session::SessionSnapshot;

pub(crate) const SECTORS: [&str; 6] = ["Technology", "E-commerce", "Analytics", "Marketing", "Design", "Finance"];
pub(crate) const SOCIAL_CATEGORIES: [&str; 5] = ["General", "OBC", "SC", "ST", "EWS"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Background,
    Profession,
    Results,
}

impl WizardStep {
    pub const ALL: [Self; 3] = [Self::Background, Self::Profession, Self::Results];

    pub const fn next(self) -> Self {
        match self {
            Self::Background => Self::Profession,
            Self::Profession | Self::Results => Self::Results,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            Self::Background | Self::Profession => Self::Background,
            Self::Results => Self::Profession,
        }
    }

    /// One-based position for the step indicator.
    pub const fn number(self) -> u8 {
        match self {
            Self::Background => 1,
            Self::Profession => 2,
            Self::Results => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Profession => "Profession",
            Self::Results => "Results",
        }
    }
}

/// File name from a file input's value (browsers report `C:\fakepath\...`).
pub(crate) fn file_name_from_input(value: &str) -> Option<String> {
    let name = value.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    (!name.is_empty()).then(|| name.to_owned())
}

pub(crate) fn validate_search(resume: Option<&str>) -> Result<(), &'static str> {
    match resume {
        Some(_) => Ok(()),
        None => Err("Please upload your resume to proceed."),
    }
}

#[component]
pub fn FinderPage() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let session = expect_context::<RwSignal<SessionSnapshot>>();

    let step = RwSignal::new(WizardStep::default());
    let preferences = RwSignal::new(SearchPreferences::default());
    let resume = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let matches = RwSignal::new(Vec::<Internship>::new());
    let applied_ids = RwSignal::new(HashSet::<u32>::new());

    if let Some(email) = session.with_untracked(|s| s.user.as_ref().map(|u| u.email.clone())) {
        let api = services.api.clone();
        leptos::task::spawn_local(async move {
            match api.list_applications(&email).await {
                Ok(apps) => {
                    let _ = applied_ids.try_set(apps.iter().map(|a| a.id()).collect());
                }
                Err(err) => log::warn!("could not load tracked applications: {err}"),
            }
        });
    }

    let search_api = services.api.clone();
    let on_search = move |_| {
        if submitting.get_untracked() {
            return;
        }
        if let Err(message) = validate_search(resume.get_untracked().as_deref()) {
            error.set(message.to_owned());
            return;
        }
        submitting.set(true);
        error.set(String::new());
        matches.set(Vec::new());
        let api = search_api.clone();
        let prefs = preferences.get_untracked();
        leptos::task::spawn_local(async move {
            match api.find_internships(&prefs).await {
                Ok(found) => {
                    let _ = matches.try_set(found);
                    let _ = step.try_update(|s| *s = s.next());
                }
                Err(_) => {
                    let _ = error.try_set("An error occurred. Please try again.".to_owned());
                }
            }
            let _ = submitting.try_set(false);
        });
    };

    let apply_api = services.api.clone();
    let on_apply = Callback::new(move |internship_id: u32| {
        let api = apply_api.clone();
        leptos::task::spawn_local(async move {
            match api.apply(internship_id).await {
                Ok(_) => {
                    let _ = applied_ids.try_update(|ids| ids.insert(internship_id));
                }
                Err(err) => log::error!("failed to apply to {internship_id}: {err}"),
            }
        });
    });

    view! {
        <div class="finder-page">
            <header class="finder-page__header">
                <h2>"Find Internships"</h2>
                <ol class="finder-steps">
                    {WizardStep::ALL
                        .into_iter()
                        .map(|s| {
                            view! {
                                <li
                                    class="finder-steps__item"
                                    class:finder-steps__item--done={move || step.get().number() >= s.number()}
                                >
                                    <span class="finder-steps__number">{s.number()}</span>
                                    <span class="finder-steps__name">{s.name()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </header>

            <Show when=move || step.get() == WizardStep::Background>
                <BackgroundStep preferences=preferences/>
                <div class="finder-page__nav">
                    <button class="btn btn--primary" on:click=move |_| step.update(|s| *s = s.next())>
                        "Next"
                    </button>
                </div>
            </Show>

            <Show when=move || step.get() == WizardStep::Profession>
                <ProfessionStep preferences=preferences resume=resume/>
                <Show when=move || !error.get().is_empty()>
                    <p class="finder-page__error">{move || error.get()}</p>
                </Show>
                <div class="finder-page__nav">
                    <button class="btn btn--ghost" on:click=move |_| step.update(|s| *s = s.prev())>
                        "Back"
                    </button>
                    <button class="btn btn--primary" on:click=on_search.clone() disabled=move || submitting.get()>
                        {move || if submitting.get() { "Searching…" } else { "Find Matches" }}
                    </button>
                </div>
            </Show>

            <Show when=move || step.get() == WizardStep::Results>
                <div class="finder-results">
                    <h3>{move || format!("{} matches found", matches.with(Vec::len))}</h3>
                    <For each=move || matches.get() key=|m| m.id let:internship>
                        <MatchCard internship=internship applied_ids=applied_ids on_apply=on_apply/>
                    </For>
                    <button class="btn btn--ghost" on:click=move |_| step.update(|s| *s = s.prev())>
                        "Refine preferences"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn BackgroundStep(preferences: RwSignal<SearchPreferences>) -> impl IntoView {
    view! {
        <div class="finder-step card">
            <label class="field">
                <span class="field__label">"Location Preference"</span>
                <input
                    class="field__input"
                    type="text"
                    placeholder="e.g., Remote, Delhi"
                    prop:value=move || preferences.with(|p| p.locations.clone())
                    on:input=move |ev| preferences.update(|p| p.locations = event_target_value(&ev))
                />
            </label>
            <label class="field field--inline">
                <input
                    type="checkbox"
                    prop:checked=move || preferences.with(|p| p.is_rural)
                    on:change=move |ev| preferences.update(|p| p.is_rural = event_target_checked(&ev))
                />
                <span class="field__label">"I am from a rural area"</span>
            </label>
            <label class="field">
                <span class="field__label">"Social Category"</span>
                <select
                    class="field__input"
                    prop:value=move || preferences.with(|p| p.social_category.clone())
                    on:change=move |ev| preferences.update(|p| p.social_category = event_target_value(&ev))
                >
                    <option value="" disabled=true>"Select Social Category..."</option>
                    {SOCIAL_CATEGORIES
                        .into_iter()
                        .map(|cat| view! { <option value=cat>{cat}</option> })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}

#[component]
fn ProfessionStep(preferences: RwSignal<SearchPreferences>, resume: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <div class="finder-step card">
            <span class="field__label">"Preferred Sectors"</span>
            <div class="sector-picker">
                {SECTORS
                    .into_iter()
                    .map(|sector| {
                        view! {
                            <button
                                class="sector-picker__chip"
                                class:sector-picker__chip--active=move || preferences.with(|p| p.has_sector(sector))
                                on:click=move |_| preferences.update(|p| p.toggle_sector(sector))
                            >
                                {sector}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <label class="field">
                <span class="field__label">"Upload Resume"</span>
                <input
                    class="field__input"
                    type="file"
                    accept=".pdf,.doc,.docx"
                    on:change=move |ev| resume.set(file_name_from_input(&event_target_value(&ev)))
                />
                <Show when=move || resume.with(Option::is_some)>
                    <span class="field__hint">{move || resume.get().unwrap_or_default()}</span>
                </Show>
            </label>
        </div>
    }
}

#[component]
fn MatchCard(internship: Internship, applied_ids: RwSignal<HashSet<u32>>, on_apply: Callback<u32>) -> impl IntoView {
    let id = internship.id;
    let applied = move || applied_ids.with(|ids| ids.contains(&id));

    view! {
        <div class="match-card card">
            <div class="match-card__info">
                <h4>{internship.title.clone()}</h4>
                <p class="match-card__meta">
                    <span>{internship.company.clone()}</span>
                    <span>{internship.location.clone()}</span>
                </p>
            </div>
            <span class="match-card__score">{format!("{}% match", internship.score_percent())}</span>
            <button class="btn btn--primary" disabled=applied on:click=move |_| on_apply.run(id)>
                {move || if applied() { "Tracked" } else { "Track Application" }}
            </button>
        </div>
    }
}
