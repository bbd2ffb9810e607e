//! Application tracker board.
//!
//! Three status columns over one ordered list. Dragging a card onto another
//! moves it to that card's position in the list; the columns are filtered
//! views, so order within a column follows list order.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppServices;
use crate::components::loading::LoadingPlaceholder;
use crate::components::status_badge::StatusBadge;
use crate::net::api::OpportunityDirectory;
use crate::net::types::{Application, ApplicationStatus};
use crate::routing::AppRoute;
use crate::state::session::SessionSnapshot;

/// Statuses that get a column, left to right.
pub(crate) const BOARD_COLUMNS: [ApplicationStatus; 3] =
    [ApplicationStatus::Applied, ApplicationStatus::UnderReview, ApplicationStatus::Shortlisted];

/// Move the element at `from` to index `to`, shifting the ones between.
pub(crate) fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Drop `active` onto `over`. Returns whether the order changed.
pub(crate) fn reorder_by_id(apps: &mut Vec<Application>, active: u32, over: u32) -> bool {
    if active == over {
        return false;
    }
    let from = apps.iter().position(|a| a.id() == active);
    let to = apps.iter().position(|a| a.id() == over);
    match (from, to) {
        (Some(from), Some(to)) => {
            move_item(apps, from, to);
            true
        }
        _ => false,
    }
}

pub(crate) fn column_items(apps: &[Application], status: ApplicationStatus) -> Vec<Application> {
    apps.iter().filter(|a| a.status == status).cloned().collect()
}

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let session = expect_context::<RwSignal<SessionSnapshot>>();

    let applications = RwSignal::new(Vec::<Application>::new());
    let loading = RwSignal::new(true);
    let dragging = RwSignal::new(None::<u32>);

    match session.with_untracked(|s| s.user.as_ref().map(|u| u.email.clone())) {
        Some(email) => {
            let api = services.api.clone();
            leptos::task::spawn_local(async move {
                match api.list_applications(&email).await {
                    Ok(apps) => {
                        let _ = applications.try_set(apps);
                    }
                    Err(err) => log::error!("failed to load applications: {err}"),
                }
                let _ = loading.try_set(false);
            });
        }
        None => loading.set(false),
    }

    let on_drop = Callback::new(move |over: u32| {
        if let Some(active) = dragging.get_untracked() {
            applications.update(|apps| {
                reorder_by_id(apps, active, over);
            });
        }
        dragging.set(None);
    });

    view! {
        <div class="applications-page">
            <h2>"Application Tracker"</h2>
            <p class="applications-page__subtitle">"Visually track your internship applications."</p>
            {move || {
                if loading.get() {
                    view! { <LoadingPlaceholder/> }.into_any()
                } else if applications.with(Vec::is_empty) {
                    view! {
                        <div class="applications-empty card">
                            <p>"You haven't applied for any internships yet."</p>
                            <A href=AppRoute::FindInternships.path() attr:class="btn btn--primary">
                                "Find Internships"
                            </A>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="board">
                            {BOARD_COLUMNS
                                .into_iter()
                                .map(|status| {
                                    view! {
                                        <BoardColumn
                                            status=status
                                            applications=applications
                                            dragging=dragging
                                            on_drop=on_drop
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn BoardColumn(
    status: ApplicationStatus,
    applications: RwSignal<Vec<Application>>,
    dragging: RwSignal<Option<u32>>,
    on_drop: Callback<u32>,
) -> impl IntoView {
    let items = Memo::new(move |_| applications.with(|apps| column_items(apps, status)));

    view! {
        <div class="board__column card">
            <h3 class="board__title">{move || format!("{} ({})", status.label(), items.with(Vec::len))}</h3>
            <For each=move || items.get() key=Application::id let:app>
                <BoardCard app=app dragging=dragging on_drop=on_drop/>
            </For>
        </div>
    }
}

#[component]
fn BoardCard(app: Application, dragging: RwSignal<Option<u32>>, on_drop: Callback<u32>) -> impl IntoView {
    let id = app.id();

    view! {
        <div
            class="board-card"
            class:board-card--dragging=move || dragging.get() == Some(id)
            draggable="true"
            on:dragstart=move |_| dragging.set(Some(id))
            on:dragend=move |_| dragging.set(None)
            on:dragover=move |ev| ev.prevent_default()
            on:drop=move |ev| {
                ev.prevent_default();
                on_drop.run(id);
            }
        >
            <div class="board-card__head">
                <h4>{app.internship.title.clone()}</h4>
                <StatusBadge status=app.status/>
            </div>
            <p class="board-card__company">{app.internship.company.clone()}</p>
            <p class="board-card__date">{format!("Applied {}", app.date_applied)}</p>
        </div>
    }
}
