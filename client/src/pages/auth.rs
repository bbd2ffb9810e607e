//! Auth page: login and registration forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind the `Anonymous` guard. Submits through `AuthActions`; the
//! guard takes care of leaving this page once the session turns
//! authenticated, the explicit navigate only makes the target explicit.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::AppServices;
use crate::net::types::NewUser;
use crate::routing::AppRoute;

/// Link target that opens the form in registration mode.
pub const REGISTER_HREF: &str = "/auth?mode=register";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    /// Initial mode from the `mode` query parameter.
    pub fn from_query(mode: Option<&str>) -> Self {
        match mode {
            Some("register") => Self::Register,
            _ => Self::Login,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Welcome Back",
            Self::Register => "Create Your Account",
        }
    }

    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Create Account",
        }
    }
}

/// Raw form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// A validated submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    Login { email: String, password: String },
    Register(NewUser),
}

/// Check the form for `mode`, trimming the name and email.
pub(crate) fn validate_auth_form(mode: AuthMode, form: &AuthForm) -> Result<AuthRequest, &'static str> {
    let email = form.email.trim().to_owned();
    if email.is_empty() || form.password.is_empty() {
        return Err("Enter your email and password.");
    }
    match mode {
        AuthMode::Login => Ok(AuthRequest::Login { email, password: form.password.clone() }),
        AuthMode::Register => {
            let full_name = form.full_name.trim().to_owned();
            if full_name.is_empty() {
                return Err("Enter your full name.");
            }
            if form.password != form.confirm_password {
                return Err("Passwords do not match.");
            }
            Ok(AuthRequest::Register(NewUser { full_name, email, password: form.password.clone() }))
        }
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let navigate = use_navigate();
    let query = use_query_map();

    let mode = RwSignal::new(AuthMode::from_query(query.get_untracked().get("mode").as_deref()));
    let form = RwSignal::new(AuthForm::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let switch_mode = move |next: AuthMode| {
        mode.set(next);
        form.set(AuthForm::default());
        error.set(String::new());
    };

    let edit = move |apply: fn(&mut AuthForm, String), value: String| {
        form.update(|f| apply(f, value));
        error.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_auth_form(mode.get_untracked(), &form.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let auth = services.auth.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = match request {
                AuthRequest::Login { email, password } => auth.login(&email, &password).await,
                AuthRequest::Register(new_user) => auth.register(new_user).await,
            };
            match result {
                Ok(_) => navigate(AppRoute::Dashboard.path(), NavigateOptions::default()),
                Err(err) => {
                    let _ = error.try_set(err.to_string());
                }
            }
            let _ = busy.try_set(false);
        });
    };

    let is_register = move || mode.get() == AuthMode::Register;

    view! {
        <div class="auth-page">
            <div class="auth-card card">
                <h2 class="auth-card__title">{move || mode.get().title()}</h2>
                <div class="auth-card__tabs">
                    <button
                        class="auth-card__tab"
                        class:auth-card__tab--active=move || mode.get() == AuthMode::Login
                        on:click=move |_| switch_mode(AuthMode::Login)
                    >
                        "Login"
                    </button>
                    <button
                        class="auth-card__tab"
                        class:auth-card__tab--active=is_register
                        on:click=move |_| switch_mode(AuthMode::Register)
                    >
                        "Register"
                    </button>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=is_register>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Full Name"
                            prop:value=move || form.get().full_name
                            on:input=move |ev| edit(|f, v| f.full_name = v, event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email Address"
                        prop:value=move || form.get().email
                        on:input=move |ev| edit(|f, v| f.email = v, event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.get().password
                        on:input=move |ev| edit(|f, v| f.password = v, event_target_value(&ev))
                    />
                    <Show when=is_register>
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Confirm Password"
                            prop:value=move || form.get().confirm_password
                            on:input=move |ev| edit(|f, v| f.confirm_password = v, event_target_value(&ev))
                        />
                    </Show>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Please wait…" } else { mode.get().submit_label() }}
                    </button>
                </form>
            </div>
        </div>
    }
}
