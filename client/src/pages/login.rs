//! Login page: username + password against the invoice backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only ungated route. Once the auth context reports an authenticated
//! session (restored on load or freshly created here) the page forwards to the
//! dashboard; a failed login keeps the user here with the error inline.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_provider::use_auth;
use crate::net::error::AuthError;
use crate::routes::HOME_PATH;

const MISSING_CREDENTIALS: &str = "Enter both username and password.";

/// Trim the username and require both fields. Passwords are taken verbatim.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// User-facing text for a failed login.
pub(crate) fn login_error_message(err: &AuthError) -> String {
    match err {
        AuthError::Rejected { message, .. } => message.clone(),
        AuthError::Status(401 | 403) => "Invalid username or password.".to_owned(),
        AuthError::Status(status) => format!("Login failed (HTTP {status}). Please try again."),
        AuthError::Network(_) => "Unable to reach the server. Please try again.".to_owned(),
        other => format!("Login failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Covers both an already-restored session and a successful submit.
    Effect::new(move || {
        let state = auth.state.get();
        if !state.is_loading() && state.is_authenticated() {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = auth.login(user, pass).await {
                error.set(Some(login_error_message(&e)));
                password.set(String::new());
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Invoice Portal"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
