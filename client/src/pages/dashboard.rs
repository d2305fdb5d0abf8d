//! Dashboard page: greeting plus shortcuts into the sections the role can open.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::auth_provider::use_auth;
use crate::routes::{HOME_PATH, RouteSpec, navigation_for};
use crate::state::role::Role;

/// Navigation entries for `role`, minus the dashboard itself.
pub(crate) fn quick_links(role: Role) -> Vec<&'static RouteSpec> {
    navigation_for(role).into_iter().filter(|route| route.path != HOME_PATH).collect()
}

/// Greeting line; falls back to the role label when no display name is stored.
pub(crate) fn greeting(display_name: Option<&str>, role: Role) -> String {
    match display_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("Welcome back, {name}"),
        None => format!("Welcome back, {}", role.label()),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        {move || {
            let state = auth.state.get();
            state.user_role().map(|role| {
                let heading = greeting(state.display_name.as_deref(), role);
                let links = quick_links(role)
                    .into_iter()
                    .map(|route| {
                        view! {
                            <li class="dashboard-card">
                                <A href=route.path>{route.title}</A>
                            </li>
                        }
                    })
                    .collect_view();
                view! {
                    <section class="dashboard">
                        <h2 class="dashboard__greeting">{heading}</h2>
                        <p class="dashboard__role">{format!("Signed in as {}", role.label())}</p>
                        <ul class="dashboard__links">{links}</ul>
                    </section>
                }
            })
        }}
    }
}
