//! Shared chrome for authenticated routes: sidebar, header, footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell renders a neutral placeholder until the auth context has read
//! storage, so no page (and no role-filtered navigation) is drawn from a
//! half-initialized state.

use leptos::prelude::*;
use leptos_router::components::A;

use super::auth_provider::use_auth;
use crate::routes::navigation_for;

/// Chrome wrapper; blocks rendering while auth is loading.
#[component]
pub fn AppShell(title: &'static str, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || !auth.state.get().is_loading()
            fallback=|| view! { <div class="app-loading">"Loading..."</div> }
        >
            <div class="app-shell">
                <Sidebar/>
                <div class="app-shell__main">
                    <Header title=title/>
                    <main class="app-shell__content">{children()}</main>
                    <Footer/>
                </div>
            </div>
        </Show>
    }
}

/// Navigation filtered to the routes the current role may open.
#[component]
fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let entries = move || auth.state.get().user_role().map(navigation_for).unwrap_or_default();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Invoice Portal"</div>
            <ul class="sidebar__list">
                {move || {
                    entries()
                        .into_iter()
                        .map(|route| {
                            view! {
                                <li class="sidebar__item">
                                    <A href=route.path>{route.title}</A>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}

#[component]
fn Header(title: &'static str) -> impl IntoView {
    let auth = use_auth();
    let who = move || {
        let state = auth.state.get();
        let name = state.display_name.clone().unwrap_or_default();
        let role = state.user_role().map(|r| r.label()).unwrap_or_default();
        (name, role)
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(auth.logout());
    };

    view! {
        <header class="app-header">
            <h1 class="app-header__title">{title}</h1>
            <span class="app-header__spacer"></span>
            <span class="app-header__user">
                {move || who().0}
                " ("
                <span class="app-header__role">{move || who().1}</span>
                ")"
            </span>
            <button class="btn app-header__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! { <footer class="app-footer">"Invoice Portal · Accounts Payable"</footer> }
}
