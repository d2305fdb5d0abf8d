//! Guarded route wrapper: the role check, then the app chrome.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;

use super::auth_provider::use_auth;
use super::layout::AppShell;
use crate::routes::RouteSpec;
use crate::util::guard::{GuardDecision, decide};

/// Render `children` inside the app shell only when the current role is in
/// `route.allowed`; otherwise redirect to login. The shell itself is only
/// mounted after the check passes, so a signed-out user never sees the
/// sidebar. Re-evaluated whenever auth state changes.
#[component]
pub fn ProtectedRoute(route: RouteSpec, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    // Only a changed decision remounts the shell.
    let decision = Memo::new(move |_| decide(&auth.state.get(), route.allowed));

    move || match decision.get() {
        GuardDecision::Pending => view! { <div class="app-loading">"Loading..."</div> }.into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        GuardDecision::Render => {
            let children = children.clone();
            view! { <AppShell title=route.title>{children()}</AppShell> }.into_any()
        }
    }
}
