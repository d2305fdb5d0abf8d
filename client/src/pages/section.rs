//! Placeholder body for sections whose screens live outside this shell.

use leptos::prelude::*;

use crate::routes::RouteSpec;

#[component]
pub fn SectionPage(route: RouteSpec) -> impl IntoView {
    view! {
        <section class="section-page">
            <h2>{route.title}</h2>
            <p class="section-page__empty">"Nothing to show here yet."</p>
        </section>
    }
}
