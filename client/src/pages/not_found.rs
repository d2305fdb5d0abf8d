use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::LOGIN_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <A href=LOGIN_PATH>"Back to sign in"</A>
        </div>
    }
}
