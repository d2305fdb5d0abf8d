//! One-shot notice banner.

use leptos::prelude::*;

use crate::state::ui::NoticeState;

#[cfg(feature = "hydrate")]
const AUTO_DISMISS: std::time::Duration = std::time::Duration::from_secs(5);

/// Shows the current notice; dismissed by click or after a few seconds.
#[component]
pub fn Toast() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let state = notices.get();
        if state.current.is_none() {
            return;
        }
        let seq = state.seq;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(AUTO_DISMISS).await;
            notices.update(|n| n.dismiss(seq));
        });
    });

    view! {
        {move || {
            let state = notices.get();
            state.current.map(|notice| {
                let seq = state.seq;
                view! {
                    <div class="toast" role="status">
                        <span class="toast__message">{notice.message}</span>
                        <button
                            class="toast__close"
                            title="Dismiss"
                            on:click=move |_| notices.update(|n| n.dismiss(seq))
                        >
                            "×"
                        </button>
                    </div>
                }
            })
        }}
    }
}
