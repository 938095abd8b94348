//! Toast stack fed by `state::notifications`.

use leptos::prelude::*;

use crate::state::notifications::{Notice, Notifications};

#[component]
pub fn ToastHost() -> impl IntoView {
    let notices = expect_context::<Notifications>();
    let state = notices.state();

    view! {
        <div class="toast-host" aria-live="polite">
            <For each=move || state.get().items key=|n| n.id.clone() let:notice>
                <Toast notice=notice notices=notices/>
            </For>
        </div>
    }
}

/// One toast. Dismisses itself after the notice TTL.
#[component]
fn Toast(notice: Notice, notices: Notifications) -> impl IntoView {
    let Notice { id, level, message } = notice;

    #[cfg(feature = "hydrate")]
    {
        let id = id.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::notifications::TOAST_TTL_MS).await;
            notices.dismiss(&id);
        });
    }

    view! {
        <div class=level.css_class() role="status">
            <span class="toast__message">{message}</span>
            <button class="toast__close" title="Dismiss" on:click=move |_| notices.dismiss(&id)>
                "×"
            </button>
        </div>
    }
}
