//! Top-level error boundary around routed content.
//!
//! Catches render-time errors only. Network failures are toasted by the
//! request layer and probe failures are handled by the route guard.

use leptos::prelude::*;

/// Full page reload. No-op outside the browser.
pub fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

#[component]
pub fn AppErrorBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            let listed = errors.clone();
            view! {
                <div class="error-panel">
                    <h2>"Something went wrong"</h2>
                    <ul class="error-panel__list">
                        {move || {
                            listed
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect_view()
                        }}
                    </ul>
                    <div class="error-panel__actions">
                        <button class="btn btn--primary" on:click=move |_| reload_page()>
                            "Reload page"
                        </button>
                        <button class="btn" on:click=move |_| errors.set(Errors::default())>
                            "Try again"
                        </button>
                    </div>
                </div>
            }
        }>
            {children()}
        </ErrorBoundary>
    }
}
