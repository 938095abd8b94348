//! Self-service registration page.
//!
//! While the system has no administrator the page shows a banner pointing
//! at the bootstrap form instead of letting people register into an empty
//! system unnoticed.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::RegisterRequest;
use crate::routes;
use crate::state::system_status::SystemStatusProber;
use crate::util::validation::{ValidationError, validate_register};

fn register_request(username: &str, password: &str, confirm: &str) -> Result<RegisterRequest, ValidationError> {
    validate_register(username, password, confirm)?;
    Ok(RegisterRequest { username: username.trim().to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let prober = expect_context::<SystemStatusProber>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let api = crate::net::request::ApiClient::from_context();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let uninitialized = move || prober.status().is_some_and(|s| s.first_deployment);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match register_request(&username.get(), &password.get(), &confirm.get()) {
            Ok(req) => req,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(api, &req).await {
                    Ok(user) => {
                        api.notices().success(format!("Account {} created, please sign in", user.username));
                        navigate(routes::LOGIN, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => info.set(crate::net::error::auth_error_message(
                        &e,
                        crate::net::error::AuthContext::Register,
                    )),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = req;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Oil Test Admin"</h1>
                <p class="auth-card__subtitle">"Create an account"</p>
                <Show when=uninitialized>
                    <div class="auth-banner">
                        "The system has not been initialized yet. "
                        <A href=routes::INIT_ADMIN>"Create the administrator"</A>
                        " first."
                    </div>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username (3-20 characters)"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (6-30 characters)"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <A href=routes::LOGIN>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
