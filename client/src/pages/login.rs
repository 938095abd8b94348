//! Login page with username and password.
//!
//! On success the session is populated and nothing else: the route guard
//! sees the new token and redirects to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::LoginRequest;
use crate::routes;
use crate::util::validation::{ValidationError, validate_login};

/// Trim the username and check both fields before sending.
fn login_request(username: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    let username = username.trim();
    validate_login(username, password)?;
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let api = crate::net::request::ApiClient::from_context();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match login_request(&username.get(), &password.get()) {
            Ok(req) => req,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(api, &req).await {
                Ok(resp) => {
                    leptos::logging::log!("logged in as {}", resp.username);
                    api.session().apply_login(&resp);
                }
                Err(e) => {
                    info.set(crate::net::error::auth_error_message(&e, crate::net::error::AuthContext::Login));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = req;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Oil Test Admin"</h1>
                <p class="auth-card__subtitle">"Sign in"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account? "
                    <A href=routes::REGISTER>"Register"</A>
                </p>
            </div>
        </div>
    }
}
