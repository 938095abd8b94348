//! First-deployment administrator bootstrap page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable only while the system reports `first_deployment`. The route
//! guard sends every unauthenticated visitor here until an administrator
//! exists, and sends everyone away from here afterwards.
//!
//! DESIGN
//! ======
//! The username is the reserved administrator identity and cannot be edited.
//! Password rules run locally before any request. After a successful create
//! the page holds the prober's `admin_created` flag and refreshes the status,
//! so the confirmation stays rendered even though the system now reports
//! initialized. "Go to login" refreshes again and releases the hold; the
//! route guard then performs the redirect. This page never navigates.
//!
//! ERROR HANDLING
//! ==============
//! A 400 reporting that the administrator already exists means another
//! browser won the race; the page explains that and re-probes after a short
//! delay, which lets the guard move on to login. Other failures stay on the
//! form.

#[cfg(test)]
#[path = "init_admin_test.rs"]
mod init_admin_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{FirstAdminCreateRequest, SystemStatus};
use crate::state::system_status::SystemStatusProber;
use crate::util::validation::{ValidationError, password_strength, validate_init_admin};

/// Reserved administrator account name.
pub const ADMIN_USERNAME: &str = "admin";

/// Delay before re-probing when the administrator already exists.
pub const ALREADY_EXISTS_REDIRECT_MS: u64 = 1500;

fn init_admin_request(password: &str, confirm: &str) -> Result<FirstAdminCreateRequest, ValidationError> {
    validate_init_admin(password, confirm)?;
    Ok(FirstAdminCreateRequest { password: password.to_owned(), confirm_password: confirm.to_owned() })
}

/// Whether a fresh probe taken on "go to login" still reports first
/// deployment, in which case the form is shown again.
fn still_uninitialized(probe: &Result<SystemStatus, ApiError>) -> bool {
    matches!(probe, Ok(status) if status.first_deployment)
}

#[component]
pub fn InitAdminPage() -> impl IntoView {
    let prober = expect_context::<SystemStatusProber>();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let created = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let api = crate::net::request::ApiClient::from_context();
    on_cleanup(move || prober.release_admin_created());

    let strength = move || {
        let pw = password.get();
        (!pw.is_empty()).then(|| password_strength(&pw))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match init_admin_request(&password.get(), &confirm.get()) {
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
            match crate::net::api::init_admin(api, &req).await {
                Ok(user) => {
                    leptos::logging::log!("administrator {} created", user.username);
                    prober.hold_admin_created();
                    created.set(Some(user.username));
                    let _ = prober.refresh().await;
                    busy.set(false);
                }
                Err(e) => {
                    use crate::net::error::{AuthContext, auth_error_message, is_admin_exists};
                    info.set(auth_error_message(&e, AuthContext::InitAdmin));
                    if is_admin_exists(&e) {
                        leptos::logging::warn!("administrator already exists, leaving bootstrap page");
                        gloo_timers::future::sleep(std::time::Duration::from_millis(ALREADY_EXISTS_REDIRECT_MS))
                            .await;
                        let _ = prober.refresh().await;
                    }
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = req;
    };

    let on_go_to_login = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let probe = prober.refresh().await;
            if still_uninitialized(&probe) {
                created.set(None);
            }
            busy.set(false);
            prober.release_admin_created();
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Initialize system"</h1>
                <div class="auth-panel" class:hidden=move || created.get().is_some()>
                    <p class="auth-card__subtitle">
                        "No administrator exists yet. Choose a password for the administrator account."
                    </p>
                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-label">
                            "Username"
                            <input class="auth-input" type="text" value=ADMIN_USERNAME readonly=true />
                        </label>
                        <label class="auth-label">
                            "Password"
                            <input
                                class="auth-input"
                                type="password"
                                placeholder="6-30 characters"
                                autocomplete="new-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        {move || strength().map(|s| view! { <p class="auth-strength">"Strength: " {s.label()}</p> })}
                        <label class="auth-label">
                            "Confirm password"
                            <input
                                class="auth-input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating..." } else { "Create administrator" }}
                        </button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="auth-message auth-message--error">{move || info.get()}</p>
                    </Show>
                </div>
                <div class="auth-success" class:hidden=move || created.get().is_none()>
                    <p>"Administrator account created."</p>
                    <p>"Username: " <strong>{move || created.get().unwrap_or_default()}</strong></p>
                    <button class="btn btn--primary auth-button" on:click=on_go_to_login disabled=move || busy.get()>
                        "Go to login"
                    </button>
                </div>
            </div>
        </div>
    }
}
