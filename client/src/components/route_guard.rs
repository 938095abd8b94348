//! Route guard: renders, redirects, or holds a route based on system state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the public auth pages individually and the authenticated layout as
//! a whole. Inputs are the system-status probe, the session token, and the
//! current path; the decision itself is `util::gate::evaluate`.
//!
//! DESIGN
//! ======
//! Each mount records the probe's settle counter and fires a fresh probe, so
//! the gate holds a loading state until a status fetched after this mount
//! arrives. Redirects are rendered as `<Redirect>` rather than issued from
//! event handlers, so navigation only ever follows from a gate decision.
//! They replace the current history entry.
//! The layout guard stays mounted while moving between its child routes; it
//! re-evaluates on every path change but only re-probes when mounted again.
//!
//! ERROR HANDLING
//! ==============
//! A failed probe is a gate state with retry and reload actions, never a
//! thrown error.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::error_boundary::reload_page;
use crate::net::error::{ApiError, AuthContext, auth_error_message};
use crate::routes::RouteMeta;
use crate::state::session::SessionStore;
use crate::state::system_status::SystemStatusProber;
use crate::util::gate::{GateDecision, evaluate, gate_state};

/// Text for the probe failure panel.
fn probe_failure_text(error: Option<&ApiError>) -> String {
    match error {
        Some(err) => auth_error_message(err, AuthContext::SystemStatus),
        None => "Unable to check the system status.".to_owned(),
    }
}

/// Navigation options for gate redirects.
pub(crate) fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let prober = expect_context::<SystemStatusProber>();
    let session = expect_context::<SessionStore>();
    let location = use_location();

    let mount_mark = prober.mark();
    Effect::new(move || prober.refetch());

    let decision = Memo::new(move |_| {
        let route = RouteMeta::for_path(&location.pathname.get());
        let probe = prober.view(mount_mark);
        evaluate(&probe, session.has_token(), &route)
    });

    Effect::new(move || {
        if let GateDecision::Redirect(to) = decision.get() {
            let state = gate_state(&prober.view(mount_mark));
            leptos::logging::log!(
                "route gate: {} -> {to} ({state:?})",
                location.pathname.get_untracked()
            );
        }
    });

    let retrying = move || prober.probe().with(|p| p.in_flight);
    let failure = move || probe_failure_text(prober.error().as_ref());

    move || match decision.get() {
        GateDecision::Loading => view! {
            <div class="gate gate--loading">
                <div class="spinner" aria-hidden="true"></div>
                <p>"Checking system status..."</p>
            </div>
        }
        .into_any(),
        GateDecision::ProbeFailed => view! {
            <div class="gate gate--failed">
                <p class="gate__message">{failure}</p>
                <div class="gate__actions">
                    <button class="btn btn--primary" disabled=retrying on:click=move |_| prober.refetch()>
                        {move || if retrying() { "Retrying..." } else { "Retry" }}
                    </button>
                    <button class="btn" on:click=move |_| reload_page()>
                        "Reload page"
                    </button>
                </div>
            </div>
        }
        .into_any(),
        GateDecision::Redirect(to) => view! { <Redirect path=to options=redirect_options()/> }.into_any(),
        GateDecision::Render => children().into_any(),
    }
}
