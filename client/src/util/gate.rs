//! Route gate decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard component feeds this module three inputs on every
//! navigation: the system-status probe, whether a session token exists, and
//! the route being entered. [`evaluate`] returns what the guard should show.
//! Navigation itself happens in the guard by rendering a redirect; nothing
//! here has side effects.
//!
//! DESIGN
//! ======
//! Rules are checked in a fixed precedence order:
//!
//! 1. probe still loading → [`GateDecision::Loading`]
//! 2. probe failed on a protected route with no token → [`GateDecision::ProbeFailed`]
//! 3. uninitialized system → render `/init-admin`, send everything else there
//! 4. initialized system → `/init-admin` goes to login, login/register with a
//!    token go to the dashboard, protected routes without a token go to login
//! 5. no status at all → render (fail open)
//!
//! Between rules 1 and 2, an administrator created in this browser keeps
//! `/init-admin` rendered until the user moves on to login.
//!
//! Every (status, token, route class) combination maps to exactly one
//! decision, so repeated evaluation with the same inputs cannot flip-flop.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::net::types::SystemStatus;
use crate::routes::{self, RouteMeta};

/// Snapshot of the system-status probe, as the gate sees it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProbeView {
    /// Last successful result, kept across later failures.
    pub status: Option<SystemStatus>,
    /// Error from the most recent settled fetch, if it failed.
    pub error: Option<String>,
    /// A fetch is in flight, or the first fetch since mount has not settled.
    pub fetching: bool,
    /// At least one fetch has settled since the guard mounted.
    pub fetched_after_mount: bool,
    /// The bootstrap page is showing its confirmation for an administrator
    /// created in this browser.
    pub admin_created: bool,
}

impl ProbeView {
    /// Rule 1: nothing usable yet, or only a result from before this mount.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        (self.fetching && self.status.is_none() && self.error.is_none()) || (self.fetching && !self.fetched_after_mount)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Show the loading indicator; no navigation decision yet.
    Loading,
    /// Show the retry/reload panel instead of the route.
    ProbeFailed,
    /// Render the requested route.
    Render,
    /// Replace the current location with this path.
    Redirect(&'static str),
}

/// Coarse classification of the probe, for logs and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Probing,
    ProbeFailed,
    Uninitialized,
    Initialized,
}

pub fn gate_state(probe: &ProbeView) -> GateState {
    if probe.is_loading() {
        return GateState::Probing;
    }
    match (&probe.status, &probe.error) {
        (_, Some(_)) => GateState::ProbeFailed,
        (Some(status), None) if status.first_deployment => GateState::Uninitialized,
        (Some(_), None) => GateState::Initialized,
        (None, None) => GateState::Probing,
    }
}

/// Decide what the guard shows for `route`.
pub fn evaluate(probe: &ProbeView, has_token: bool, route: &RouteMeta) -> GateDecision {
    if probe.is_loading() {
        return GateDecision::Loading;
    }

    if probe.admin_created && route.is_init_admin() {
        return GateDecision::Render;
    }

    if probe.error.is_some() && route.requires_auth() && !has_token && !route.is_login_or_register() {
        return GateDecision::ProbeFailed;
    }

    let Some(status) = &probe.status else {
        return GateDecision::Render;
    };

    if status.first_deployment {
        uninitialized(has_token, route)
    } else {
        initialized(has_token, route)
    }
}

fn uninitialized(has_token: bool, route: &RouteMeta) -> GateDecision {
    if route.is_init_admin() {
        return GateDecision::Render;
    }
    if route.requires_auth() && !has_token {
        return GateDecision::Redirect(routes::INIT_ADMIN);
    }
    if !route.requires_auth() && !has_token && route.is_login_or_register() {
        return GateDecision::Redirect(routes::INIT_ADMIN);
    }
    GateDecision::Render
}

fn initialized(has_token: bool, route: &RouteMeta) -> GateDecision {
    if route.is_init_admin() {
        return GateDecision::Redirect(routes::LOGIN);
    }
    if route.requires_auth() && !has_token {
        return GateDecision::Redirect(routes::LOGIN);
    }
    if !route.requires_auth() && has_token && route.is_login_or_register() {
        return GateDecision::Redirect(routes::DASHBOARD);
    }
    GateDecision::Render
}
