//! System-status probe: is there an administrator yet?
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`SystemStatusProber`]. Every route guard mount takes a
//! [`SystemStatusProber::mark`] and triggers a fetch; the guard stays in the
//! loading state until a fetch settles *after* that mark, so a status cached
//! from an earlier page can never drive a redirect. The init-admin page calls
//! [`SystemStatusProber::refresh`] after creating the administrator and again
//! when the user moves on to login. Between the two it holds
//! [`StatusProbe::admin_created`], which keeps the bootstrap page rendered
//! so its confirmation stays on screen after the status flips.
//!
//! DESIGN
//! ======
//! Fetches are numbered with tickets. Only the newest ticket may settle the
//! probe, so a slow response from an older fetch cannot overwrite a newer
//! one. A failed fetch records its error but keeps the last good status.
//! Requests use [`FetchPolicy::Always`](crate::net::request::FetchPolicy)
//! and never come from a cache.

#[cfg(test)]
#[path = "system_status_test.rs"]
mod system_status_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::request::ApiClient;
use crate::net::types::SystemStatus;
use crate::util::gate::ProbeView;

/// Pure probe bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusProbe {
    pub status: Option<SystemStatus>,
    pub error: Option<ApiError>,
    pub in_flight: bool,
    pub latest_ticket: u64,
    /// Number of fetches that have settled.
    pub settled: u64,
    /// This browser created the administrator and has not left the
    /// bootstrap page yet.
    pub admin_created: bool,
}

impl StatusProbe {
    /// Start a fetch and return its ticket.
    pub fn begin(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.in_flight = true;
        self.latest_ticket
    }

    /// Apply a fetch outcome. Returns `false` (and changes nothing) when a
    /// newer fetch has started since `ticket` was issued.
    pub fn settle(&mut self, ticket: u64, outcome: Result<SystemStatus, ApiError>) -> bool {
        if ticket != self.latest_ticket {
            return false;
        }
        self.in_flight = false;
        self.settled += 1;
        match outcome {
            Ok(status) => {
                self.status = Some(status);
                self.error = None;
            }
            Err(error) => self.error = Some(error),
        }
        true
    }

    /// Gate input for a guard mounted when `settled` was `mount_mark`.
    pub fn view(&self, mount_mark: u64) -> ProbeView {
        let fetched_after_mount = self.settled > mount_mark;
        ProbeView {
            status: self.status,
            error: self.error.as_ref().map(ToString::to_string),
            fetching: self.in_flight || !fetched_after_mount,
            fetched_after_mount,
            admin_created: self.admin_created,
        }
    }
}

/// Reactive probe service, provided as context.
#[derive(Clone, Copy, Debug)]
pub struct SystemStatusProber {
    probe: RwSignal<StatusProbe>,
    api: ApiClient,
}

impl SystemStatusProber {
    pub fn new(api: ApiClient) -> Self {
        Self { probe: RwSignal::new(StatusProbe::default()), api }
    }

    pub fn probe(&self) -> RwSignal<StatusProbe> {
        self.probe
    }

    /// Reactive gate input for a guard mounted at `mount_mark`.
    pub fn view(&self, mount_mark: u64) -> ProbeView {
        self.probe.with(|p| p.view(mount_mark))
    }

    /// Current settle counter, read without subscribing.
    pub fn mark(&self) -> u64 {
        self.probe.with_untracked(|p| p.settled)
    }

    /// Latest known status, reactive.
    pub fn status(&self) -> Option<SystemStatus> {
        self.probe.with(|p| p.status)
    }

    /// Most recent fetch failure, reactive.
    pub fn error(&self) -> Option<ApiError> {
        self.probe.with(|p| p.error.clone())
    }

    /// Keep `/init-admin` rendered after the administrator was created here.
    pub fn hold_admin_created(&self) {
        self.probe.update(|p| p.admin_created = true);
    }

    /// Hand `/init-admin` back to the normal gate rules.
    pub fn release_admin_created(&self) {
        self.probe.update(|p| p.admin_created = false);
    }

    /// Fire a fetch unless one is already in flight.
    pub fn refetch(&self) {
        if self.probe.with_untracked(|p| p.in_flight) {
            return;
        }
        let ticket = self.begin();
        #[cfg(feature = "hydrate")]
        {
            let this = *self;
            leptos::task::spawn_local(async move {
                let result = api::system_status(this.api).await;
                this.finish(ticket, &result);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    }

    /// Always issue a fresh fetch and wait for it.
    ///
    /// # Errors
    ///
    /// Returns the fetch failure; the probe records it as well.
    pub async fn refresh(&self) -> Result<SystemStatus, ApiError> {
        let ticket = self.begin();
        let result = api::system_status(self.api).await;
        self.finish(ticket, &result);
        result
    }

    fn begin(&self) -> u64 {
        let mut ticket = 0;
        self.probe.update(|p| ticket = p.begin());
        ticket
    }

    fn finish(&self, ticket: u64, result: &Result<SystemStatus, ApiError>) {
        let outcome = result.clone();
        let mut applied = false;
        self.probe.update(|p| applied = p.settle(ticket, outcome));
        if !applied {
            return;
        }
        match result {
            Ok(status) => leptos::logging::log!("system status: first_deployment={}", status.first_deployment),
            Err(err) => leptos::logging::warn!("system status probe failed: {err}"),
        }
    }
}
