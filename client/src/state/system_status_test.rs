use super::*;
use crate::state::notifications::Notifications;
use crate::state::session::SessionStore;

const UNINIT: SystemStatus = SystemStatus { first_deployment: true };
const INIT: SystemStatus = SystemStatus { first_deployment: false };

// =============================================================
// StatusProbe
// =============================================================

#[test]
fn begin_issues_increasing_tickets() {
    let mut probe = StatusProbe::default();
    assert_eq!(probe.begin(), 1);
    assert_eq!(probe.begin(), 2);
    assert!(probe.in_flight);
}

#[test]
fn settle_applies_latest_ticket() {
    let mut probe = StatusProbe::default();
    let ticket = probe.begin();
    assert!(probe.settle(ticket, Ok(UNINIT)));
    assert_eq!(probe.status, Some(UNINIT));
    assert!(!probe.in_flight);
    assert_eq!(probe.settled, 1);
}

#[test]
fn stale_ticket_is_discarded() {
    let mut probe = StatusProbe::default();
    let old = probe.begin();
    let new = probe.begin();
    assert!(!probe.settle(old, Ok(UNINIT)));
    assert!(probe.in_flight);
    assert_eq!(probe.status, None);
    assert!(probe.settle(new, Ok(INIT)));
    assert_eq!(probe.status, Some(INIT));
}

#[test]
fn failure_keeps_previous_status() {
    let mut probe = StatusProbe::default();
    let first = probe.begin();
    probe.settle(first, Ok(INIT));
    let second = probe.begin();
    probe.settle(second, Err(ApiError::Timeout));
    assert_eq!(probe.status, Some(INIT));
    assert_eq!(probe.error, Some(ApiError::Timeout));
    assert_eq!(probe.view(0).error.as_deref(), Some("request timed out"));
}

#[test]
fn success_clears_previous_error() {
    let mut probe = StatusProbe::default();
    let first = probe.begin();
    probe.settle(first, Err(ApiError::Transport("offline".into())));
    let second = probe.begin();
    probe.settle(second, Ok(UNINIT));
    assert_eq!(probe.error, None);
}

#[test]
fn view_is_loading_until_a_fetch_settles_after_mount() {
    let mut probe = StatusProbe::default();
    let ticket = probe.begin();
    probe.settle(ticket, Ok(UNINIT));

    // A new guard mounts; the earlier status must not count yet.
    let mark = probe.settled;
    let view = probe.view(mark);
    assert!(view.fetching);
    assert!(!view.fetched_after_mount);
    assert!(view.is_loading());

    let ticket = probe.begin();
    probe.settle(ticket, Ok(INIT));
    let view = probe.view(mark);
    assert!(!view.fetching);
    assert!(view.fetched_after_mount);
    assert_eq!(view.status, Some(INIT));
}

#[test]
fn in_flight_refetch_after_mount_is_not_loading() {
    let mut probe = StatusProbe::default();
    let ticket = probe.begin();
    probe.settle(ticket, Ok(INIT));
    probe.begin();
    let view = probe.view(0);
    assert!(view.fetching);
    assert!(!view.is_loading());
}

// =============================================================
// SystemStatusProber
// =============================================================

#[test]
fn prober_mark_tracks_settled_count() {
    let owner = Owner::new();
    owner.with(|| {
        let api = ApiClient::new(SessionStore::new(Default::default()), Notifications::new());
        let prober = SystemStatusProber::new(api);
        assert_eq!(prober.mark(), 0);
        prober.probe().update(|p| {
            let t = p.begin();
            p.settle(t, Ok(UNINIT));
        });
        assert_eq!(prober.mark(), 1);
        assert_eq!(prober.status(), Some(UNINIT));
    });
}

#[test]
fn refetch_dedups_while_in_flight() {
    let owner = Owner::new();
    owner.with(|| {
        let api = ApiClient::new(SessionStore::new(Default::default()), Notifications::new());
        let prober = SystemStatusProber::new(api);
        prober.refetch();
        prober.refetch();
        assert_eq!(prober.probe().get_untracked().latest_ticket, 1);
        assert!(prober.view(0).is_loading());
    });
}

#[test]
fn prober_admin_hold_round_trips() {
    let owner = Owner::new();
    owner.with(|| {
        let api = ApiClient::new(SessionStore::new(Default::default()), Notifications::new());
        let prober = SystemStatusProber::new(api);
        prober.hold_admin_created();
        assert!(prober.view(0).admin_created);
        prober.release_admin_created();
        assert!(!prober.view(0).admin_created);
        assert_eq!(prober.error(), None);
    });
}
