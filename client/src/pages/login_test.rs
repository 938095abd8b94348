use super::*;

#[test]
fn login_request_trims_username_only() {
    let req = login_request("  admin ", " secret ").unwrap();
    assert_eq!(req.username, "admin");
    assert_eq!(req.password, " secret ");
}

#[test]
fn login_request_requires_both_fields() {
    assert_eq!(login_request("   ", "pw").err(), Some(ValidationError::UsernameMissing));
    assert_eq!(login_request("admin", "").err(), Some(ValidationError::PasswordMissing));
}

#[test]
fn successful_login_leaves_navigation_to_the_gate() {
    use crate::net::types::{LoginResponse, SystemStatus, UserRole};
    use crate::routes::RouteMeta;
    use crate::state::session::Session;
    use crate::util::gate::{GateDecision, ProbeView, evaluate};

    let resp = LoginResponse {
        access_token: "jwt-token".to_owned(),
        token_type: "Bearer".to_owned(),
        expires_in: 3600,
        expires_at: "2026-01-09T01:39:48Z".to_owned(),
        user_id: 1,
        username: "admin".to_owned(),
        role: UserRole::Admin,
        login_time: "2026-01-08T01:39:48Z".to_owned(),
    };
    let probe = ProbeView {
        status: Some(SystemStatus { first_deployment: false }),
        fetched_after_mount: true,
        ..ProbeView::default()
    };
    let login = RouteMeta::for_path(routes::LOGIN);
    assert_eq!(evaluate(&probe, Session::default().has_token(), &login), GateDecision::Render);
    let session = Session::from_login(&resp);
    assert_eq!(evaluate(&probe, session.has_token(), &login), GateDecision::Redirect(routes::DASHBOARD));
}
