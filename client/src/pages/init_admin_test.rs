use super::*;

#[test]
fn short_password_is_rejected_locally() {
    let err = init_admin_request("ab", "ab").unwrap_err();
    assert_eq!(err, ValidationError::PasswordTooShort);
    assert_eq!(err.to_string(), "password too short");
}

#[test]
fn valid_password_builds_request_without_username() {
    let req = init_admin_request("abcdef", "abcdef").unwrap();
    assert_eq!(req, FirstAdminCreateRequest { password: "abcdef".into(), confirm_password: "abcdef".into() });
    let body = serde_json::to_value(&req).unwrap();
    assert!(body.get("username").is_none());
    assert_eq!(body["confirmPassword"], "abcdef");
}

#[test]
fn mismatched_confirmation_is_rejected() {
    assert_eq!(init_admin_request("abcdef", "abcdeg").err(), Some(ValidationError::Mismatch));
    assert_eq!(init_admin_request("abcdef", "").err(), Some(ValidationError::ConfirmMissing));
}

#[test]
fn go_to_login_shows_form_again_only_while_uninitialized() {
    assert!(!still_uninitialized(&Ok(SystemStatus { first_deployment: false })));
    assert!(still_uninitialized(&Ok(SystemStatus { first_deployment: true })));
    assert!(!still_uninitialized(&Err(ApiError::Timeout)));
}

#[test]
fn confirmation_survives_status_flip_until_released() {
    use crate::routes::{self, RouteMeta};
    use crate::state::system_status::StatusProbe;
    use crate::util::gate::{GateDecision, evaluate};

    let route = RouteMeta::for_path(routes::INIT_ADMIN);
    let mut probe = StatusProbe::default();
    let mark = probe.settled;
    let ticket = probe.begin();
    probe.settle(ticket, Ok(SystemStatus { first_deployment: true }));

    probe.admin_created = true;
    let ticket = probe.begin();
    probe.settle(ticket, Ok(SystemStatus { first_deployment: false }));
    assert_eq!(evaluate(&probe.view(mark), false, &route), GateDecision::Render);

    let ticket = probe.begin();
    let fresh = Ok(SystemStatus { first_deployment: false });
    assert!(!still_uninitialized(&fresh));
    probe.settle(ticket, fresh);
    probe.admin_created = false;
    assert_eq!(evaluate(&probe.view(mark), false, &route), GateDecision::Redirect(routes::LOGIN));
}

#[test]
fn admin_username_is_reserved_identity() {
    assert_eq!(ADMIN_USERNAME, "admin");
}
