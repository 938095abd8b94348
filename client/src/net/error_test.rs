use super::*;

fn http(status: u16, message: &str) -> ApiError {
    ApiError::Http { status, message: message.to_owned() }
}

#[test]
fn status_reads_http_and_envelope_codes() {
    assert_eq!(http(404, "").status(), Some(404));
    assert_eq!(ApiError::Rejected { code: 401, message: String::new() }.status(), Some(401));
    assert_eq!(ApiError::Rejected { code: 1001, message: String::new() }.status(), None);
    assert_eq!(ApiError::Timeout.status(), None);
}

#[test]
fn unauthorized_from_http_or_envelope() {
    assert!(http(401, "expired").is_unauthorized());
    assert!(ApiError::Rejected { code: 401, message: "expired".into() }.is_unauthorized());
    assert!(!http(403, "nope").is_unauthorized());
    assert!(!ApiError::Transport("down".into()).is_unauthorized());
}

#[test]
fn user_message_prefers_server_text() {
    assert_eq!(http(400, "project number taken").user_message(), "project number taken");
    assert_eq!(http(500, "").user_message(), "Request error");
    assert_eq!(ApiError::Timeout.user_message(), "request timed out");
}

#[test]
fn admin_exists_detected_in_english_and_chinese() {
    assert!(is_admin_exists(&http(400, "Administrator already exists")));
    assert!(is_admin_exists(&http(400, "管理员已存在")));
    assert!(!is_admin_exists(&http(409, "already exists")));
}

#[test]
fn login_401_reports_bad_credentials() {
    let msg = auth_error_message(&http(401, "bad"), AuthContext::Login);
    assert_eq!(msg, "Authentication failed, check your username and password");
}

#[test]
fn init_admin_maps_conflict_and_existing_admin() {
    assert_eq!(
        auth_error_message(&http(409, ""), AuthContext::InitAdmin),
        "Initialization already in progress, do not resubmit"
    );
    assert_eq!(
        auth_error_message(&http(400, "admin already exists"), AuthContext::InitAdmin),
        "An administrator already exists"
    );
}

#[test]
fn system_status_without_response_blames_network() {
    let msg = auth_error_message(&ApiError::Transport("refused".into()), AuthContext::SystemStatus);
    assert_eq!(msg, "Cannot reach the server, check the network connection");
    let msg = auth_error_message(&http(418, ""), AuthContext::SystemStatus);
    assert_eq!(msg, "System status check failed (status 418)");
}
