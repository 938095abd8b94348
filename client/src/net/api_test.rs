use super::*;

#[test]
fn system_status_request_always_bypasses_cache() {
    let req = system_status_request();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/auth/system-status");
    assert_eq!(req.policy, FetchPolicy::Always);
    assert!(req.body.is_none());
}

#[test]
fn auth_paths_match_backend_contract() {
    assert_eq!(LOGIN_PATH, "/auth/login");
    assert_eq!(REGISTER_PATH, "/auth/register");
    assert_eq!(INIT_ADMIN_PATH, "/auth/init-admin");
    assert_eq!(LOGOUT_PATH, "/auth/logout");
    assert_eq!(ME_PATH, "/auth/me");
}
