use super::*;

#[test]
fn register_request_trims_username() {
    let req = register_request(" operator ", "secret1", "secret1").unwrap();
    assert_eq!(req.username, "operator");
    assert_eq!(req.password, "secret1");
}

#[test]
fn register_request_reports_first_problem() {
    assert_eq!(register_request("ab", "secret1", "secret1").err(), Some(ValidationError::UsernameLength));
    assert_eq!(register_request("operator", "secret1", "secret2").err(), Some(ValidationError::Mismatch));
    assert_eq!(register_request("operator", "abc", "abc").err(), Some(ValidationError::PasswordTooShort));
}
