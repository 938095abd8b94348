use super::*;

#[test]
fn create_checks_credential_rules() {
    let short = FormValues::from_pairs([("username", "bob"), ("password", "abc"), ("role", "MEMBER")]);
    assert_eq!(Users::to_create(&short).err(), Some(ValidationError::PasswordTooShort));

    let ok = FormValues::from_pairs([("username", "bob"), ("password", "abcdef"), ("role", "ADMIN")]);
    let body = Users::to_create(&ok).unwrap();
    assert_eq!(body.role, UserRole::Admin);
}

#[test]
fn update_leaves_blank_password_unchanged() {
    let values = FormValues::from_pairs([("username", "bob"), ("password", ""), ("role", "MEMBER")]);
    let body = Users::to_update(&values).unwrap();
    assert_eq!(body.password, None);
    assert_eq!(body.role, Some(UserRole::Member));
}

#[test]
fn unknown_role_is_rejected() {
    let values = FormValues::from_pairs([("role", "ROOT")]);
    assert_eq!(Users::to_update(&values).err(), Some(ValidationError::InvalidChoice("Role")));
}

#[test]
fn create_defaults_to_member() {
    assert_eq!(Users::defaults().get("role"), "MEMBER");
}
