//! Client-side form validation.
//!
//! Validators run before any request is built; a failure is shown next to
//! the form and never reaches the network, the gate, or the error boundary.
//! Lengths are counted in characters, not bytes.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use thiserror::Error;

pub const PASSWORD_MIN: usize = 6;
pub const PASSWORD_MAX: usize = 30;
pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 20;

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter a username")]
    UsernameMissing,
    #[error("username must be 3-20 characters")]
    UsernameLength,
    #[error("please enter a password")]
    PasswordMissing,
    #[error("password too short")]
    PasswordTooShort,
    #[error("password too long")]
    PasswordTooLong,
    #[error("please confirm the password")]
    ConfirmMissing,
    #[error("passwords do not match")]
    Mismatch,
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must be a number")]
    InvalidNumber(&'static str),
    #[error("{field}: expected key=value, got `{entry}`")]
    InvalidEntry { field: &'static str, entry: String },
    #[error("{0} must be an IPv4 address")]
    InvalidIp(&'static str),
    #[error("{0} has an unknown value")]
    InvalidChoice(&'static str),
}

fn check_password(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();
    if len == 0 {
        return Err(ValidationError::PasswordMissing);
    }
    if len < PASSWORD_MIN {
        return Err(ValidationError::PasswordTooShort);
    }
    if len > PASSWORD_MAX {
        return Err(ValidationError::PasswordTooLong);
    }
    Ok(())
}

fn check_confirm(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if confirm.is_empty() {
        return Err(ValidationError::ConfirmMissing);
    }
    if password != confirm {
        return Err(ValidationError::Mismatch);
    }
    Ok(())
}

/// Administrator bootstrap form: password bounds, then confirmation.
///
/// # Errors
///
/// The first failing rule, in the order the fields appear.
pub fn validate_init_admin(password: &str, confirm: &str) -> Result<(), ValidationError> {
    check_password(password)?;
    check_confirm(password, confirm)
}

/// # Errors
///
/// [`ValidationError::UsernameMissing`] or [`ValidationError::PasswordMissing`].
pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::UsernameMissing);
    }
    if password.is_empty() {
        return Err(ValidationError::PasswordMissing);
    }
    Ok(())
}

/// # Errors
///
/// The first failing rule: username, password bounds, confirmation.
pub fn validate_register(username: &str, password: &str, confirm: &str) -> Result<(), ValidationError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ValidationError::UsernameMissing);
    }
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&username.chars().count()) {
        return Err(ValidationError::UsernameLength);
    }
    check_password(password)?;
    check_confirm(password, confirm)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak (mix upper/lower case letters and digits)",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }
}

/// Strength by how many character classes appear: upper, lower, digit, symbol.
pub fn password_strength(password: &str) -> Strength {
    let classes = [
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    ];
    match classes.iter().filter(|present| **present).count() {
        0 | 1 => Strength::Weak,
        2 => Strength::Medium,
        _ => Strength::Strong,
    }
}

/// Dotted-quad IPv4 check for device addresses.
///
/// # Errors
///
/// [`ValidationError::InvalidIp`] naming `field`.
pub fn validate_ipv4(field: &'static str, raw: &str) -> Result<(), ValidationError> {
    raw.trim()
        .parse::<std::net::Ipv4Addr>()
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidIp(field))
}
