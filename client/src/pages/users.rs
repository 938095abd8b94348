//! User management page.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::resource_table::{AdminResource, Column, resource_table};
use crate::net::crud::Users;
use crate::net::resources::{CreateUser, UpdateUser, User, UserFilter};
use crate::net::types::UserRole;
use crate::util::forms::{FieldKind, FieldSpec, FormValues};
use crate::util::validation::{ValidationError, validate_init_admin, validate_register};

const USERNAME: FieldSpec = FieldSpec::new("username", "Username", FieldKind::Text).required();
const PASSWORD: FieldSpec = FieldSpec::new("password", "Password", FieldKind::Password).required();
const ROLE: FieldSpec = FieldSpec::new("role", "Role", FieldKind::Select(&["ADMIN", "MEMBER"])).required();

impl AdminResource for Users {
    const TITLE: &'static str = "Users";
    const SINGULAR: &'static str = "user";
    const SEARCH_HINT: &'static str = "Search by username";

    fn columns() -> &'static [Column] {
        const {
            &[
                Column::sorted("ID", "id"),
                Column::sorted("Username", "username"),
                Column::plain("Role"),
                Column::sorted("Created", "createdAt"),
            ]
        }
    }

    fn fields() -> &'static [FieldSpec] {
        &[USERNAME, PASSWORD, ROLE]
    }

    fn id(item: &User) -> i64 {
        item.id
    }

    fn cells(item: &User) -> Vec<String> {
        vec![
            item.id.to_string(),
            item.username.clone(),
            item.role.as_str().to_owned(),
            item.created_at.clone().unwrap_or_default(),
        ]
    }

    fn filter(keyword: &str) -> UserFilter {
        UserFilter { username: Some(keyword.to_owned()), role: None }
    }

    fn defaults() -> FormValues {
        FormValues::from_pairs([("role", UserRole::Member.as_str())])
    }

    /// The password is never echoed back; leaving it blank keeps it.
    fn values(item: &User) -> FormValues {
        FormValues::from_pairs([("username", item.username.as_str()), ("role", item.role.as_str())])
    }

    fn to_create(values: &FormValues) -> Result<CreateUser, ValidationError> {
        let username = values.required_text(&USERNAME)?;
        let password = values.get(PASSWORD.key).to_owned();
        validate_register(&username, &password, &password)?;
        let role = values.choice(&ROLE, UserRole::parse)?.ok_or(ValidationError::Required(ROLE.label))?;
        Ok(CreateUser { username, password, role })
    }

    fn to_update(values: &FormValues) -> Result<UpdateUser, ValidationError> {
        let password = values.text(PASSWORD.key);
        if let Some(password) = &password {
            validate_init_admin(password, password)?;
        }
        Ok(UpdateUser { username: values.text(USERNAME.key), password, role: values.choice(&ROLE, UserRole::parse)? })
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    resource_table::<Users>()
}
