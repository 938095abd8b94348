//! Auth session: bearer token plus the signed-in user's identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionStore`] is provided as context by `App`. The route guard reads
//! it reactively, login/init flows write it, and the request layer clears it
//! on any 401. Only `token` and `user_info` are persisted, under
//! [`STORAGE_KEY`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::{LoginResponse, UserInfo};
use crate::util::storage;

pub const STORAGE_KEY: &str = "auth-storage";

/// Client-held authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl Session {
    /// Session established by a successful login.
    pub fn from_login(resp: &LoginResponse) -> Self {
        Self {
            token: Some(resp.access_token.clone()),
            user_info: Some(UserInfo { id: resp.user_id, username: resp.username.clone(), role: resp.role }),
        }
    }

    /// A blank token counts as no token.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// `Authorization` header value for the current token.
    pub fn bearer(&self) -> Option<String> {
        self.has_token().then(|| format!("Bearer {}", self.token.as_deref().unwrap_or_default().trim()))
    }
}

/// Reactive, persisted session handle.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    session: RwSignal<Session>,
}

impl SessionStore {
    pub fn new(initial: Session) -> Self {
        Self { session: RwSignal::new(initial) }
    }

    /// Restore from `localStorage`, or start signed out.
    pub fn load() -> Self {
        Self::new(storage::load_json::<Session>(STORAGE_KEY).unwrap_or_default())
    }

    /// Reactive read of the whole session.
    pub fn get(&self) -> Session {
        self.session.get()
    }

    pub fn get_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.token.clone())
    }

    pub fn user_info(&self) -> Option<UserInfo> {
        self.session.with(|s| s.user_info.clone())
    }

    pub fn has_token(&self) -> bool {
        self.session.with(Session::has_token)
    }

    pub fn set_token(&self, token: Option<String>) {
        self.write(|s| s.token = token);
    }

    pub fn set_user_info(&self, user_info: Option<UserInfo>) {
        self.write(|s| s.user_info = user_info);
    }

    pub fn apply_login(&self, resp: &LoginResponse) {
        let next = Session::from_login(resp);
        self.write(|s| *s = next);
    }

    /// Clear token and user info in a single update.
    pub fn logout(&self) {
        self.write(|s| *s = Session::default());
    }

    fn write(&self, f: impl FnOnce(&mut Session)) {
        self.session.update(f);
        self.session.with_untracked(|s| storage::save_json(STORAGE_KEY, s));
    }
}
