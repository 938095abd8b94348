//! Toast notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! The request layer pushes an error toast for every failed call; pages push
//! success toasts after mutations. `ToastHost` renders the queue and
//! dismisses entries after [`TOAST_TTL_MS`].

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;

pub const MAX_TOASTS: usize = 5;
pub const TOAST_TTL_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast toast--info",
            Self::Success => "toast toast--success",
            Self::Warning => "toast toast--warning",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub level: NoticeLevel,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notice>,
}

impl NotificationsState {
    /// Append a notice, evicting the oldest beyond [`MAX_TOASTS`].
    pub fn push(&mut self, notice: Notice) {
        self.items.push(notice);
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
    }

    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }
}

/// Context handle for pushing toasts from any component or task.
#[derive(Clone, Copy, Debug)]
pub struct Notifications {
    state: RwSignal<NotificationsState>,
}

impl Notifications {
    pub fn new() -> Self {
        Self { state: RwSignal::new(NotificationsState::default()) }
    }

    pub fn state(&self) -> RwSignal<NotificationsState> {
        self.state
    }

    /// Queue a toast and return its id.
    pub fn push(&self, level: NoticeLevel, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let notice = Notice { id: id.clone(), level, message: message.into() };
        self.state.update(|s| s.push(notice));
        id
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message);
    }

    pub fn dismiss(&self, id: &str) {
        self.state.update(|s| s.dismiss(id));
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}
