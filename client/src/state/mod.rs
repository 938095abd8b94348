//! Reactive client state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the session, notification, and system-status handles once;
//! pages and components read them with `expect_context`. `table` is local
//! per-page state and is never provided globally.

pub mod notifications;
pub mod session;
pub mod system_status;
pub mod table;
