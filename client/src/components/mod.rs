//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the application chrome (guard, layout, toasts, error
//! panel) and the generic resource table, reading shared services from
//! Leptos context providers.

pub mod basic_layout;
pub mod error_boundary;
pub mod resource_table;
pub mod route_guard;
pub mod toast_host;
