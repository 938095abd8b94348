//! Networking modules for the admin REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `request` owns transport, envelope decoding, and error side effects.
//! `api` and `crud` bind endpoints on top of it, and `types`/`resources`
//! define the wire schema.

pub mod api;
pub mod crud;
pub mod error;
pub mod request;
pub mod resources;
pub mod types;
