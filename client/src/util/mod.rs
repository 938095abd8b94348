//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision and validation logic (`gate`, `validation`, `forms`) lives
//! here beside the browser glue (`storage`, `dark_mode`) so pages and
//! components stay thin and the logic stays testable without a browser.

pub mod dark_mode;
pub mod forms;
pub mod gate;
pub mod storage;
pub mod validation;
