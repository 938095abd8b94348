//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Auth pages (login, register, init-admin) own their forms and requests.
//! Resource pages only describe their resource and delegate rendering to
//! `components::resource_table`.

pub mod dashboard;
pub mod init_admin;
pub mod inspection_devices;
pub mod login;
pub mod oil_samples;
pub mod projects;
pub mod register;
pub mod test_stations;
pub mod users;
