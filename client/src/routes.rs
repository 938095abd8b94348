//! Route table, route classification, and the sidebar menu tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigable path is tagged with exactly one [`RouteClass`]. The route
//! guard reads that tag (through [`RouteMeta`]) to decide between rendering
//! and redirecting, and the layout reads the menu tree for navigation and
//! breadcrumbs. Keeping both here stops menu links and router paths drifting.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const INIT_ADMIN: &str = "/init-admin";
pub const DASHBOARD: &str = "/dashboard";
pub const PROJECTS: &str = "/test-line/projects";
pub const INSPECTION_DEVICES: &str = "/test-line/devices";
pub const TEST_STATIONS: &str = "/test-line/stations";
pub const OIL_SAMPLES: &str = "/sample/oil-samples";
pub const USERS: &str = "/system/users";

const ROUTABLE: [&str; 10] = [
    "/",
    LOGIN,
    REGISTER,
    INIT_ADMIN,
    DASHBOARD,
    PROJECTS,
    INSPECTION_DEVICES,
    TEST_STATIONS,
    OIL_SAMPLES,
    USERS,
];

/// Access class attached to a route at configuration time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Only meaningful while the system has no administrator.
    InitOnly,
    /// Reachable without a session (login, register).
    Public,
    /// Requires a session token.
    Protected,
}

/// The route being entered, as seen by the gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub path: String,
    pub class: RouteClass,
}

impl RouteMeta {
    /// Build metadata for `path`, classifying it from the route table.
    pub fn for_path(path: &str) -> Self {
        let path = normalize_path(path);
        let class = classify(&path);
        Self { path, class }
    }

    #[must_use]
    pub fn requires_auth(&self) -> bool {
        self.class == RouteClass::Protected
    }

    #[must_use]
    pub fn is_init_admin(&self) -> bool {
        self.path == INIT_ADMIN
    }

    #[must_use]
    pub fn is_login_or_register(&self) -> bool {
        self.path == LOGIN || self.path == REGISTER
    }
}

/// Strip trailing slashes (keeping the root) so `/login/` and `/login` agree.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() }
}

/// Classify a path. Anything not explicitly public or init-only is protected.
pub fn classify(path: &str) -> RouteClass {
    match normalize_path(path).as_str() {
        INIT_ADMIN => RouteClass::InitOnly,
        LOGIN | REGISTER => RouteClass::Public,
        _ => RouteClass::Protected,
    }
}

/// Whether `path` is one of the configured routes.
pub fn is_routable(path: &str) -> bool {
    let path = normalize_path(path);
    ROUTABLE.contains(&path.as_str())
}

/// One entry of the sidebar navigation tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
    pub children: &'static [MenuItem],
}

pub const MENU: &[MenuItem] = &[
    MenuItem { path: DASHBOARD, label: "Dashboard", children: &[] },
    MenuItem {
        path: "/test-line",
        label: "Test line",
        children: &[
            MenuItem { path: OIL_SAMPLES, label: "Oil samples", children: &[] },
            MenuItem { path: TEST_STATIONS, label: "Test stations", children: &[] },
        ],
    },
    MenuItem {
        path: "/device-management",
        label: "Device management",
        children: &[MenuItem { path: INSPECTION_DEVICES, label: "Inspection devices", children: &[] }],
    },
    MenuItem {
        path: "/settings",
        label: "Settings",
        children: &[
            MenuItem { path: PROJECTS, label: "Projects", children: &[] },
            MenuItem { path: USERS, label: "Users", children: &[] },
        ],
    },
];

/// Menu items from the root down to the entry matching `path`.
///
/// Returns an empty trail when the path is not in the menu.
pub fn menu_trail(path: &str) -> Vec<&'static MenuItem> {
    let path = normalize_path(path);
    let mut trail = Vec::new();
    if find_trail(MENU, &path, &mut trail) {
        trail
    } else {
        Vec::new()
    }
}

fn find_trail(items: &'static [MenuItem], path: &str, trail: &mut Vec<&'static MenuItem>) -> bool {
    for item in items {
        trail.push(item);
        if item.path == path || find_trail(item.children, path, trail) {
            return true;
        }
        trail.pop();
    }
    false
}
