use super::*;

#[test]
fn classify_tags_each_auth_route() {
    assert_eq!(classify(INIT_ADMIN), RouteClass::InitOnly);
    assert_eq!(classify(LOGIN), RouteClass::Public);
    assert_eq!(classify(REGISTER), RouteClass::Public);
    assert_eq!(classify(DASHBOARD), RouteClass::Protected);
    assert_eq!(classify(USERS), RouteClass::Protected);
}

#[test]
fn classify_unknown_paths_are_protected() {
    assert_eq!(classify("/"), RouteClass::Protected);
    assert_eq!(classify("/nowhere"), RouteClass::Protected);
}

#[test]
fn classify_ignores_trailing_slash() {
    assert_eq!(classify("/login/"), RouteClass::Public);
    assert_eq!(classify("/init-admin//"), RouteClass::InitOnly);
}

#[test]
fn normalize_path_keeps_root() {
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("/dashboard/"), "/dashboard");
}

#[test]
fn route_meta_requires_auth_only_when_protected() {
    assert!(RouteMeta::for_path(PROJECTS).requires_auth());
    assert!(!RouteMeta::for_path(LOGIN).requires_auth());
    assert!(!RouteMeta::for_path(INIT_ADMIN).requires_auth());
}

#[test]
fn route_meta_flags_login_and_register() {
    assert!(RouteMeta::for_path(LOGIN).is_login_or_register());
    assert!(RouteMeta::for_path("/register/").is_login_or_register());
    assert!(!RouteMeta::for_path(INIT_ADMIN).is_login_or_register());
    assert!(RouteMeta::for_path(INIT_ADMIN).is_init_admin());
}

#[test]
fn is_routable_covers_route_constants() {
    for path in [LOGIN, REGISTER, INIT_ADMIN, DASHBOARD, PROJECTS, OIL_SAMPLES, "/"] {
        assert!(is_routable(path), "{path} should be routable");
    }
    assert!(!is_routable("/test-line"));
}

#[test]
fn menu_trail_resolves_nested_item() {
    let labels: Vec<_> = menu_trail(TEST_STATIONS).iter().map(|m| m.label).collect();
    assert_eq!(labels, vec!["Test line", "Test stations"]);
}

#[test]
fn menu_trail_resolves_top_level_item() {
    let labels: Vec<_> = menu_trail(DASHBOARD).iter().map(|m| m.label).collect();
    assert_eq!(labels, vec!["Dashboard"]);
}

#[test]
fn menu_trail_empty_for_unknown_path() {
    assert!(menu_trail(LOGIN).is_empty());
}

#[test]
fn every_menu_leaf_is_routable() {
    fn walk(items: &[MenuItem]) {
        for item in items {
            if item.children.is_empty() {
                assert!(is_routable(item.path), "{} not routable", item.path);
            }
            walk(item.children);
        }
    }
    walk(MENU);
}
