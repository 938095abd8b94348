use super::*;
use crate::routes;

#[test]
fn breadcrumb_follows_menu_tree() {
    assert_eq!(breadcrumb(routes::INSPECTION_DEVICES), ["Device management", "Inspection devices"]);
    assert_eq!(breadcrumb(routes::DASHBOARD), ["Dashboard"]);
    assert!(breadcrumb("/nowhere").is_empty());
}

#[test]
fn groups_are_active_for_their_children() {
    let settings = MENU.iter().find(|item| item.label == "Settings").unwrap();
    assert!(is_active(settings, routes::USERS));
    assert!(is_active(settings, "/system/users/"));
    assert!(!is_active(settings, routes::DASHBOARD));
}
