use super::*;
use crate::net::types::SortOrder;

#[test]
fn resource_paths_match_backend_prefixes() {
    assert_eq!(Users::PATH, "/users");
    assert_eq!(Projects::PATH, "/projects");
    assert_eq!(InspectionDevices::PATH, "/inspection-devices");
    assert_eq!(OilSamples::PATH, "/oil-samples");
    assert_eq!(TestStations::PATH, "/test-stations");
}

#[test]
fn item_and_page_paths() {
    assert_eq!(item_path::<Projects>(42), "/projects/42");
    assert_eq!(page_path::<OilSamples>(), "/oil-samples/page");
}

#[test]
fn lookup_path_places_value_last() {
    assert_eq!(lookup_path::<Projects>("validate-unique", "P-001"), "/projects/validate-unique/P-001");
    assert_eq!(lookup_path::<InspectionDevices>("validate-ip", "10.0.0.7"), "/inspection-devices/validate-ip/10.0.0.7");
}

#[test]
fn station_switch_paths() {
    assert_eq!(switch_path::<TestStations>(5, EnabledSwitch::Enable), "/test-stations/5/enable");
    assert_eq!(switch_path::<TestStations>(5, EnabledSwitch::Disable), "/test-stations/5/disable");
    assert_eq!(switch_path::<TestStations>(5, EnabledSwitch::Toggle), "/test-stations/5/toggle");
}

#[test]
fn flipping_moves_away_from_current_state() {
    assert_eq!(EnabledSwitch::flipping(true), EnabledSwitch::Disable);
    assert_eq!(EnabledSwitch::flipping(false), EnabledSwitch::Enable);
}

#[test]
fn page_query_includes_resource_filter() {
    let req = PageRequest::<ProjectFilter> {
        page: Some(2),
        size: Some(20),
        sort_field: Some("projectNo".into()),
        sort_order: Some(SortOrder::Desc),
        filter: ProjectFilter { project_name: Some("Grid".into()), ..ProjectFilter::default() },
    };
    let pairs = req.query_pairs();
    assert_eq!(&pairs[..4], &[
        ("page", Some("2".into())),
        ("size", Some("20".into())),
        ("sortField", Some("projectNo".into())),
        ("sortOrder", Some("desc".into())),
    ]);
    assert!(pairs.contains(&("projectName", Some("Grid".into()))));
}

#[test]
fn lookup_actions_per_resource() {
    assert_eq!(Users::LOOKUP, None);
    assert_eq!(Projects::LOOKUP, Some("by-project-no"));
    assert_eq!(InspectionDevices::LOOKUP, Some("by-device-no"));
    assert_eq!(OilSamples::LOOKUP, Some("by-sample-no"));
    assert_eq!(TestStations::LOOKUP, Some("by-station-no"));
}

#[test]
fn unique_checks_target_validate_endpoints() {
    let actions = |checks: &[UniqueCheck]| checks.iter().map(|c| c.action).collect::<Vec<_>>();
    assert_eq!(actions(Users::UNIQUE_CHECKS), ["validate-username"]);
    assert_eq!(actions(Projects::UNIQUE_CHECKS), ["validate-unique"]);
    assert_eq!(actions(InspectionDevices::UNIQUE_CHECKS), ["validate-serial-number", "validate-ip"]);
    assert_eq!(actions(OilSamples::UNIQUE_CHECKS), ["validate-unique"]);
    assert_eq!(actions(TestStations::UNIQUE_CHECKS), ["validate-station-no"]);
}

#[test]
fn unique_check_path_uses_form_value() {
    let check = TestStations::UNIQUE_CHECKS[0];
    assert_eq!(check.field, "stationNo");
    assert_eq!(lookup_path::<TestStations>(check.action, "12"), "/test-stations/validate-station-no/12");
}
