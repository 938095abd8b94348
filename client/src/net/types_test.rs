use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct NameFilter {
    name: Option<String>,
}

impl PageFilter for NameFilter {
    fn query_pairs(&self) -> Vec<(&'static str, Option<String>)> {
        vec![("name", self.name.clone())]
    }
}

// =============================================================
// Envelope + auth DTOs
// =============================================================

#[test]
fn system_status_reads_camel_case() {
    let body = r#"{"code":200,"message":"ok","data":{"firstDeployment":true},"errors":null}"#;
    let env: ApiResponse<SystemStatus> = serde_json::from_str(body).unwrap();
    assert_eq!(env.code, SUCCESS_CODE);
    assert_eq!(env.data, Some(SystemStatus { first_deployment: true }));
}

#[test]
fn envelope_tolerates_missing_message_and_errors() {
    let env: ApiResponse<bool> = serde_json::from_str(r#"{"code":200,"data":true}"#).unwrap();
    assert_eq!(env.message, "");
    assert!(env.errors.is_none());
}

#[test]
fn login_response_maps_all_fields() {
    let body = serde_json::json!({
        "accessToken": "jwt",
        "tokenType": "Bearer",
        "expiresIn": 3600,
        "expiresAt": "2026-01-09T01:39:48Z",
        "userId": 7,
        "username": "admin",
        "role": "ADMIN",
        "loginTime": "2026-01-08T01:39:48Z"
    });
    let resp: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.access_token, "jwt");
    assert_eq!(resp.user_id, 7);
    assert_eq!(resp.role, UserRole::Admin);
}

#[test]
fn first_admin_request_writes_confirm_password_camel_case() {
    let req = FirstAdminCreateRequest { password: "abcdef".into(), confirm_password: "abcdef".into() };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({ "password": "abcdef", "confirmPassword": "abcdef" }));
}

#[test]
fn user_role_parse_is_case_insensitive() {
    assert_eq!(UserRole::parse("admin"), Some(UserRole::Admin));
    assert_eq!(UserRole::parse(" MEMBER "), Some(UserRole::Member));
    assert_eq!(UserRole::parse("root"), None);
}

// =============================================================
// Paging
// =============================================================

#[test]
fn normalized_applies_defaults() {
    let req = PageRequest::<()>::default().normalized();
    assert_eq!(req.page, Some(DEFAULT_PAGE));
    assert_eq!(req.size, Some(DEFAULT_PAGE_SIZE));
}

#[test]
fn normalized_clamps_size_and_page() {
    let req = PageRequest::<()> { page: Some(0), size: Some(500), ..PageRequest::default() }.normalized();
    assert_eq!(req.page, Some(1));
    assert_eq!(req.size, Some(MAX_PAGE_SIZE));
}

#[test]
fn normalized_drops_unsafe_sort_field_and_its_order() {
    let req = PageRequest::<()> {
        sort_field: Some("name; drop".into()),
        sort_order: Some(SortOrder::Desc),
        ..PageRequest::default()
    }
    .normalized();
    assert_eq!(req.sort_field, None);
    assert_eq!(req.sort_order, None);
}

#[test]
fn query_pairs_include_filter_values() {
    let req = PageRequest {
        page: Some(2),
        size: Some(20),
        sort_field: Some("created_at".into()),
        sort_order: Some(SortOrder::Desc),
        filter: NameFilter { name: Some("pump".into()) },
    };
    let pairs = req.query_pairs();
    assert!(pairs.contains(&("page", Some("2".into()))));
    assert!(pairs.contains(&("size", Some("20".into()))));
    assert!(pairs.contains(&("sortField", Some("created_at".into()))));
    assert!(pairs.contains(&("sortOrder", Some("desc".into()))));
    assert!(pairs.contains(&("name", Some("pump".into()))));
}

#[test]
fn page_count_rounds_up_and_is_at_least_one() {
    let page = PageResponse::<u8> { content: vec![], total: 21, page: 1, size: 10 };
    assert_eq!(page.page_count(), 3);
    let empty = PageResponse::<u8> { content: vec![], total: 0, page: 1, size: 10 };
    assert_eq!(empty.page_count(), 1);
}

#[test]
fn sort_order_flips() {
    assert_eq!(SortOrder::Asc.flipped(), SortOrder::Desc);
    assert_eq!(SortOrder::Desc.flipped(), SortOrder::Asc);
}
