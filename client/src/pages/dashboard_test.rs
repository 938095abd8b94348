use super::*;

#[test]
fn total_label_shows_placeholder_until_loaded() {
    assert_eq!(total_label(None), "-");
    assert_eq!(total_label(Some(42)), "42");
}

#[test]
fn count_request_asks_for_a_single_row() {
    let req = count_request::<Projects>();
    let pairs = req.query_pairs();
    assert_eq!(pairs[0], ("page", Some("1".to_owned())));
    assert_eq!(pairs[1], ("size", Some("1".to_owned())));
    assert_eq!(pairs[2], ("sortField", None));
}
