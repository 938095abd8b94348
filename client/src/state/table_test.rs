use super::*;

#[test]
fn defaults_to_first_page_of_ten() {
    let state = TableState::default();
    assert_eq!(state.page, 1);
    assert_eq!(state.size, 10);
    assert_eq!(state.page_count(), 1);
}

#[test]
fn set_page_clamps_to_known_pages() {
    let mut state = TableState { total: 35, ..TableState::default() };
    state.set_page(9);
    assert_eq!(state.page, 4);
    state.set_page(0);
    assert_eq!(state.page, 1);
    state.next_page();
    state.next_page();
    assert_eq!(state.page, 3);
    state.prev_page();
    assert_eq!(state.page, 2);
}

#[test]
fn size_change_and_search_reset_page() {
    let mut state = TableState { total: 100, page: 5, ..TableState::default() };
    state.set_size(20);
    assert_eq!((state.page, state.size), (1, 20));

    state.set_page(3);
    state.search("  oil  ");
    assert_eq!(state.page, 1);
    assert_eq!(state.keyword, "oil");
}

#[test]
fn set_size_bounds() {
    let mut state = TableState::default();
    state.set_size(0);
    assert_eq!(state.size, 1);
    state.set_size(1_000);
    assert_eq!(state.size, 100);
}

#[test]
fn toggle_sort_flips_same_field_and_resets_new_field() {
    let mut state = TableState::default();
    state.toggle_sort("projectNo");
    assert_eq!(state.sort_order, SortOrder::Asc);
    state.toggle_sort("projectNo");
    assert_eq!(state.sort_order, SortOrder::Desc);
    state.toggle_sort("projectName");
    assert_eq!(state.sort_field.as_deref(), Some("projectName"));
    assert_eq!(state.sort_order, SortOrder::Asc);
}

#[test]
fn loaded_pulls_back_past_last_page() {
    let mut state = TableState { total: 11, page: 2, ..TableState::default() };
    state.begin_load();
    assert!(state.loading);
    assert!(state.loaded(10));
    assert_eq!(state.page, 1);
    assert!(!state.loading);
    assert!(!state.loaded(10));
}

#[test]
fn mutation_closes_modals_and_changes_query_key() {
    let mut state = TableState::default();
    state.open_edit(7);
    assert_eq!(state.form, Some(FormMode::Edit(7)));
    let before = state.query_key();
    state.mutated();
    assert_eq!(state.form, None);
    assert_ne!(state.query_key(), before);

    state.ask_delete(3);
    assert_eq!(state.confirm_delete, Some(3));
    state.cancel_delete();
    assert_eq!(state.confirm_delete, None);
}

#[test]
fn page_request_only_sends_order_with_field() {
    let mut state = TableState::default();
    assert_eq!(state.page_request(()).sort_order, None);
    state.toggle_sort("id");
    let req = state.page_request(());
    assert_eq!(req.sort_field.as_deref(), Some("id"));
    assert_eq!(req.sort_order, Some(SortOrder::Asc));
}
