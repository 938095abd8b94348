use super::*;

fn notice(id: &str) -> Notice {
    Notice { id: id.to_owned(), level: NoticeLevel::Info, message: format!("msg {id}") }
}

#[test]
fn push_keeps_insertion_order() {
    let mut state = NotificationsState::default();
    state.push(notice("a"));
    state.push(notice("b"));
    let ids: Vec<_> = state.items.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn push_evicts_oldest_beyond_limit() {
    let mut state = NotificationsState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.push(notice(&i.to_string()));
    }
    assert_eq!(state.items.len(), MAX_TOASTS);
    assert_eq!(state.items[0].id, "2");
}

#[test]
fn dismiss_removes_only_matching_id() {
    let mut state = NotificationsState::default();
    state.push(notice("a"));
    state.push(notice("b"));
    state.dismiss("a");
    assert_eq!(state.items, vec![notice("b")]);
    state.dismiss("missing");
    assert_eq!(state.items.len(), 1);
}

#[test]
fn levels_map_to_distinct_classes() {
    let classes = [
        NoticeLevel::Info.css_class(),
        NoticeLevel::Success.css_class(),
        NoticeLevel::Warning.css_class(),
        NoticeLevel::Error.css_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
