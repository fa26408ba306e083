use super::*;

// =============================================================
// NoticeState bookkeeping
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeLevel::Error, "first".to_owned());
    let b = state.push(NoticeLevel::Error, "second".to_owned());
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn push_records_level_and_text() {
    let mut state = NoticeState::default();
    let id = state.push(NoticeLevel::Error, "fetch failed".to_owned());
    let notice = state.items.iter().find(|n| n.id == id).expect("notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.text, "fetch failed");
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeLevel::Info, "keep".to_owned());
    let b = state.push(NoticeLevel::Error, "drop".to_owned());
    state.dismiss(b);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, a);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = NoticeState::default();
    state.push(NoticeLevel::Error, "only".to_owned());
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeLevel::Error, "first".to_owned());
    state.dismiss(a);
    let b = state.push(NoticeLevel::Error, "second".to_owned());
    assert_ne!(a, b);
}
