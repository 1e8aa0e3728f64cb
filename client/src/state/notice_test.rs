use super::*;
use crate::state::session::MemoryTokenStore;

fn find(queue: &NoticeQueue, id: u64) -> Option<&Notice> {
    queue.notices().iter().find(|n| n.id == id)
}

#[test]
fn push_assigns_increasing_ids() {
    let mut queue = NoticeQueue::default();
    let a = queue.push(Notice::success("a", ""));
    let b = queue.push(Notice::destructive("b", ""));
    assert!(b > a);
    assert_eq!(queue.notices().len(), 2);
    assert_eq!(find(&queue, b).map(|n| n.title.as_str()), Some("b"));
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut queue = NoticeQueue::default();
    let a = queue.push(Notice::success("a", ""));
    let b = queue.push(Notice::success("b", ""));
    let removed = queue.dismiss(a).unwrap();
    assert_eq!(removed.title, "a");
    assert!(find(&queue, a).is_none());
    assert!(find(&queue, b).is_some());
}

#[test]
fn dismiss_unknown_id_is_none() {
    let mut queue = NoticeQueue::default();
    assert!(queue.dismiss(42).is_none());
    assert!(queue.notices().is_empty());
}

#[test]
fn confirm_logout_has_action_and_no_timeout() {
    let notice = Notice::confirm_logout();
    assert_eq!(notice.action, Some(NoticeAction::ConfirmLogout));
    assert_eq!(notice.auto_dismiss_ms, None);
    assert_eq!(notice.title, "Confirm Logout");
    assert_eq!(NoticeAction::ConfirmLogout.label(), "Yes");
}

#[test]
fn plain_notices_auto_dismiss() {
    let notice = Notice::destructive("Oops", "failed");
    assert_eq!(notice.variant, NoticeVariant::Destructive);
    assert_eq!(notice.auto_dismiss_ms, Some(DEFAULT_AUTO_DISMISS_MS));
    assert!(notice.action.is_none());
}

#[test]
fn closing_logout_prompt_keeps_session() {
    let store = MemoryTokenStore::with_token("tok-1");
    let mut session = Session::restore(&store);
    assert!(!NoticeAction::ConfirmLogout.resolve(false, &mut session, &store));
    assert_eq!(session.token(), Some("tok-1"));
    assert_eq!(store.load().as_deref(), Some("tok-1"));
}

#[test]
fn accepting_logout_prompt_logs_out() {
    let store = MemoryTokenStore::with_token("tok-1");
    let mut session = Session::restore(&store);
    assert!(NoticeAction::ConfirmLogout.resolve(true, &mut session, &store));
    assert_eq!(session, Session::LoggedOut);
    assert!(store.load().is_none());
}
