use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::test_helpers::{StubTransport, stub_client};
use crate::state::notice::NoticeVariant;
use crate::state::session::MemoryTokenStore;

fn filled(email: &str, password: &str) -> LoginForm {
    LoginForm { user_email: email.to_owned(), user_password: password.to_owned(), loading: false }
}

/// Drive one submit against `transport` the way the page does.
fn submit(
    form: &mut LoginForm,
    session: &mut Session,
    store: &MemoryTokenStore,
    transport: &StubTransport,
) -> LoginOutcome {
    let request = form.begin_submit().expect("form idle");
    let api = stub_client(transport, store);
    let result = block_on(attempt_login(&api, &request));
    form.finish(result, session, store)
}

fn assert_generic_failure(outcome: &LoginOutcome) {
    match outcome {
        LoginOutcome::Notify(notice) => {
            assert_eq!(notice.variant, NoticeVariant::Destructive);
            assert_eq!(notice.title, LOGIN_FAILED_TITLE);
            assert_eq!(notice.description, LOGIN_FAILED_DESCRIPTION);
        }
        LoginOutcome::Redirect(route) => panic!("unexpected redirect to {route}"),
    }
}

// =============================================================
// success
// =============================================================

#[test]
fn login_success_persists_token_and_goes_home() {
    let store = MemoryTokenStore::default();
    let transport = StubTransport::default().reply(200, json!({ "user": "tok-123" }));
    let mut session = Session::default();
    let mut form = filled("a@b.com", "secret");

    let outcome = submit(&mut form, &mut session, &store, &transport);

    assert_eq!(outcome, LoginOutcome::Redirect("/"));
    assert!(session.is_logged_in());
    assert_eq!(session.token(), Some("tok-123"));
    assert_eq!(store.load().as_deref(), Some("tok-123"));
    assert!(!form.loading);
    assert_eq!(
        transport.requests()[0].body,
        Some(json!({ "userEmail": "a@b.com", "userPassword": "secret" }))
    );
}

#[test]
fn any_credentials_with_token_reply_log_in() {
    for (email, password, token) in [("x@y.z", "p", "t1"), ("user@shop.io", "hunter2", "t2"), ("a", "b", "9")] {
        let store = MemoryTokenStore::default();
        let transport = StubTransport::default().reply(200, json!({ "status": "ok", "user": token }));
        let mut session = Session::default();
        let mut form = filled(email, password);
        submit(&mut form, &mut session, &store, &transport);
        assert_eq!(session.token(), Some(token));
        assert_eq!(store.load().as_deref(), Some(token));
    }
}

// =============================================================
// failure
// =============================================================

#[test]
fn non_token_payload_keeps_session_and_clears_fields() {
    let store = MemoryTokenStore::default();
    let transport = StubTransport::default().reply(200, json!({ "status": "ok" }));
    let mut session = Session::default();
    let mut form = filled("a@b.com", "secret");

    let outcome = submit(&mut form, &mut session, &store, &transport);

    assert_generic_failure(&outcome);
    assert_eq!(session, Session::LoggedOut);
    assert!(store.load().is_none());
    assert_eq!(form, LoginForm::default());
}

#[test]
fn server_rejection_uses_same_generic_notice() {
    let store = MemoryTokenStore::default();
    let transport = StubTransport::default()
        .reply(401, json!({ "status": "error", "message": "Invalid email or password" }));
    let mut session = Session::default();
    let mut form = filled("a@b.com", "wrong");

    let outcome = submit(&mut form, &mut session, &store, &transport);

    assert_generic_failure(&outcome);
    assert_eq!(session, Session::LoggedOut);
    assert!(form.user_email.is_empty());
    assert!(form.user_password.is_empty());
}

#[test]
fn network_failure_uses_same_generic_notice() {
    let store = MemoryTokenStore::default();
    let transport = StubTransport::default().fail("Network Error");
    let mut session = Session::default();
    let mut form = filled("a@b.com", "secret");

    let outcome = submit(&mut form, &mut session, &store, &transport);

    assert_generic_failure(&outcome);
    assert_eq!(session, Session::LoggedOut);
    assert_eq!(form, LoginForm::default());
}

// =============================================================
// single-flight
// =============================================================

#[test]
fn begin_submit_is_single_flight() {
    let mut form = filled("a@b.com", "secret");
    let first = form.begin_submit();
    assert!(first.is_some());
    assert!(form.loading);
    assert!(form.begin_submit().is_none());
}

#[test]
fn form_accepts_a_new_submit_after_failure() {
    let store = MemoryTokenStore::default();
    let transport = StubTransport::default().fail("down");
    let mut session = Session::default();
    let mut form = filled("a@b.com", "secret");
    submit(&mut form, &mut session, &store, &transport);
    assert!(form.begin_submit().is_some());
}
