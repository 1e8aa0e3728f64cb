use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::test_helpers::{StubTransport, stub_client};
use crate::state::notice::NoticeVariant;
use crate::state::session::{MemoryTokenStore, Session};

fn filled(name: &str, email: &str, password: &str) -> SignUpForm {
    SignUpForm {
        new_user_name: name.to_owned(),
        new_user_email: email.to_owned(),
        new_user_password: password.to_owned(),
        loading: false,
    }
}

fn submit(form: &mut SignUpForm, transport: &StubTransport, store: &MemoryTokenStore) -> SignUpOutcome {
    let request = form.begin_submit().expect("form idle");
    let api = stub_client(transport, store);
    let result = block_on(attempt_sign_up(&api, &request));
    form.finish(result)
}

// =============================================================
// validation
// =============================================================

#[test]
fn any_empty_field_skips_the_network() {
    for mut form in [filled("", "a@b.com", "pw"), filled("ann", "", "pw"), filled("ann", "a@b.com", "")] {
        let transport = StubTransport::default().reply(200, json!({ "status": "ok" }));
        let outcome = submit(&mut form, &transport, &MemoryTokenStore::default());

        assert!(transport.requests().is_empty());
        assert_eq!(outcome.redirect, None);
        assert_eq!(outcome.notice.variant, NoticeVariant::Destructive);
        assert_eq!(outcome.notice.title, SIGN_UP_FAILED_TITLE);
        assert_eq!(outcome.notice.description, REQUIRED_FIELDS_MESSAGE);
        assert!(form.new_user_password.is_empty());
    }
}

#[test]
fn validate_checks_presence_only() {
    let ok = SignUpRequest {
        new_user_name: " ".to_owned(),
        new_user_email: "not-an-email".to_owned(),
        new_user_password: "1".to_owned(),
    };
    assert_eq!(validate(&ok), Ok(()));
}

// =============================================================
// success
// =============================================================

#[test]
fn ok_status_goes_to_login_without_touching_session() {
    let store = MemoryTokenStore::default();
    let session_before = Session::restore(&store);
    let transport = StubTransport::default().reply(200, json!({ "status": "ok" }));
    let mut form = filled("ann", "ann@example.com", "pw");

    let outcome = submit(&mut form, &transport, &store);

    assert_eq!(outcome.redirect, Some("/login"));
    assert_eq!(outcome.notice.variant, NoticeVariant::Success);
    assert_eq!(outcome.notice.title, WELCOME_TITLE);
    assert_eq!(Session::restore(&store), session_before);
    assert!(store.load().is_none());
    assert!(!form.loading);
}

// =============================================================
// failure
// =============================================================

#[test]
fn failure_clears_only_the_password() {
    let transport = StubTransport::default()
        .reply(409, json!({ "status": "error", "message": "Username or email already exists" }));
    let mut form = filled("ann", "ann@example.com", "pw");

    let outcome = submit(&mut form, &transport, &MemoryTokenStore::default());

    assert_eq!(outcome.redirect, None);
    assert_eq!(outcome.notice.description, "Username or email already exists");
    assert_eq!(form.new_user_name, "ann");
    assert_eq!(form.new_user_email, "ann@example.com");
    assert!(form.new_user_password.is_empty());
    assert!(!form.loading);
}

#[test]
fn non_ok_payload_without_message_uses_local_message() {
    let transport = StubTransport::default().reply(200, json!({ "status": "nope" }));
    let mut form = filled("ann", "ann@example.com", "pw");
    let outcome = submit(&mut form, &transport, &MemoryTokenStore::default());
    assert_eq!(outcome.notice.description, "Signup failed");
}

#[test]
fn network_failure_shows_transport_message() {
    let transport = StubTransport::default().fail("Network Error");
    let mut form = filled("ann", "ann@example.com", "pw");
    let outcome = submit(&mut form, &transport, &MemoryTokenStore::default());
    assert_eq!(outcome.notice.description, "Network Error");
}

#[test]
fn failure_description_priority() {
    assert_eq!(
        failure_description(&AuthError::Rejected { status: 500, message: Some("server says".to_owned()) }),
        "server says"
    );
    assert_eq!(
        failure_description(&AuthError::Rejected { status: 500, message: None }),
        "Request failed with status code 500"
    );
    assert_eq!(failure_description(&AuthError::Network(String::new())), SIGN_UP_FALLBACK_DESCRIPTION);
    assert_eq!(failure_description(&AuthError::Validation(REQUIRED_FIELDS_MESSAGE)), REQUIRED_FIELDS_MESSAGE);
}

#[test]
fn begin_submit_is_single_flight() {
    let mut form = filled("ann", "ann@example.com", "pw");
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none());
}
