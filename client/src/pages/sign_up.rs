//! Sign-up page: username, email and password against `POST /signup`.
//!
//! A successful sign-up does not log the user in; it sends them to `/login`.
//! Failures keep name and email so the user can fix the password and retry.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::notice_tray::notify;
use crate::net::api::{ApiClient, ApiTransport, AuthError};
use crate::net::types::SignUpRequest;
use crate::state::notice::{Notice, NoticeQueue};
use crate::state::session::TokenStore;

pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";
pub const SIGN_UP_FAILED_TITLE: &str = "Oops! Something went wrong.";
pub const SIGN_UP_FALLBACK_DESCRIPTION: &str = "Please try again or contact support.";
pub const WELCOME_TITLE: &str = "Welcome aboard!";
pub const WELCOME_DESCRIPTION: &str = "Your digital planning journey begins now.";
pub const AFTER_SIGN_UP_ROUTE: &str = "/login";

/// Controlled state of the sign-up form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub new_user_name: String,
    pub new_user_email: String,
    pub new_user_password: String,
    pub loading: bool,
}

/// Notice to show and, on success, where to go next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub notice: Notice,
    pub redirect: Option<&'static str>,
}

impl SignUpForm {
    /// Mark the form busy and snapshot the fields.
    ///
    /// Returns `None` while a previous submit is still in flight.
    pub fn begin_submit(&mut self) -> Option<SignUpRequest> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(SignUpRequest {
            new_user_name: self.new_user_name.clone(),
            new_user_email: self.new_user_email.clone(),
            new_user_password: self.new_user_password.clone(),
        })
    }

    /// Apply the result of [`attempt_sign_up`]. Only the password is cleared on failure.
    pub fn finish(&mut self, result: Result<(), AuthError>) -> SignUpOutcome {
        self.loading = false;
        match result {
            Ok(()) => SignUpOutcome {
                notice: Notice::success(WELCOME_TITLE, WELCOME_DESCRIPTION),
                redirect: Some(AFTER_SIGN_UP_ROUTE),
            },
            Err(e) => {
                log::warn!("sign-up failed: {e:?}");
                self.new_user_password.clear();
                SignUpOutcome {
                    notice: Notice::destructive(SIGN_UP_FAILED_TITLE, &failure_description(&e)),
                    redirect: None,
                }
            }
        }
    }
}

/// Required-field check. Presence only; no format or strength rules.
///
/// # Errors
///
/// `AuthError::Validation` when any field is empty.
pub fn validate(request: &SignUpRequest) -> Result<(), AuthError> {
    if request.new_user_name.is_empty() || request.new_user_email.is_empty() || request.new_user_password.is_empty() {
        return Err(AuthError::Validation(REQUIRED_FIELDS_MESSAGE));
    }
    Ok(())
}

/// Validate, then register the account. Invalid input never reaches the network.
///
/// # Errors
///
/// `Validation` for empty fields, otherwise whatever [`ApiClient::sign_up`] reports.
pub async fn attempt_sign_up<T: ApiTransport, S: TokenStore>(
    api: &ApiClient<T, S>,
    request: &SignUpRequest,
) -> Result<(), AuthError> {
    validate(request)?;
    api.sign_up(request).await
}

/// Notice text for a failed sign-up: the server's message, then the error's
/// own message, then a generic fallback.
pub fn failure_description(err: &AuthError) -> String {
    let message = match err {
        AuthError::Rejected { message: Some(m), .. } => m.clone(),
        other => other.to_string(),
    };
    if message.trim().is_empty() { SIGN_UP_FALLBACK_DESCRIPTION.to_owned() } else { message }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeQueue>>();
    let form = RwSignal::new(SignUpForm::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(SignUpForm::begin_submit).flatten() else {
            return;
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = attempt_sign_up(&ApiClient::browser(), &request).await;
            let Some(outcome) = form.try_update(|f| f.finish(result)) else {
                return;
            };
            notify(notices, outcome.notice);
            if let Some(route) = outcome.redirect {
                navigate(route, NavigateOptions::default());
            }
        });
    };

    let loading = move || form.with(|f| f.loading);

    view! {
        <div class="auth-page">
            <form class="auth-card auth-form" on:submit=on_submit>
                <div class="auth-card__intro">
                    <span class="auth-card__icon" aria-hidden="true">"\u{1F4C5}"</span>
                    <h1>"Start Planning Today"</h1>
                    <p class="auth-card__subtitle">"Sign up for your digital planner"</p>
                </div>
                <input
                    class="auth-input"
                    name="newUserName"
                    type="text"
                    placeholder="Username"
                    prop:value=move || form.with(|f| f.new_user_name.clone())
                    on:input=move |ev| form.update(|f| f.new_user_name = event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    name="newUserEmail"
                    type="email"
                    placeholder="Email"
                    prop:value=move || form.with(|f| f.new_user_email.clone())
                    on:input=move |ev| form.update(|f| f.new_user_email = event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    name="newUserPassword"
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.new_user_password.clone())
                    on:input=move |ev| form.update(|f| f.new_user_password = event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=loading>
                    {move || if loading() { "Creating Account..." } else { "Sign Up" }}
                </button>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Log In"</A>
                </p>
            </form>
        </div>
    }
}
